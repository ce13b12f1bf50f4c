//! Confluence i18n library
//!
//! Turns the translation table of a Confluence page into one translation file
//! per language: fetch the page ([`confluence`]), extract the table
//! ([`table`]), regroup it by language ([`dictionary`]) and write the files
//! ([`emit`]).

pub mod cli;
pub mod color;
pub mod commands;
pub mod confluence;
pub mod dictionary;
pub mod emit;
pub mod error;
pub mod format;
pub mod table;

pub use error::{Error, Result};
