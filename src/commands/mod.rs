//! CLI command handlers.
//!
//! The tool has a single operation, converting one Confluence page, which
//! lives in [`sync`]. Keeping it here leaves `cli.rs` to argument parsing.

pub mod sync;
