//! Error taxonomy shared by every stage of the translation pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the fetch → parse → build → write pipeline.
///
/// Every stage returns one of these and nothing is retried; the CLI reports the
/// error together with its `source()` chain.
#[derive(Debug, Error)]
pub enum Error {
  /// Invalid or conflicting command-line options.
  #[error("{0}")]
  Configuration(String),

  /// The request to Confluence could not be completed.
  #[error("{message}")]
  Network {
    message: String,
    #[source]
    source: Option<reqwest::Error>,
  },

  /// Confluence answered, but not with the page shape we expect.
  #[error("{message}")]
  MalformedResponse {
    message: String,
    #[source]
    source: Option<serde_json::Error>,
  },

  /// The translation table could not be extracted from the page body.
  #[error("{0}")]
  Parse(String),

  /// Writing an output file failed.
  #[error("Failed to write {}", path.display())]
  Filesystem {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl Error {
  pub(crate) fn network(message: impl Into<String>, source: reqwest::Error) -> Self {
    Error::Network {
      message: message.into(),
      source: Some(source),
    }
  }

  pub(crate) fn malformed(message: impl Into<String>) -> Self {
    Error::MalformedResponse {
      message: message.into(),
      source: None,
    }
  }
}
