//! Output format definitions and utilities.

use std::fmt;

/// Supported formats for the generated translation files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
  /// JavaScript module with a default-exported object literal (default)
  #[default]
  JavaScript,
  /// TypeScript module with a default-exported object literal
  TypeScript,
  /// Plain JSON object
  Json,
}

impl OutputFormat {
  /// Pick the format from the `--typescript` / `--json` switches.
  ///
  /// Callers are expected to reject the case where both are set; if they
  /// don't, JSON wins.
  pub fn from_flags(typescript: bool, json: bool) -> Self {
    if json {
      OutputFormat::Json
    } else if typescript {
      OutputFormat::TypeScript
    } else {
      OutputFormat::JavaScript
    }
  }

  /// Returns the file extension for this output format.
  pub fn file_extension(&self) -> &'static str {
    match self {
      OutputFormat::JavaScript => "js",
      OutputFormat::TypeScript => "ts",
      OutputFormat::Json => "json",
    }
  }

  /// Whether files are emitted as an ES module rather than bare JSON.
  pub fn is_module(&self) -> bool {
    !matches!(self, OutputFormat::Json)
  }
}

impl fmt::Display for OutputFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.file_extension())
  }
}
