//! Color utilities for terminal output
//!
//! Semantic styles for the progress and result lines printed by the CLI,
//! disabled when the user asks for it or stdout is not a terminal.

use std::fmt::Display;
use std::io::IsTerminal;

use owo_colors::{OwoColorize, Style};

use crate::cli::ColorOption;

/// Color scheme for the application
pub struct ColorScheme {
  enabled: bool,
}

impl ColorScheme {
  /// Create a new color scheme based on user preference and terminal
  /// capabilities
  pub fn new(color_option: ColorOption) -> Self {
    let enabled = match color_option {
      ColorOption::Always => true,
      ColorOption::Never => false,
      ColorOption::Auto => std::io::stdout().is_terminal(),
    };

    Self { enabled }
  }

  /// Check if colors are enabled
  pub fn is_enabled(&self) -> bool {
    self.enabled
  }

  fn paint<T: Display>(&self, text: T, style: Style) -> String {
    if self.enabled {
      format!("{}", text.style(style))
    } else {
      text.to_string()
    }
  }

  /// Style for success messages (green)
  pub fn success<T: Display>(&self, text: T) -> String {
    self.paint(text, Style::new().green())
  }

  /// Style for error messages (bright red)
  pub fn error<T: Display>(&self, text: T) -> String {
    self.paint(text, Style::new().bright_red().bold())
  }

  /// Style for warning messages (yellow)
  pub fn warning<T: Display>(&self, text: T) -> String {
    self.paint(text, Style::new().yellow())
  }

  /// Style for info messages (cyan)
  pub fn info<T: Display>(&self, text: T) -> String {
    self.paint(text, Style::new().cyan())
  }

  /// Style for labels (bright white, bold)
  pub fn emphasis<T: Display>(&self, text: T) -> String {
    self.paint(text, Style::new().bright_white().bold())
  }

  /// Style for URLs (blue, underlined)
  pub fn link<T: Display>(&self, text: T) -> String {
    self.paint(text, Style::new().blue().underline())
  }

  /// Style for file paths (magenta)
  pub fn path<T: Display>(&self, text: T) -> String {
    self.paint(text, Style::new().magenta())
  }

  /// Style for identifiers and counts (bright blue)
  pub fn number<T: Display>(&self, text: T) -> String {
    self.paint(text, Style::new().bright_blue())
  }

  /// Style for secondary text (gray)
  pub fn dimmed<T: Display>(&self, text: T) -> String {
    self.paint(text, Style::new().dimmed())
  }

  /// Style for progress indicators (bright cyan)
  pub fn progress<T: Display>(&self, text: T) -> String {
    self.paint(text, Style::new().bright_cyan())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_color_scheme_disabled() {
    let scheme = ColorScheme::new(ColorOption::Never);
    assert!(!scheme.is_enabled());
    assert_eq!(scheme.success("test"), "test");
    assert_eq!(scheme.path("en.json"), "en.json");
  }

  #[test]
  fn test_color_scheme_enabled() {
    let scheme = ColorScheme::new(ColorOption::Always);
    assert!(scheme.is_enabled());
    assert_ne!(scheme.success("test"), "test");
    assert_ne!(scheme.error("test"), "test");
    assert!(scheme.number(42).contains("42"));
  }
}
