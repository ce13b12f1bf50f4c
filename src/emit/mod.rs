//! Serialization of the translation dictionary into per-language files.
//!
//! Each language becomes `<output_dir>/<language>.<ext>`:
//! - `json`: a JSON object of `TechnicalId` → value.
//! - `js` / `ts`: an ES module whose default export is the same object, with
//!   values written as template literals.
//!
//! Files are laid out with [`layout::render_object`] and written in dictionary
//! order, overwriting existing files. The output directory is never created;
//! a missing directory surfaces as [`Error::Filesystem`].

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info};

pub mod layout;

use layout::{ObjectStyle, render_object};

use crate::dictionary::{LanguageEntry, Translation, TranslationDictionary};
use crate::error::{Error, Result};
use crate::format::OutputFormat;

/// Options controlling how translation files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
  /// File format (and extension) of the generated files.
  pub format: OutputFormat,
  /// Directory receiving one file per language.
  pub output_dir: PathBuf,
  /// Drop translations whose value is empty.
  pub no_empty_values: bool,
}

/// Path of the file generated for a language.
pub fn output_path(output_dir: &Path, language: &str, format: OutputFormat) -> PathBuf {
  output_dir.join(format!("{language}.{}", format.file_extension()))
}

/// Render the file contents for one language.
pub fn render_language(entry: &LanguageEntry, format: OutputFormat, no_empty_values: bool) -> String {
  let translations = entry
    .translations
    .iter()
    .filter(|translation| !no_empty_values || !translation.value.is_empty());

  if format.is_module() {
    render_module(translations)
  } else {
    render_json(translations)
  }
}

/// Write every language of the dictionary to disk.
///
/// # Returns
/// The written paths, in dictionary order.
///
/// # Errors
/// Returns [`Error::Filesystem`] on the first failed write. Files written
/// before the failure are left in place.
pub fn write_translation_files(dictionary: &TranslationDictionary, options: &EmitOptions) -> Result<Vec<PathBuf>> {
  let mut written = Vec::with_capacity(dictionary.len());

  for entry in dictionary {
    let path = output_path(&options.output_dir, &entry.language, options.format);
    let contents = render_language(entry, options.format, options.no_empty_values);

    debug!(
      "Rendering {} translations for '{}' ({} bytes)",
      entry.translations.len(),
      entry.language,
      contents.len()
    );

    fs::write(&path, contents).map_err(|source| Error::Filesystem {
      path: path.clone(),
      source,
    })?;

    info!("Wrote {}", path.display());
    written.push(path);
  }

  Ok(written)
}

/// JSON object of key → value. A repeated key keeps its first position and
/// takes the last value.
fn render_json<'a>(translations: impl Iterator<Item = &'a Translation>) -> String {
  let mut object = Map::new();
  for translation in translations {
    object.insert(translation.key.clone(), Value::String(translation.value.clone()));
  }

  let entries: Vec<(String, String)> = object
    .iter()
    .map(|(key, value)| (Value::String(key.clone()).to_string(), value.to_string()))
    .collect();

  render_object(
    &entries,
    ObjectStyle {
      prefix: "",
      suffix: "",
      trailing_comma: false,
    },
  )
}

/// `export default { key: `value`, ... };`
fn render_module<'a>(translations: impl Iterator<Item = &'a Translation>) -> String {
  let entries: Vec<(String, String)> = translations
    .map(|translation| (property_key(&translation.key), template_literal(&translation.value)))
    .collect();

  render_object(
    &entries,
    ObjectStyle {
      prefix: "export default ",
      suffix: ";",
      trailing_comma: true,
    },
  )
}

/// Object key as written in a module: bare when it is an identifier, quoted
/// otherwise.
fn property_key(key: &str) -> String {
  if is_identifier(key) {
    key.to_string()
  } else {
    Value::String(key.to_string()).to_string()
  }
}

fn is_identifier(key: &str) -> bool {
  let mut chars = key.chars();
  match chars.next() {
    Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
      chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
    }
    _ => false,
  }
}

/// Template literal for a value. Every JavaScript whitespace character becomes
/// a plain space; backslashes, backticks and `${` are escaped.
fn template_literal(value: &str) -> String {
  let mut out = String::with_capacity(value.len() + 2);
  out.push('`');

  let mut chars = value.chars().peekable();
  while let Some(c) = chars.next() {
    match c {
      '\\' => out.push_str("\\\\"),
      '`' => out.push_str("\\`"),
      '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
      c if is_js_whitespace(c) => out.push(' '),
      c => out.push(c),
    }
  }

  out.push('`');
  out
}

/// The characters matched by `\s` in a JavaScript regular expression.
/// Unlike [`char::is_whitespace`], this includes U+FEFF and excludes U+0085.
fn is_js_whitespace(c: char) -> bool {
  matches!(
    c,
    '\t'
      | '\n'
      | '\u{000B}'
      | '\u{000C}'
      | '\r'
      | ' '
      | '\u{00A0}'
      | '\u{1680}'
      | '\u{2000}'..='\u{200A}'
      | '\u{2028}'
      | '\u{2029}'
      | '\u{202F}'
      | '\u{205F}'
      | '\u{3000}'
      | '\u{FEFF}'
  )
}
