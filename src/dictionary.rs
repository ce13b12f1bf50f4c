//! Regrouping of table rows into per-language translation lists.

use crate::error::{Error, Result};
use crate::table::TranslationRow;

/// Column holding the translation key of a row.
pub const TECHNICAL_ID_COLUMN: &str = "TechnicalId";

/// Columns that never become a language.
pub const IGNORED_COLUMNS: [&str; 3] = [TECHNICAL_ID_COLUMN, "PageName", "Image"];

/// A `(TechnicalId, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
  pub key: String,
  pub value: String,
}

/// Translations of one language, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
  pub language: String,
  pub translations: Vec<Translation>,
}

/// Language code → ordered translations, in first-encounter order of the
/// languages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationDictionary {
  entries: Vec<LanguageEntry>,
}

impl TranslationDictionary {
  /// Append a pair to a language, creating the language on first use.
  pub fn push(&mut self, language: &str, key: &str, value: &str) {
    let translation = Translation {
      key: key.to_string(),
      value: value.to_string(),
    };

    match self.entries.iter_mut().find(|entry| entry.language == language) {
      Some(entry) => entry.translations.push(translation),
      None => self.entries.push(LanguageEntry {
        language: language.to_string(),
        translations: vec![translation],
      }),
    }
  }

  /// Translations for a language, if the table had that column.
  pub fn get(&self, language: &str) -> Option<&[Translation]> {
    self
      .entries
      .iter()
      .find(|entry| entry.language == language)
      .map(|entry| entry.translations.as_slice())
  }

  /// Language codes in first-encounter order.
  pub fn languages(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(|entry| entry.language.as_str())
  }

  pub fn iter(&self) -> impl Iterator<Item = &LanguageEntry> {
    self.entries.iter()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<'a> IntoIterator for &'a TranslationDictionary {
  type Item = &'a LanguageEntry;
  type IntoIter = std::slice::Iter<'a, LanguageEntry>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.iter()
  }
}

/// Build the per-language dictionary from the extracted rows.
///
/// Every column except [`IGNORED_COLUMNS`] is treated as a language. TechnicalId
/// values are not deduplicated.
///
/// # Errors
/// Returns [`Error::Parse`] if a row has no `TechnicalId` column, since its
/// translations would have no key.
pub fn build_dictionary(rows: &[TranslationRow]) -> Result<TranslationDictionary> {
  let mut dictionary = TranslationDictionary::default();

  for (index, row) in rows.iter().enumerate() {
    let key = row.get(TECHNICAL_ID_COLUMN).ok_or_else(|| {
      Error::Parse(format!(
        "Row {} of the translation table has no {TECHNICAL_ID_COLUMN} column",
        index + 1
      ))
    })?;

    for (column, value) in row.cells().filter(|(column, _)| !IGNORED_COLUMNS.contains(column)) {
      dictionary.push(column, key, value);
    }
  }

  Ok(dictionary)
}
