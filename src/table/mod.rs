//! Extraction of the translation table from a Confluence storage body.
//!
//! The first `<table>` of the page is turned into an ordered list of
//! [`TranslationRow`]s. Column names come from the header cells and are only
//! known at runtime, so a row is a small ordered map rather than a struct.
//!
//! # Example
//!
//! ```
//! use confluence_i18n::table::extract_rows;
//!
//! let html = "<table><tbody>\
//!   <tr><th>TechnicalId</th><th>en</th></tr>\
//!   <tr><td>GREETING</td><td>Hello</td></tr>\
//! </tbody></table>";
//! let rows = extract_rows(html).unwrap();
//! assert_eq!(rows[0].get("en"), Some("Hello"));
//! ```

use std::time::Instant;

use roxmltree::{Document, Node};
use tracing::{debug, trace};

mod html_entities;
mod utils;

use utils::{get_element_text, matches_tag};

use crate::error::{Error, Result};

/// One row of the translation table: column name → cell text, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationRow {
  cells: Vec<(String, String)>,
}

impl TranslationRow {
  /// Create an empty row.
  pub fn new() -> Self {
    Self::default()
  }

  /// Set a column's value. Re-inserting a column replaces the value but keeps
  /// the column at its original position.
  pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
    let column = column.into();
    let value = value.into();

    match self.cells.iter_mut().find(|(name, _)| *name == column) {
      Some(cell) => cell.1 = value,
      None => self.cells.push((column, value)),
    }
  }

  /// Value of a column, if the row has it.
  pub fn get(&self, column: &str) -> Option<&str> {
    self
      .cells
      .iter()
      .find(|(name, _)| name == column)
      .map(|(_, value)| value.as_str())
  }

  /// Column names in header order.
  pub fn columns(&self) -> impl Iterator<Item = &str> {
    self.cells.iter().map(|(name, _)| name.as_str())
  }

  /// `(column, value)` pairs in header order.
  pub fn cells(&self) -> impl Iterator<Item = (&str, &str)> {
    self.cells.iter().map(|(name, value)| (name.as_str(), value.as_str()))
  }

  pub fn len(&self) -> usize {
    self.cells.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationRow {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut row = TranslationRow::new();
    for (column, value) in iter {
      row.insert(column, value);
    }
    row
  }
}

/// Parse the first HTML table of a storage body into translation rows.
///
/// Header names are taken from the `<th>` cells. A table without any `<th>`
/// uses its first row's `<td>` cells as headers instead. The first row is not
/// returned as data unless it holds a `<th>`. Rows without `<td>` cells are
/// skipped, and a cell beyond the last header is keyed by its 1-based column
/// index.
///
/// # Errors
/// Returns [`Error::Parse`] when the storage body is not well-formed or does
/// not contain a table.
pub fn extract_rows(storage_content: &str) -> Result<Vec<TranslationRow>> {
  let preprocessed = html_entities::preprocess_html_entities(storage_content);
  let wrapped = utils::wrap_with_namespaces(&preprocessed);

  trace!(
    "Wrapped XML (first 500 chars):\n{}",
    wrapped.chars().take(500).collect::<String>()
  );

  let parse_start = Instant::now();
  let document =
    Document::parse(&wrapped).map_err(|e| Error::Parse(format!("Failed to parse Confluence storage content: {e}")))?;

  debug!(
    "Parsed Confluence storage document in {duration:?} (length: {length} chars)",
    duration = parse_start.elapsed(),
    length = wrapped.len()
  );

  let table = document
    .descendants()
    .find(|node| matches_tag(*node, "table"))
    .ok_or_else(|| Error::Parse("No table found in the Confluence page".to_string()))?;

  let rows = table_to_rows(table);
  debug!("Extracted {} rows from the translation table", rows.len());
  Ok(rows)
}

/// Convert a `<table>` element into rows keyed by header text.
fn table_to_rows(table: Node) -> Vec<TranslationRow> {
  let tr_elements: Vec<Node> = table.descendants().filter(|n| matches_tag(*n, "tr")).collect();

  let mut headers: Vec<String> = Vec::new();
  for tr in &tr_elements {
    for (index, th) in tr.descendants().filter(|n| matches_tag(*n, "th")).enumerate() {
      let text = cell_text(th);
      if index < headers.len() {
        headers[index] = text;
      } else {
        headers.resize(index, String::new());
        headers.push(text);
      }
    }
  }

  if headers.is_empty()
    && let Some(first) = tr_elements.first()
  {
    headers = data_cells(*first).map(cell_text).collect();
  }

  trace!("Table headers: {headers:?}");

  let first_row_has_th = tr_elements
    .first()
    .is_some_and(|tr| tr.descendants().any(|n| matches_tag(n, "th")));
  let skip = usize::from(!first_row_has_th);
  tr_elements
    .iter()
    .skip(skip)
    .map(|tr| {
      data_cells(*tr)
        .enumerate()
        .map(|(index, td)| (column_name(&headers, index), cell_text(td)))
        .collect::<TranslationRow>()
    })
    .filter(|row| !row.is_empty())
    .collect()
}

fn data_cells<'a, 'input>(tr: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
  tr.descendants().filter(|n| matches_tag(*n, "td"))
}

fn cell_text(cell: Node) -> String {
  get_element_text(cell).trim().to_string()
}

/// Header for a column, falling back to the 1-based index when missing or blank.
fn column_name(headers: &[String], index: usize) -> String {
  match headers.get(index) {
    Some(header) if !header.is_empty() => header.clone(),
    _ => (index + 1).to_string(),
  }
}
