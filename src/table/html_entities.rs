//! HTML entity handling for storage-format markup.
//!
//! `roxmltree` only recognizes XML's 5 predefined entities (`&lt;`, `&gt;`,
//! `&amp;`, `&quot;`, `&apos;`) plus numeric references. Confluence storage
//! bodies can still carry any HTML5 named entity, and translation tables are
//! full of them (`&eacute;`, `&nbsp;`, `&frac12;` ...), so they are replaced
//! before parsing.

use quick_xml::escape::{escape, resolve_html5_entity};

/// Longest HTML5 entity name (`CounterClockwiseContourIntegral`), used to
/// bound the scan for the closing `;`.
const MAX_ENTITY_LEN: usize = 31;

/// Replace HTML named entities with literal characters before XML parsing.
///
/// Replacements are XML-escaped, so entities that stand for markup characters
/// (`&LT;`, `&AMP;` ...) stay text, and XML's predefined entities come out
/// unchanged. Numeric references are left for `roxmltree` to decode. Unknown
/// names are kept as-is, so the parser will reject them.
///
/// # Arguments
/// * `text` - Raw storage-format markup that may contain HTML entities.
///
/// # Returns
/// A `String` with HTML named entities replaced by their characters.
pub fn preprocess_html_entities(text: &str) -> String {
  let mut result = String::with_capacity(text.len());
  let mut rest = text;

  while let Some(amp) = rest.find('&') {
    result.push_str(&rest[..amp]);
    let after = &rest[amp + 1..];

    let replacement = after
      .find(';')
      .filter(|&semi| semi > 0 && semi <= MAX_ENTITY_LEN)
      .and_then(|semi| resolve_html5_entity(&after[..semi]).map(|value| (value, semi)));

    match replacement {
      Some((value, semi)) => {
        result.push_str(&escape(value));
        rest = &after[semi + 1..];
      }
      None => {
        result.push('&');
        rest = after;
      }
    }
  }

  result.push_str(rest);
  result
}
