//! Utility functions for XML/HTML parsing.
//!
//! Provides helpers for working with roxmltree nodes: namespace handling,
//! tag matching, and text extraction.

use std::collections::BTreeSet;

use roxmltree::Node;

/// Synthetic namespace base URL for Confluence namespaces.
pub const SYNTHETIC_NS_BASE: &str = "https://confluence.example/";

/// Collects all text content from an element and its descendants.
///
/// Entity references have already been decoded by `roxmltree` at this point,
/// so the text is returned verbatim.
pub fn get_element_text(node: Node) -> String {
  let mut text = String::new();

  for child in node.children() {
    match child.node_type() {
      roxmltree::NodeType::Text => {
        if let Some(value) = child.text() {
          text.push_str(value);
        }
      }
      roxmltree::NodeType::Element => {
        text.push_str(&get_element_text(child));
      }
      _ => {}
    }
  }

  text
}

/// Splits a qualified tag name into its namespace prefix and local name.
pub fn split_qualified_name(name: &str) -> (Option<&str>, &str) {
  if let Some((prefix, local)) = name.split_once(':') {
    (Some(prefix), local)
  } else {
    (None, name)
  }
}

/// Wraps storage format markup with synthetic namespace declarations.
///
/// Confluence storage format references namespaces such as `ac:` or `ri:`
/// without declaring them, and a page body usually has several top-level
/// elements. The wrapper gives `roxmltree` a single root that declares every
/// prefix in use.
///
/// # Arguments
/// * `storage_content` - Raw storage format XML/HTML snippet from Confluence.
///
/// # Returns
/// The original content nested inside a synthetic root element.
pub fn wrap_with_namespaces(storage_content: &str) -> String {
  let mut prefixes = BTreeSet::new();

  for segment in storage_content.split('<').skip(1) {
    let mut segment = segment;
    if let Some(idx) = segment.find('>') {
      segment = &segment[..idx];
    }

    let segment = segment.trim_start_matches('/');

    if let Some((prefix, _)) = segment.split_once(':')
      && is_valid_prefix(prefix)
    {
      prefixes.insert(prefix.to_string());
    }

    for attr in segment.split_whitespace() {
      if let Some((name, _)) = attr.split_once('=')
        && let Some((prefix, _)) = name.split_once(':')
        && is_valid_prefix(prefix)
      {
        prefixes.insert(prefix.to_string());
      }
    }
  }

  let mut result = String::from("<i18n-root");
  for prefix in prefixes {
    result.push_str(" xmlns:");
    result.push_str(&prefix);
    result.push_str("=\"");
    result.push_str(SYNTHETIC_NS_BASE);
    result.push_str(&prefix);
    result.push('"');
  }
  result.push('>');
  result.push_str(storage_content);
  result.push_str("</i18n-root>");
  result
}

/// Check if a string is a valid XML namespace prefix.
fn is_valid_prefix(prefix: &str) -> bool {
  !prefix.is_empty()
    && prefix != "xml"
    && prefix
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Tests whether a node matches an expected tag name with optional namespace.
///
/// # Arguments
/// * `node` - The element to check.
/// * `name` - The expected tag name, optionally including a prefix such as
///   `ac:rich-text-body`.
pub fn matches_tag(node: Node, name: &str) -> bool {
  if !node.is_element() {
    return false;
  }

  let (expected_prefix, expected_name) = split_qualified_name(name);
  let tag = node.tag_name();
  if tag.name() != expected_name {
    return false;
  }

  let expected_namespace = expected_prefix.map(|prefix| format!("{SYNTHETIC_NS_BASE}{prefix}"));

  match (expected_namespace.as_deref(), tag.namespace()) {
    (Some(expected), Some(actual)) => actual == expected,
    (None, None) => true,
    (Some(_), None) | (None, Some(_)) => false,
  }
}

#[cfg(test)]
mod tests {
  use roxmltree::Document;

  use super::*;

  #[test]
  fn test_get_element_text_recursive() {
    let input = "<td><p>Nested <strong>text</strong> content</p></td>";
    let document = Document::parse(input).unwrap();
    let td = document.descendants().find(|node| matches_tag(*node, "td")).unwrap();
    assert_eq!(get_element_text(td), "Nested text content");
  }

  #[test]
  fn test_wrap_declares_confluence_prefixes() {
    let wrapped = wrap_with_namespaces(r#"<ac:image><ri:attachment ri:filename="a.png" /></ac:image>"#);
    assert!(wrapped.contains(r#"xmlns:ac="https://confluence.example/ac""#));
    assert!(wrapped.contains(r#"xmlns:ri="https://confluence.example/ri""#));
    assert!(Document::parse(&wrapped).is_ok());
  }

  #[test]
  fn test_matches_tag() {
    let wrapped = wrap_with_namespaces(r#"<ac:structured-macro ac:name="test"></ac:structured-macro><table/>"#);
    let document = Document::parse(&wrapped).unwrap();
    let mac = document
      .descendants()
      .find(|n| n.is_element() && n.tag_name().name() == "structured-macro")
      .unwrap();
    assert!(matches_tag(mac, "ac:structured-macro"));
    assert!(!matches_tag(mac, "structured-macro"));

    let table = document.descendants().find(|n| matches_tag(*n, "table"));
    assert!(table.is_some());
  }
}
