//! Data transfer objects returned by the Confluence REST API.

use serde::{Deserialize, Serialize};

/// Confluence page as returned by `rest/api/content/{id}?expand=body.storage`.
///
/// Only `body` is needed to build translation files; the other fields are
/// optional so that older Confluence servers still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
  /// Unique numeric identifier assigned by Confluence.
  #[serde(default)]
  pub id: Option<String>,
  /// Human-readable title displayed in the UI.
  #[serde(default)]
  pub title: Option<String>,
  /// Rich body content in different renderings.
  pub body: Option<PageBody>,
}

/// Page body content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageBody {
  /// Confluence storage-format XHTML representation.
  pub storage: Option<StorageFormat>,
}

/// Storage format (Confluence's internal format).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageFormat {
  /// Raw XHTML markup returned by the API.
  pub value: String,
  /// Representation name (typically `"storage"`).
  #[serde(default)]
  pub representation: Option<String>,
}

impl Page {
  /// Storage-format markup of the page, if the response carried one.
  pub fn storage_value(&self) -> Option<&str> {
    self
      .body
      .as_ref()
      .and_then(|b| b.storage.as_ref())
      .map(|s| s.value.as_str())
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn deserializes_minimal_storage_response() {
    let page: Page = serde_json::from_value(json!({
      "body": { "storage": { "value": "<table></table>" } }
    }))
    .unwrap();

    assert_eq!(page.storage_value(), Some("<table></table>"));
    assert!(page.title.is_none());
  }

  #[test]
  fn missing_storage_yields_none() {
    let page: Page = serde_json::from_value(json!({
      "id": "1",
      "title": "Translations",
      "body": {}
    }))
    .unwrap();

    assert_eq!(page.storage_value(), None);
  }
}
