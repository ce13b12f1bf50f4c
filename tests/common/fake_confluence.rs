//! Fake Confluence API client for testing
//!
//! Returns predefined JSON responses without making any network requests and
//! counts the requests it receives.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use confluence_i18n::confluence::{ConfluenceApi, Page};
use confluence_i18n::{Error, Result};

use crate::common::fixtures;

/// A fake Confluence client that serves raw JSON page responses
pub struct FakeConfluenceClient {
  responses: HashMap<String, serde_json::Value>,
  requests: AtomicUsize,
}

impl FakeConfluenceClient {
  /// Create a new fake client with no pages
  pub fn new() -> Self {
    Self {
      responses: HashMap::new(),
      requests: AtomicUsize::new(0),
    }
  }

  /// Create a fake client with the sample translation pages
  pub fn with_sample_pages() -> Self {
    let mut client = Self::new();

    client.add_response("100001", fixtures::greeting_table_response());
    client.add_response("100002", fixtures::checkout_table_response());
    client.add_response("100003", fixtures::page_without_table_response());
    client.add_response("100004", fixtures::page_without_storage_response());

    client
  }

  /// Register the raw JSON returned for a page ID
  pub fn add_response(&mut self, page_id: &str, json: serde_json::Value) {
    self.responses.insert(page_id.to_string(), json);
  }

  /// Number of `get_page` calls made so far
  pub fn requests(&self) -> usize {
    self.requests.load(Ordering::SeqCst)
  }
}

impl Default for FakeConfluenceClient {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl ConfluenceApi for FakeConfluenceClient {
  async fn get_page(&self, page_id: &str) -> Result<Page> {
    self.requests.fetch_add(1, Ordering::SeqCst);

    let json = self.responses.get(page_id).cloned().ok_or_else(|| Error::Network {
      message: format!("Confluence API returned error 404 Not Found: No content found with id: {page_id}"),
      source: None,
    })?;

    serde_json::from_value(json).map_err(|e| Error::MalformedResponse {
      message: "Failed to parse page response from Confluence API".to_string(),
      source: Some(e),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_fake_client_empty() {
    let client = FakeConfluenceClient::new();
    assert!(client.get_page("100001").await.is_err());
    assert_eq!(client.requests(), 1);
  }

  #[tokio::test]
  async fn test_fake_client_with_samples() {
    let client = FakeConfluenceClient::with_sample_pages();

    let page = client.get_page("100001").await.unwrap();
    assert_eq!(page.title.as_deref(), Some("Greetings"));
    assert!(page.storage_value().unwrap().contains("TechnicalId"));
  }
}
