//! Trait definitions for interacting with Confluence.

use async_trait::async_trait;

use super::models::Page;
use crate::error::Result;

/// Trait for Confluence API operations (enables testing with fake
/// implementations).
#[async_trait]
pub trait ConfluenceApi: Send + Sync {
  /// Fetch a page by ID with its storage-format body expanded.
  ///
  /// # Arguments
  /// * `page_id` - Unique Confluence identifier for the page to retrieve.
  ///
  /// # Returns
  /// The `Page` record including `body.storage`.
  async fn get_page(&self, page_id: &str) -> Result<Page>;
}
