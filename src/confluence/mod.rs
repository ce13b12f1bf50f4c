//! Confluence module providing the API abstraction, the HTTP client, data
//! models, and URL helpers.

pub mod api;
pub mod client;
pub mod models;
pub mod url;

pub use api::ConfluenceApi;
pub use client::ConfluenceClient;
pub use models::{Page, PageBody, StorageFormat};
pub use url::{is_cloud_instance, normalize_domain, page_content_url};

use crate::error::{Error, Result};

/// Fetch a page and return its storage-format body.
///
/// # Errors
/// Propagates the client's error, or returns [`Error::MalformedResponse`] when
/// the page has no `body.storage.value`.
pub async fn fetch_storage_body(api: &dyn ConfluenceApi, page_id: &str) -> Result<String> {
  let page = api.get_page(page_id).await?;

  page
    .storage_value()
    .map(str::to_string)
    .ok_or_else(|| Error::malformed(format!("Page {page_id} has no storage body")))
}
