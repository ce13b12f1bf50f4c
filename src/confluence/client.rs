//! HTTP client implementation for talking to the Confluence REST API.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::{debug, trace};

use super::api::ConfluenceApi;
use super::models::Page;
use super::url::page_content_url;
use crate::error::{Error, Result};

/// Confluence API client authenticating with static basic-auth credentials.
#[derive(Clone)]
pub struct ConfluenceClient {
  base_url: String,
  username: String,
  password: String,
  client: reqwest::Client,
}

impl ConfluenceClient {
  /// Create a new Confluence client.
  ///
  /// # Arguments
  /// * `base_url` - The base URL of the Confluence instance (e.g., https://example.atlassian.net)
  /// * `username` - Account name or email address
  /// * `password` - Password or API token
  ///
  /// # Errors
  /// Returns [`Error::Network`] if the underlying `reqwest::Client` cannot be
  /// built.
  pub fn new(base_url: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
    let base_url = base_url.into().trim_end_matches('/').to_string();

    let client = reqwest::Client::builder()
      .user_agent(format!(
        "confluence-i18n/{} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("TARGET")
      ))
      .build()
      .map_err(|e| Error::network("Failed to create HTTP client", e))?;

    Ok(Self {
      base_url,
      username: username.into(),
      password: password.into(),
      client,
    })
  }

  /// Get the authorization header value (Basic auth).
  fn auth_header(&self) -> String {
    let credentials = format!("{}:{}", self.username, self.password);
    format!("Basic {}", BASE64.encode(credentials.as_bytes()))
  }

  /// REST endpoint for a page, honouring the `/wiki` prefix of cloud instances.
  pub fn page_url(&self, page_id: &str) -> String {
    page_content_url(&self.base_url, page_id)
  }
}

#[async_trait]
impl ConfluenceApi for ConfluenceClient {
  async fn get_page(&self, page_id: &str) -> Result<Page> {
    let url = self.page_url(page_id);
    debug!("GET {url}");

    let response = self
      .client
      .get(&url)
      .header("Authorization", self.auth_header())
      .header("Accept", "application/json")
      .send()
      .await
      .map_err(|e| Error::network("Failed to send request to Confluence API", e))?;

    let status = response.status();
    if !status.is_success() {
      let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| String::from("(no error details)"));
      return Err(Error::Network {
        message: format!("Confluence API returned error {status}: {error_text}"),
        source: None,
      });
    }

    let body = response
      .text()
      .await
      .map_err(|e| Error::network("Failed to read response from Confluence API", e))?;

    trace!("Response body ({} bytes)", body.len());

    serde_json::from_str(&body).map_err(|e| Error::MalformedResponse {
      message: "Failed to parse page response from Confluence API".to_string(),
      source: Some(e),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_confluence_client_new_removes_trailing_slash() {
    let client = ConfluenceClient::new("https://example.atlassian.net/", "user@example.com", "secret").unwrap();
    assert_eq!(client.base_url, "https://example.atlassian.net");
    assert_eq!(client.username, "user@example.com");
    assert_eq!(client.password, "secret");
  }

  #[test]
  fn test_auth_header_format() {
    let client = ConfluenceClient::new("https://example.atlassian.net", "user@example.com", "secret").unwrap();

    let auth_header = client.auth_header();
    let encoded = auth_header.strip_prefix("Basic ").unwrap();
    let decoded = BASE64.decode(encoded.as_bytes()).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), "user@example.com:secret");
  }

  #[test]
  fn page_url_for_cloud_instance() {
    let client = ConfluenceClient::new("https://example.atlassian.net", "u", "p").unwrap();
    assert!(client.page_url("98765").contains("/wiki/rest/api/content/98765"));
  }

  #[test]
  fn page_url_for_server_instance() {
    let client = ConfluenceClient::new("https://example.internal.com", "u", "p").unwrap();
    let url = client.page_url("98765");
    assert!(url.contains("/rest/api/content/98765?expand=body.storage"));
    assert!(!url.contains("/wiki/"));
  }

  #[tokio::test]
  async fn unreachable_host_is_a_network_error() {
    // Port 9 (discard) on localhost is closed in test environments.
    let client = ConfluenceClient::new("http://127.0.0.1:9", "u", "p").unwrap();
    let err = client.get_page("1").await.unwrap_err();
    assert!(matches!(err, Error::Network { .. }), "unexpected error: {err:?}");
  }
}
