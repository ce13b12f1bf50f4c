//! Helpers for turning a user-supplied domain into Confluence REST URLs.

use url::Url;

/// Host suffix of Atlassian-hosted (cloud) Confluence instances.
pub const ATLASSIAN_CLOUD_DOMAIN: &str = "atlassian.net";

/// Normalize a domain by adding `https://` when no scheme is present and
/// dropping any trailing slash.
///
/// # Arguments
/// * `domain` - Domain or base URL as typed by the user.
///
/// # Returns
/// The normalized base URL.
///
/// # Errors
/// Returns a message describing why the value is not a valid URL.
pub fn normalize_domain(domain: &str) -> Result<String, String> {
  let trimmed = domain.trim();

  let candidate = if trimmed.contains("://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  let parsed = Url::parse(&candidate).map_err(|e| format!("Invalid URL: {e}"))?;

  let mut url_str = parsed.to_string();
  while url_str.ends_with('/') {
    url_str.pop();
  }

  Ok(url_str)
}

/// Whether the base URL points at an Atlassian cloud instance, which serves
/// the REST API under `/wiki`.
pub fn is_cloud_instance(base_url: &str) -> bool {
  base_url.trim_end_matches('/').ends_with(ATLASSIAN_CLOUD_DOMAIN)
}

/// Build the REST URL that returns a page together with its storage body.
///
/// # Arguments
/// * `base_url` - Scheme and host of the Confluence instance.
/// * `page_id` - Identifier of the page holding the translation table.
///
/// # Returns
/// `{base}[/wiki]/rest/api/content/{page_id}?expand=body.storage`.
pub fn page_content_url(base_url: &str, page_id: &str) -> String {
  let base_url = base_url.trim_end_matches('/');
  let wiki = if is_cloud_instance(base_url) { "/wiki" } else { "" };
  format!("{base_url}{wiki}/rest/api/content/{page_id}?expand=body.storage")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cloud_domain_gets_wiki_prefix() {
    assert_eq!(
      page_content_url("https://example.atlassian.net", "123456"),
      "https://example.atlassian.net/wiki/rest/api/content/123456?expand=body.storage"
    );
  }

  #[test]
  fn self_hosted_domain_uses_root_path() {
    let url = page_content_url("https://example.internal.com", "42");
    assert_eq!(url, "https://example.internal.com/rest/api/content/42?expand=body.storage");
    assert!(!url.contains("/wiki"));
  }

  #[test]
  fn trailing_slash_does_not_double_up() {
    assert_eq!(
      page_content_url("https://example.atlassian.net/", "1"),
      "https://example.atlassian.net/wiki/rest/api/content/1?expand=body.storage"
    );
  }

  #[test]
  fn normalize_adds_https_when_missing() {
    assert_eq!(
      normalize_domain("example.atlassian.net").unwrap(),
      "https://example.atlassian.net"
    );
  }

  #[test]
  fn normalize_keeps_http_and_port() {
    assert_eq!(
      normalize_domain("http://localhost:8090/").unwrap(),
      "http://localhost:8090"
    );
  }

  #[test]
  fn normalize_keeps_context_path() {
    assert_eq!(
      normalize_domain("https://intranet.example.com/confluence/").unwrap(),
      "https://intranet.example.com/confluence"
    );
  }

  #[test]
  fn normalize_rejects_garbage() {
    assert!(normalize_domain("https://").is_err());
  }
}
