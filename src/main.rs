//! confluence-i18n - Generate i18n files from a Confluence translation table
//!
//! This is the main entry point for the CLI application.

#[tokio::main]
async fn main() {
  confluence_i18n::cli::run().await;
}
