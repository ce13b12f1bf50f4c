//! The fetch → parse → build → write pipeline behind the CLI.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use tracing::{debug, info};

use crate::cli::{Cli, Config};
use crate::color::ColorScheme;
use crate::confluence::{self, ConfluenceApi, ConfluenceClient};
use crate::dictionary::{TranslationDictionary, build_dictionary};
use crate::emit::{self, EmitOptions};
use crate::error::Result;
use crate::table;

/// Fetch a page and turn its translation table into a dictionary.
///
/// # Errors
/// Propagates network, response, and table parsing errors unchanged.
pub async fn load_dictionary(api: &dyn ConfluenceApi, page_id: &str) -> Result<TranslationDictionary> {
  let storage = confluence::fetch_storage_body(api, page_id).await?;
  debug!("Fetched storage body ({} chars)", storage.len());

  let rows = table::extract_rows(&storage)?;
  let dictionary = build_dictionary(&rows)?;

  info!(
    "Found {} languages across {} rows",
    dictionary.len(),
    rows.len()
  );
  Ok(dictionary)
}

/// Run the whole conversion for one page.
///
/// # Returns
/// The paths of the written translation files.
pub async fn sync_translations(api: &dyn ConfluenceApi, page_id: &str, options: &EmitOptions) -> Result<Vec<PathBuf>> {
  let dictionary = load_dictionary(api, page_id).await?;
  emit::write_translation_files(&dictionary, options)
}

/// Handle the CLI invocation: validate options, run the pipeline, report.
pub(crate) async fn handle_sync(cli: &Cli, colors: &ColorScheme) {
  let connect = |config: &Config| -> Result<Arc<dyn ConfluenceApi>> {
    Ok(Arc::new(ConfluenceClient::new(
      &config.domain,
      &config.username,
      &config.password,
    )?))
  };

  match run_sync(cli, colors, connect).await {
    Ok(written) if !cli.behavior.dry_run && !cli.behavior.quiet => {
      for path in &written {
        println!("  {} {}", colors.success("✓"), colors.path(path.display()));
      }
      println!(
        "\n{} {}",
        colors.success("✓"),
        colors.success("Successfully written i18n files")
      );
    }
    Ok(_) => {}
    Err(e) => fail(colors, &e),
  }
}

/// Validate the CLI options, connect through `connect`, and run the
/// conversion (or the dry run).
///
/// `connect` is only called once the options are valid, so a configuration
/// error never reaches Confluence.
///
/// # Returns
/// The written paths, or the planned ones for a dry run.
pub async fn run_sync<F>(cli: &Cli, colors: &ColorScheme, connect: F) -> anyhow::Result<Vec<PathBuf>>
where
  F: FnOnce(&Config) -> Result<Arc<dyn ConfluenceApi>>,
{
  let quiet = cli.behavior.quiet;
  let config = cli.validate()?;

  if !quiet {
    println!("{} {}", colors.progress("→"), colors.info("Fetching translations"));
    println!("  {}: {}", colors.emphasis("Domain"), colors.link(&config.domain));
    println!("  {}: {}", colors.emphasis("Page ID"), colors.number(&config.page_id));
    println!("  {}: {}", colors.emphasis("Format"), config.emit.format);
    println!(
      "  {}: {}",
      colors.emphasis("Output"),
      colors.path(config.emit.output_dir.display())
    );
  }

  let api = connect(&config)?;

  if cli.behavior.dry_run {
    dry_run(api.as_ref(), &config, colors, quiet).await
  } else {
    Ok(sync_translations(api.as_ref(), &config.page_id, &config.emit).await?)
  }
}

async fn dry_run(
  api: &dyn ConfluenceApi,
  config: &Config,
  colors: &ColorScheme,
  quiet: bool,
) -> anyhow::Result<Vec<PathBuf>> {
  let dictionary = load_dictionary(api, &config.page_id).await?;

  if !quiet {
    println!(
      "\n{} {}",
      colors.warning("⚠"),
      colors.warning("DRY RUN: No files will be written")
    );
  }

  let mut planned = Vec::with_capacity(dictionary.len());
  for entry in &dictionary {
    let path = emit::output_path(&config.emit.output_dir, &entry.language, config.emit.format);
    if !quiet {
      println!(
        "  {} {} {}",
        colors.dimmed("→"),
        colors.path(path.display()),
        colors.dimmed(format!("({} translations)", entry.translations.len()))
      );
    }
    planned.push(path);
  }

  Ok(planned)
}

fn fail(colors: &ColorScheme, error: &anyhow::Error) -> ! {
  eprintln!(
    "{} {}",
    colors.error("✗"),
    colors.error("Error while parsing i18n from Confluence")
  );
  eprintln!("  {}: {:#}", colors.emphasis("Error"), error);
  process::exit(1);
}
