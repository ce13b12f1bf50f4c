//! Command-line interface definitions for confluence-i18n.
//!
//! Flags use short and long forms (`-d/--domain`, `-i/--pageid`, `--noEmpty`,
//! ...). Connection settings can also come from the environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::color::ColorScheme;
use crate::commands::sync::handle_sync;
use crate::confluence::normalize_domain;
use crate::emit::EmitOptions;
use crate::error::{Error, Result};
use crate::format::OutputFormat;

/// confluence-i18n - Generate i18n files from a Confluence translation table
#[derive(Debug, Parser)]
#[command(
  name = "confluence-i18n",
  version,
  long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), " ", env!("TARGET"), ")"),
  about = "Generate i18n files from a Confluence translation table",
  long_about = "Fetches a Confluence page, reads the translation table it contains and writes one\n\
                file per language column (JSON, JavaScript or TypeScript) keyed by TechnicalId.",
  styles = get_clap_styles()
)]
pub struct Cli {
  /// Confluence page options
  #[command(flatten)]
  pub source: SourceOptions,

  /// Output options
  #[command(flatten)]
  pub output: OutputOptions,

  /// Behavior options
  #[command(flatten)]
  pub behavior: BehaviorOptions,
}

/// Where the translation table lives and how to authenticate.
#[derive(Debug, Parser)]
pub struct SourceOptions {
  /// Confluence base URL (https:// is assumed when no scheme is given)
  #[arg(short = 'd', long = "domain", env = "CONFLUENCE_DOMAIN", value_name = "URL", value_parser = normalize_domain)]
  pub domain: Option<String>,

  /// ID of the page holding the translation table
  #[arg(short = 'i', long = "pageid", env = "CONFLUENCE_PAGE_ID", value_name = "ID")]
  pub page_id: Option<String>,

  /// Confluence user name or email
  #[arg(short = 'u', long = "username", env = "CONFLUENCE_USER", value_name = "USER")]
  pub username: Option<String>,

  /// Confluence password or API token
  #[arg(
    short = 'p',
    long = "password",
    env = "CONFLUENCE_PASSWORD",
    value_name = "PASSWORD",
    hide_env_values = true
  )]
  pub password: Option<String>,
}

/// Output options
#[derive(Debug, Parser)]
pub struct OutputOptions {
  /// Write TypeScript modules (.ts)
  #[arg(short = 't', long = "typescript")]
  pub typescript: bool,

  /// Write JSON files (.json)
  #[arg(short = 'j', long = "json")]
  pub json: bool,

  /// Output directory (must already exist)
  #[arg(short = 'o', long = "outputdir", default_value = ".", value_name = "DIR")]
  pub output_dir: String,

  /// Leave out translations with an empty value
  #[arg(long = "noEmpty", alias = "no-empty")]
  pub no_empty: bool,
}

/// Behavior options
#[derive(Debug, Parser)]
pub struct BehaviorOptions {
  /// Fetch and parse the page, but only list the files that would be written
  #[arg(long)]
  pub dry_run: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Colorize output
  #[arg(long, value_enum, default_value = "auto", value_name = "WHEN")]
  pub color: ColorOption,
}

/// Color output options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorOption {
  Auto,
  Always,
  Never,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub domain: String,
  pub page_id: String,
  pub username: String,
  pub password: String,
  pub emit: EmitOptions,
}

impl Cli {
  /// Parse CLI arguments from the environment
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Validate the parsed flags and turn them into a [`Config`].
  ///
  /// # Errors
  /// Returns [`Error::Configuration`] when `-t` and `-j` are both given, or
  /// when a connection setting is missing from both flags and environment.
  pub fn validate(&self) -> Result<Config> {
    if self.output.typescript && self.output.json {
      return Err(Error::Configuration(
        "The flags -t and -j are mutually exclusive. Provide either one or the other, or none.".to_string(),
      ));
    }

    Ok(Config {
      domain: required(&self.source.domain, "--domain", "CONFLUENCE_DOMAIN")?,
      page_id: required(&self.source.page_id, "--pageid", "CONFLUENCE_PAGE_ID")?,
      username: required(&self.source.username, "--username", "CONFLUENCE_USER")?,
      password: required(&self.source.password, "--password", "CONFLUENCE_PASSWORD")?,
      emit: EmitOptions {
        format: OutputFormat::from_flags(self.output.typescript, self.output.json),
        output_dir: PathBuf::from(&self.output.output_dir),
        no_empty_values: self.output.no_empty,
      },
    })
  }
}

fn required(value: &Option<String>, flag: &str, env: &str) -> Result<String> {
  value
    .clone()
    .filter(|v| !v.trim().is_empty())
    .ok_or_else(|| Error::Configuration(format!("{flag} is required (or set {env})")))
}

/// Parse CLI arguments, initialize logging, and run the conversion.
pub async fn run() {
  let cli = Cli::parse_args();

  init_tracing(&cli.behavior);

  let colors = ColorScheme::new(cli.behavior.color);

  handle_sync(&cli, &colors).await;
}

fn init_tracing(behavior: &BehaviorOptions) {
  let level = if behavior.quiet {
    LevelFilter::ERROR
  } else {
    match behavior.verbose {
      0 => LevelFilter::WARN,
      1 => LevelFilter::INFO,
      2 => LevelFilter::DEBUG,
      _ => LevelFilter::TRACE,
    }
  };

  let env_filter = EnvFilter::builder()
    .with_default_directive(level.into())
    .from_env_lossy();

  let _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}

/// Get custom styles for clap help output
fn get_clap_styles() -> clap::builder::Styles {
  use clap::builder::styling::{AnsiColor, Effects};

  clap::builder::Styles::styled()
    .header(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .literal(AnsiColor::BrightGreen.on_default())
    .placeholder(AnsiColor::BrightCyan.on_default())
    .error(AnsiColor::BrightRed.on_default() | Effects::BOLD)
    .valid(AnsiColor::BrightGreen.on_default())
    .invalid(AnsiColor::BrightRed.on_default())
}
