//! Build script for the confluence-i18n project
//!
//! Embeds version metadata used in `--version` and the HTTP user agent.

use std::env;
use std::process::Command;

/// Entry point for the build script.
fn main() {
  embed_build_info();
  set_rerun_conditions();
}

/// Embeds the Git commit hash and the target triple as compile-time
/// environment variables. `GIT_HASH` falls back to `unknown` outside a Git
/// checkout.
fn embed_build_info() {
  let git_hash = Command::new("git")
    .args(["rev-parse", "--short", "HEAD"])
    .output()
    .ok()
    .filter(|output| output.status.success())
    .and_then(|output| String::from_utf8(output.stdout).ok())
    .map(|hash| hash.trim().to_string())
    .filter(|hash| !hash.is_empty())
    .unwrap_or_else(|| "unknown".to_string());
  println!("cargo:rustc-env=GIT_HASH={git_hash}");

  println!("cargo:rustc-env=TARGET={}", env::var("TARGET").unwrap_or_default());
}

/// Re-run when this script, the Git HEAD, or the target changes.
fn set_rerun_conditions() {
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=.git/HEAD");
  println!("cargo:rerun-if-env-changed=TARGET");
}
