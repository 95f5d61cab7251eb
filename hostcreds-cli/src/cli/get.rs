//! # Get Command
//!
//! Prints a single credential value so it can be captured by scripts.

use anyhow::{Context, Result};
use clap::Args;

use super::BackendArgs;

/// Arguments for `hostcreds get`
#[derive(Args)]
pub struct GetArgs {
  /// Hostname to look up (e.g. github.com)
  pub host: String,

  /// Key to print: user or oauth_token
  pub key: String,

  #[command(flatten)]
  pub backend: BackendArgs,
}

/// Handle the get command
///
/// The value goes to stdout on its own line; failures are returned so the
/// process exits non-zero.
pub(crate) fn handle_get_command(args: GetArgs) -> Result<()> {
  let store = args.backend.open(&args.host)?;

  let value = store
    .get(&args.host, &args.key)
    .with_context(|| format!("Failed to read {} for {}", args.key, args.host))?;

  tracing::info!("Found {} for {} in {}", args.key, args.host, store.backend());
  println!("{value}");
  Ok(())
}
