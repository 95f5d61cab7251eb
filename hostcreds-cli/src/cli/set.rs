//! # Set Command
//!
//! Updates one credential value and writes the backend back.

use anyhow::{Context, Result};
use clap::Args;
use hostcreds_core::CredentialKey;

use super::BackendArgs;
use crate::output::{format_host, print_success};

/// Arguments for `hostcreds set`
#[derive(Args)]
pub struct SetArgs {
  /// Hostname to update (e.g. github.com)
  pub host: String,

  /// Key to set: user or oauth_token
  pub key: String,

  /// New value
  pub value: String,

  #[command(flatten)]
  pub backend: BackendArgs,
}

/// Handle the set command
pub(crate) fn handle_set_command(args: SetArgs) -> Result<()> {
  // The library ignores unknown keys on set; reject them here instead
  let key: CredentialKey = args.key.parse()?;
  let mut store = args.backend.open(&args.host)?;

  store.set(&args.host, key.as_str(), &args.value)?;
  store
    .write()
    .with_context(|| format!("Failed to save credentials for {}", args.host))?;

  print_success(&format!(
    "Saved {} for {} ({})",
    key,
    format_host(&args.host),
    store.backend()
  ));
  Ok(())
}
