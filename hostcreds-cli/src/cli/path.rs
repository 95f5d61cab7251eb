//! # Path Command

use anyhow::{Context, Result};
use hostcreds_core::{ConfigEnv, resolve_hosts_path};

/// Handle the path command
pub(crate) fn handle_path_command() -> Result<()> {
  let path = resolve_hosts_path(&ConfigEnv::from_process()).context("Failed to resolve the hosts file path")?;

  println!("{}", path.display());
  Ok(())
}
