//! A uniform get/set/write interface over both credential backends.

use std::fmt;
use std::path::PathBuf;

use crate::config::{ConfigEnv, resolve_hosts_path};
use crate::error::Result;
use crate::helper::Credentials;
use crate::hosts::HostsFile;

/// Which backend answered a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
  /// Nothing was loaded (e.g. the hosts file does not exist)
  None,
  HostsFile,
  CredentialHelper,
}

impl fmt::Display for Backend {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Self::None => "none",
      Self::HostsFile => "gh CLI hosts file",
      Self::CredentialHelper => "git credential helper",
    };
    f.write_str(name)
  }
}

/// Common operations offered by every credential backend
pub trait CredentialStore {
  /// Look up `key` (`user` or `oauth_token`) for `hostname`.
  fn get(&self, hostname: &str, key: &str) -> Result<String>;

  /// Change `key` for `hostname` in memory.
  fn set(&mut self, hostname: &str, key: &str, value: &str) -> Result<()>;

  /// Persist in-memory changes.
  fn write(&mut self) -> Result<()>;

  fn backend(&self) -> Backend;
}

impl CredentialStore for HostsFile {
  fn get(&self, hostname: &str, key: &str) -> Result<String> {
    HostsFile::get(self, hostname, key)
  }

  fn set(&mut self, hostname: &str, key: &str, value: &str) -> Result<()> {
    HostsFile::set(self, hostname, key, value)
  }

  fn write(&mut self) -> Result<()> {
    HostsFile::write(self)
  }

  fn backend(&self) -> Backend {
    HostsFile::backend(self)
  }
}

impl CredentialStore for Credentials {
  fn get(&self, hostname: &str, key: &str) -> Result<String> {
    Credentials::get(self, hostname, key)
  }

  fn set(&mut self, hostname: &str, key: &str, value: &str) -> Result<()> {
    Credentials::set(self, hostname, key, value)
  }

  fn write(&mut self) -> Result<()> {
    Credentials::write(self)
  }

  fn backend(&self) -> Backend {
    Credentials::backend(self)
  }
}

/// How to pick a backend
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
  /// Use this credential helper instead of the hosts file
  pub helper: Option<String>,
  /// Explicit hosts file, bypassing path resolution
  pub hosts_path: Option<PathBuf>,
}

/// Open the credential store for `hostname`.
///
/// A configured helper wins; otherwise the hosts file at the explicit path or
/// the path resolved from `env` is loaded.
pub fn open_store(hostname: &str, options: &StoreOptions, env: &ConfigEnv) -> Result<Box<dyn CredentialStore>> {
  if let Some(helper) = options.helper.as_deref().filter(|h| !h.is_empty()) {
    tracing::debug!("Using credential helper {helper} for {hostname}");
    return Ok(Box::new(Credentials::new(hostname, helper)?));
  }

  let path = match &options.hosts_path {
    Some(path) => path.clone(),
    None => resolve_hosts_path(env)?,
  };
  Ok(Box::new(HostsFile::load(path)?))
}
