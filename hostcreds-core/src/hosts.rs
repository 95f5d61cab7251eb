//! # Hosts File Backend
//!
//! Reads and writes the YAML hosts file kept by the GitHub CLI:
//!
//! ```yaml
//! github.com:
//!   user: octocat
//!   oauth_token: gho_xxx
//! ```
//!
//! Fields other than `user` and `oauth_token` are carried through untouched so
//! that writing the file back does not drop settings owned by `gh`.

use std::collections::BTreeMap;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CredsError, Result};
use crate::key::CredentialKey;
use crate::store::Backend;

/// Credentials stored for a single hostname
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostEntry {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub user: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub oauth_token: Option<String>,
  /// Any other per-host settings (`git_protocol`, `users`, ...)
  #[serde(flatten)]
  pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl HostEntry {
  /// Create an entry with both fields populated.
  pub fn new(user: impl Into<String>, oauth_token: impl Into<String>) -> Self {
    Self {
      user: Some(user.into()),
      oauth_token: Some(oauth_token.into()),
      extra: BTreeMap::new(),
    }
  }

  pub fn value(&self, key: CredentialKey) -> Option<&str> {
    match key {
      CredentialKey::User => self.user.as_deref(),
      CredentialKey::OauthToken => self.oauth_token.as_deref(),
    }
  }

  fn set_value(&mut self, key: CredentialKey, value: &str) {
    let slot = match key {
      CredentialKey::User => &mut self.user,
      CredentialKey::OauthToken => &mut self.oauth_token,
    };
    *slot = Some(value.to_string());
  }

  /// Both the user and the token are present.
  pub const fn is_complete(&self) -> bool {
    self.user.is_some() && self.oauth_token.is_some()
  }
}

/// The hosts file and its decoded contents
#[derive(Debug, Clone)]
pub struct HostsFile {
  path: PathBuf,
  hosts: BTreeMap<String, HostEntry>,
  backend: Backend,
}

impl HostsFile {
  /// An empty hosts file that will be written to `path`.
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self {
      path: path.into(),
      hosts: BTreeMap::new(),
      backend: Backend::None,
    }
  }

  /// Load the hosts file at `path`.
  ///
  /// A missing file yields an empty mapping with [`Backend::None`]. Read and
  /// decode failures are returned to the caller.
  pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
    let path = path.into();

    if !path.exists() {
      tracing::debug!("No hosts file at {}", path.display());
      return Ok(Self::new(path));
    }

    let file = fs::File::open(&path).map_err(|source| CredsError::Io {
      path: path.clone(),
      source,
    })?;
    Self::from_reader(path, file)
  }

  /// Decode a hosts document from `reader`; `path` is where writes will go.
  pub fn from_reader(path: impl Into<PathBuf>, mut reader: impl Read) -> Result<Self> {
    let path = path.into();

    let mut content = String::new();
    reader.read_to_string(&mut content).map_err(|source| CredsError::Io {
      path: path.clone(),
      source,
    })?;

    let hosts = if content.trim().is_empty() {
      BTreeMap::new()
    } else {
      serde_yaml::from_str::<Option<BTreeMap<String, HostEntry>>>(&content)
        .map_err(|source| CredsError::Yaml {
          path: path.clone(),
          source,
        })?
        .unwrap_or_default()
    };

    tracing::debug!("Loaded {} host(s) from {}", hosts.len(), path.display());
    Ok(Self {
      path,
      hosts,
      backend: Backend::HostsFile,
    })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// [`Backend::HostsFile`] once a file was read or written, otherwise
  /// [`Backend::None`].
  pub const fn backend(&self) -> Backend {
    self.backend
  }

  pub const fn hosts(&self) -> &BTreeMap<String, HostEntry> {
    &self.hosts
  }

  pub fn entry(&self, hostname: &str) -> Option<&HostEntry> {
    self.hosts.get(hostname)
  }

  /// Look up `key` for `hostname`.
  ///
  /// Fails with `UnknownKey` for keys other than `user`/`oauth_token`, and with
  /// `NotFound` when the host, or the requested field of it, is absent.
  pub fn get(&self, hostname: &str, key: &str) -> Result<String> {
    let not_found = || CredsError::NotFound {
      hostname: hostname.to_string(),
      backend: self.backend,
    };

    let entry = self.hosts.get(hostname).ok_or_else(not_found)?;
    let key: CredentialKey = key.parse()?;

    entry.value(key).map(str::to_string).ok_or_else(not_found)
  }

  /// Set `key` for `hostname`, creating the host entry if needed.
  ///
  /// Unknown keys are ignored, unlike [`HostsFile::get`] which rejects them.
  pub fn set(&mut self, hostname: &str, key: &str, value: &str) -> Result<()> {
    let entry = self.hosts.entry(hostname.to_string()).or_default();

    match key.parse::<CredentialKey>() {
      Ok(key) => entry.set_value(key, value),
      Err(_) => tracing::warn!("Ignoring unknown key {key} for host {hostname}"),
    }

    Ok(())
  }

  /// Persist the mapping back to [`HostsFile::path`].
  ///
  /// Parent directories are created as needed. On Unix the file is left
  /// readable by its owner only.
  pub fn write(&mut self) -> Result<()> {
    let io_err = |source| CredsError::Io {
      path: self.path.clone(),
      source,
    };

    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent).map_err(|source| CredsError::Io {
        path: parent.to_path_buf(),
        source,
      })?;
    }

    let content = serde_yaml::to_string(&self.hosts).map_err(|source| CredsError::Yaml {
      path: self.path.clone(),
      source,
    })?;

    let mut file = open_secure(&self.path).map_err(io_err)?;
    file.write_all(content.as_bytes()).map_err(io_err)?;

    tracing::debug!("Wrote {} host(s) to {}", self.hosts.len(), self.path.display());
    self.backend = Backend::HostsFile;
    Ok(())
  }
}

/// Open `path` for a full rewrite. On Unix the file is owner-only before any
/// content is written.
fn open_secure(path: &Path) -> std::io::Result<fs::File> {
  #[cfg(unix)]
  use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

  let mut options = fs::OpenOptions::new();
  options.write(true).create(true).truncate(true);
  #[cfg(unix)]
  options.mode(0o600); // Owner read/write only

  let file = options.open(path)?;

  // `mode` only applies when the file is created
  #[cfg(unix)]
  file.set_permissions(fs::Permissions::from_mode(0o600))?;

  Ok(file)
}
