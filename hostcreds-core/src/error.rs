//! Error type shared by every credential backend.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::store::Backend;

/// Errors produced while resolving, reading or persisting credentials.
#[derive(Debug, Error)]
pub enum CredsError {
  /// The requested host has no credentials in the backend.
  #[error("host {hostname} not found in {backend}")]
  NotFound { hostname: String, backend: Backend },

  /// The requested key is not one of `user` or `oauth_token`.
  #[error("unknown key {key}")]
  UnknownKey { key: String },

  /// The credential helper ran but exited unsuccessfully.
  #[error("credential helper `{operation}` failed ({status}): {output}")]
  HelperFailure {
    operation: String,
    status: String,
    output: String,
  },

  /// The credential helper could not be started or fed its request.
  #[error("failed to run credential helper `{operation}`")]
  HelperLaunch {
    operation: String,
    #[source]
    source: io::Error,
  },

  #[error("failed to access {}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to parse hosts file {}", .path.display())]
  Yaml {
    path: PathBuf,
    #[source]
    source: serde_yaml::Error,
  },

  /// No config variable was set and the home directory is unknown.
  #[error("could not determine the home directory")]
  HomeDirUnavailable,
}

impl CredsError {
  /// True for a missing host.
  pub const fn is_not_found(&self) -> bool {
    matches!(self, Self::NotFound { .. })
  }

  /// True for an unrecognised key.
  pub const fn is_unknown_key(&self) -> bool {
    matches!(self, Self::UnknownKey { .. })
  }

  /// True when the helper failed to launch or exited non-zero.
  pub const fn is_helper_failure(&self) -> bool {
    matches!(self, Self::HelperFailure { .. } | Self::HelperLaunch { .. })
  }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CredsError>;
