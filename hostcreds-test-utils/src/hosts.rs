//! Temporary gh hosts files for testing

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tempfile::TempDir;

/// RAII guard for a test hosts file
///
/// Creates a temporary gh config directory containing `hosts.yml` with the
/// given content. The directory is removed when the guard is dropped. Point
/// `GH_CONFIG_DIR` (or an injected config environment) at
/// [`HostsFileGuard::config_dir`] to use it.
pub struct HostsFileGuard {
  temp_dir: TempDir,
  hosts_path: PathBuf,
}

impl HostsFileGuard {
  /// Create a new guard with `content` written to `hosts.yml`
  pub fn new(content: &str) -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let hosts_path = temp_dir.path().join("hosts.yml");

    fs::write(&hosts_path, content).expect("Failed to write test hosts.yml");

    Self { temp_dir, hosts_path }
  }

  /// Create a guard whose config directory does not contain a hosts file yet
  pub fn empty() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let hosts_path = temp_dir.path().join("hosts.yml");

    Self { temp_dir, hosts_path }
  }

  /// The directory holding `hosts.yml`
  pub fn config_dir(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Get the path to the hosts file
  pub fn hosts_path(&self) -> &Path {
    &self.hosts_path
  }

  /// Read the current hosts file contents
  pub fn read(&self) -> anyhow::Result<String> {
    fs::read_to_string(&self.hosts_path)
      .with_context(|| format!("Failed to read {}", self.hosts_path.display()))
  }
}
