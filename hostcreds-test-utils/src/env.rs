//! Environment variable management for testing
//!
//! This module provides a guard that records the original value of every
//! variable it touches and restores it on drop, so tests that exercise
//! `GH_CONFIG_DIR`/`XDG_CONFIG_HOME` lookups don't leak into each other.

use std::env;
use std::ffi::OsString;

/// Restores modified environment variables when dropped
#[derive(Default)]
pub struct EnvTestGuard {
  /// Original values, in the order they were first touched
  originals: Vec<(String, Option<OsString>)>,
}

impl EnvTestGuard {
  /// Variables that decide where the hosts file lives
  pub const GH_CONFIG_DIR: &'static str = "GH_CONFIG_DIR";
  pub const XDG_CONFIG_HOME: &'static str = "XDG_CONFIG_HOME";
  pub const APP_DATA: &'static str = "AppData";

  /// Create a guard that clears the config location variables for the
  /// duration of the test
  pub fn new() -> Self {
    let mut guard = Self::default();
    for name in [Self::GH_CONFIG_DIR, Self::XDG_CONFIG_HOME, Self::APP_DATA] {
      guard.remove(name);
    }
    guard
  }

  /// Set `name` to `value` until the guard is dropped
  pub fn set(&mut self, name: &str, value: &str) {
    self.remember(name);
    unsafe {
      env::set_var(name, value);
    }
  }

  /// Unset `name` until the guard is dropped
  pub fn remove(&mut self, name: &str) {
    self.remember(name);
    unsafe {
      env::remove_var(name);
    }
  }

  fn remember(&mut self, name: &str) {
    if !self.originals.iter().any(|(saved, _)| saved == name) {
      self.originals.push((name.to_string(), env::var_os(name)));
    }
  }
}

impl Drop for EnvTestGuard {
  fn drop(&mut self) {
    // Restore in reverse order of first modification
    for (name, original) in self.originals.drain(..).rev() {
      match original {
        Some(val) => unsafe {
          env::set_var(&name, val);
        },
        None => unsafe {
          env::remove_var(&name);
        },
      }
    }
  }
}
