//! # Configuration Resolution
//!
//! Locates the gh hosts file. The environment is captured once into a
//! [`ConfigEnv`] so that resolution itself is a pure function of its input.

use std::env;
use std::path::PathBuf;

use directories::BaseDirs;

use crate::consts::{
  ENV_APP_DATA, ENV_GH_CONFIG_DIR, ENV_XDG_CONFIG_HOME, GH_DIR_NAME, GH_WINDOWS_DIR_NAME, HOSTS_FILE_NAME,
};
use crate::error::{CredsError, Result};

/// Snapshot of the environment values that decide where the hosts file lives
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigEnv {
  /// `GH_CONFIG_DIR`
  pub gh_config_dir: Option<PathBuf>,
  /// `XDG_CONFIG_HOME`
  pub xdg_config_home: Option<PathBuf>,
  /// `AppData`, only consulted when `windows` is set
  pub app_data: Option<PathBuf>,
  /// The user's home directory
  pub home: Option<PathBuf>,
  /// Whether Windows-only locations apply
  pub windows: bool,
}

impl ConfigEnv {
  /// Capture the current process environment.
  pub fn from_process() -> Self {
    Self {
      gh_config_dir: non_empty_var(ENV_GH_CONFIG_DIR),
      xdg_config_home: non_empty_var(ENV_XDG_CONFIG_HOME),
      app_data: non_empty_var(ENV_APP_DATA),
      home: BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()),
      windows: cfg!(windows),
    }
  }

  /// An environment with only a home directory set.
  pub fn with_home(home: impl Into<PathBuf>) -> Self {
    Self {
      home: Some(home.into()),
      ..Self::default()
    }
  }
}

fn non_empty_var(name: &str) -> Option<PathBuf> {
  env::var_os(name).filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Resolve the hosts file path.
///
/// The first configured location wins:
///
/// 1. `$GH_CONFIG_DIR/hosts.yml`
/// 2. `$XDG_CONFIG_HOME/gh/hosts.yml`
/// 3. `%AppData%/GitHub CLI/hosts.yml` (Windows only)
/// 4. `~/.config/gh/hosts.yml`
///
/// The returned path is not checked for existence or writability.
pub fn resolve_hosts_path(env: &ConfigEnv) -> Result<PathBuf> {
  let path = if let Some(dir) = &env.gh_config_dir {
    dir.join(HOSTS_FILE_NAME)
  } else if let Some(dir) = &env.xdg_config_home {
    dir.join(GH_DIR_NAME).join(HOSTS_FILE_NAME)
  } else if let Some(dir) = env.app_data.as_ref().filter(|_| env.windows) {
    dir.join(GH_WINDOWS_DIR_NAME).join(HOSTS_FILE_NAME)
  } else {
    let home = env.home.as_ref().ok_or(CredsError::HomeDirUnavailable)?;
    home.join(".config").join(GH_DIR_NAME).join(HOSTS_FILE_NAME)
  };

  tracing::debug!("Resolved hosts file path: {}", path.display());
  Ok(path)
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::*;

  fn base_env() -> ConfigEnv {
    ConfigEnv::with_home("/home/user")
  }

  #[test]
  fn test_home_fallback() {
    let path = resolve_hosts_path(&base_env()).unwrap();
    assert_eq!(path, Path::new("/home/user/.config/gh/hosts.yml"));
  }

  #[test]
  fn test_xdg_config_home() {
    let env = ConfigEnv {
      xdg_config_home: Some("/home/user/.config".into()),
      ..base_env()
    };

    let path = resolve_hosts_path(&env).unwrap();
    assert_eq!(path, Path::new("/home/user/.config/gh/hosts.yml"));
  }

  #[test]
  fn test_gh_config_dir_overrides_everything() {
    let env = ConfigEnv {
      gh_config_dir: Some("/home/user".into()),
      xdg_config_home: Some("/xdg".into()),
      app_data: Some("/appdata".into()),
      windows: true,
      ..base_env()
    };

    let path = resolve_hosts_path(&env).unwrap();
    assert_eq!(path, Path::new("/home/user/hosts.yml"));
  }

  #[test]
  fn test_xdg_beats_app_data() {
    let env = ConfigEnv {
      xdg_config_home: Some("/xdg".into()),
      app_data: Some("/appdata".into()),
      windows: true,
      ..base_env()
    };

    let path = resolve_hosts_path(&env).unwrap();
    assert_eq!(path, Path::new("/xdg/gh/hosts.yml"));
  }

  #[test]
  fn test_app_data_on_windows() {
    let env = ConfigEnv {
      app_data: Some("/appdata".into()),
      windows: true,
      ..base_env()
    };

    let path = resolve_hosts_path(&env).unwrap();
    assert_eq!(path, Path::new("/appdata/GitHub CLI/hosts.yml"));
  }

  #[test]
  fn test_app_data_ignored_off_windows() {
    let env = ConfigEnv {
      app_data: Some("/appdata".into()),
      windows: false,
      ..base_env()
    };

    let path = resolve_hosts_path(&env).unwrap();
    assert_eq!(path, Path::new("/home/user/.config/gh/hosts.yml"));
  }

  #[test]
  fn test_no_home_is_an_error() {
    let err = resolve_hosts_path(&ConfigEnv::default()).unwrap_err();
    assert!(matches!(err, CredsError::HomeDirUnavailable));
  }
}
