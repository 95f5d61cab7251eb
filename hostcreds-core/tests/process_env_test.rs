//! Snapshotting the real process environment.
//!
//! Kept in its own test binary so the variables it sets cannot race with
//! tests that spawn helpers or read `HOME`.

use std::path::{Path, PathBuf};

use hostcreds_core::consts::{ENV_GH_CONFIG_DIR, ENV_XDG_CONFIG_HOME};
use hostcreds_core::{ConfigEnv, resolve_hosts_path};
use hostcreds_test_utils::EnvTestGuard;

#[test]
fn test_from_process_reads_overrides() {
  let mut guard = EnvTestGuard::new();
  guard.set(ENV_GH_CONFIG_DIR, "/tmp/gh-override");
  guard.set(ENV_XDG_CONFIG_HOME, "");

  let env = ConfigEnv::from_process();
  assert_eq!(env.gh_config_dir, Some(PathBuf::from("/tmp/gh-override")));
  assert_eq!(env.xdg_config_home, None, "empty variables count as unset");

  let path = resolve_hosts_path(&env).unwrap();
  assert_eq!(path, Path::new("/tmp/gh-override/hosts.yml"));
}
