use assert_cmd::Command;
use hostcreds_test_utils::HostsFileGuard;
use predicates::prelude::*;

const HOSTS: &str = r#"github.com:
  user: octocat
  oauth_token: gho_token
ghe.com:
  user: enterprise
  oauth_token: ghe_token
"#;

/// A hostcreds command isolated from the caller's config environment
fn hostcreds(guard: &HostsFileGuard) -> Command {
  let mut cmd = Command::cargo_bin("hostcreds").expect("binary should build");
  cmd
    .env("GH_CONFIG_DIR", guard.config_dir())
    .env_remove("XDG_CONFIG_HOME")
    .env_remove("HOSTCREDS_HELPER")
    .arg("--colors=never");
  cmd
}

#[test]
fn test_help_lists_commands() {
  let guard = HostsFileGuard::empty();

  hostcreds(&guard)
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("get"))
    .stdout(predicate::str::contains("set"))
    .stdout(predicate::str::contains("hosts"))
    .stdout(predicate::str::contains("path"));
}

#[test]
fn test_path_uses_gh_config_dir() {
  let guard = HostsFileGuard::empty();

  hostcreds(&guard)
    .arg("path")
    .assert()
    .success()
    .stdout(format!("{}\n", guard.hosts_path().display()));
}

#[test]
fn test_get_prints_value() {
  let guard = HostsFileGuard::new(HOSTS);

  hostcreds(&guard)
    .args(["get", "ghe.com", "oauth_token"])
    .assert()
    .success()
    .stdout("ghe_token\n");
}

#[test]
fn test_get_unknown_host_fails() {
  let guard = HostsFileGuard::new(HOSTS);

  hostcreds(&guard)
    .args(["get", "other.com", "user"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("host other.com not found"));
}

#[test]
fn test_get_unknown_key_fails() {
  let guard = HostsFileGuard::new(HOSTS);

  hostcreds(&guard)
    .args(["get", "github.com", "password"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown key password"));
}

#[test]
fn test_set_creates_hosts_file() {
  let guard = HostsFileGuard::empty();

  hostcreds(&guard)
    .args(["set", "github.com", "user", "alice"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Saved user"));

  hostcreds(&guard)
    .args(["get", "github.com", "user"])
    .assert()
    .success()
    .stdout("alice\n");

  let content = guard.read().expect("hosts file should exist");
  assert!(content.contains("alice"));
}

#[test]
fn test_set_rejects_unknown_key() {
  let guard = HostsFileGuard::new(HOSTS);

  hostcreds(&guard)
    .args(["set", "github.com", "password", "x"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown key password"));

  assert_eq!(guard.read().expect("hosts file should exist"), HOSTS);
}

#[test]
fn test_set_with_explicit_hosts_file() {
  let guard = HostsFileGuard::empty();
  let other = HostsFileGuard::empty();

  hostcreds(&guard)
    .args(["set", "github.com", "oauth_token", "tok", "--hosts-file"])
    .arg(other.hosts_path())
    .assert()
    .success();

  assert!(other.hosts_path().exists());
  assert!(!guard.hosts_path().exists());
}

#[test]
fn test_hosts_json_hides_tokens() {
  let guard = HostsFileGuard::new(HOSTS);

  let output = hostcreds(&guard).args(["hosts", "--json"]).output().expect("command runs");
  assert!(output.status.success());

  let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
  assert!(!stdout.contains("gho_token"));

  let listed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
  assert_eq!(listed[0]["host"], "ghe.com");
  assert_eq!(listed[1]["user"], "octocat");
  assert_eq!(listed[1]["has_token"], true);
}

#[test]
fn test_hosts_without_file_warns() {
  let guard = HostsFileGuard::empty();

  hostcreds(&guard)
    .arg("hosts")
    .assert()
    .success()
    .stderr(predicate::str::contains("No hosts file found"));
}

#[test]
fn test_hosts_listing_is_plain_without_colors() {
  let guard = HostsFileGuard::new(HOSTS);

  hostcreds(&guard)
    .arg("hosts")
    .assert()
    .success()
    .stdout(predicate::str::contains("github.com"))
    .stdout(predicate::str::contains("\x1b").not());
}

#[test]
fn test_hosts_listing_colored_when_forced() {
  let guard = HostsFileGuard::new(HOSTS);

  Command::cargo_bin("hostcreds")
    .expect("binary should build")
    .env("GH_CONFIG_DIR", guard.config_dir())
    .env_remove("XDG_CONFIG_HOME")
    .args(["--colors=always", "hosts"])
    .assert()
    .success()
    .stdout(predicate::str::contains("\x1b["));
}

#[cfg(unix)]
mod helper {
  use hostcreds_test_utils::HelperScriptGuard;

  use super::*;

  #[test]
  fn test_get_through_helper() {
    let guard = HostsFileGuard::empty();
    let helper = HelperScriptGuard::new("username=helper-user\npassword=helper-pass");

    hostcreds(&guard)
      .args(["get", "github.com", "oauth_token"])
      .env("HOSTCREDS_HELPER", helper.helper())
      .assert()
      .success()
      .stdout("helper-pass\n");

    let requests = helper.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("operation=get\n"));
    assert!(requests[0].contains("host=github.com"));
  }

  #[test]
  fn test_set_through_helper_stores() {
    let guard = HostsFileGuard::empty();
    let helper = HelperScriptGuard::new("");

    hostcreds(&guard)
      .args(["set", "github.com", "oauth_token", "new-token", "--helper"])
      .arg(helper.helper())
      .assert()
      .success();

    let requests = helper.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[1].starts_with("operation=store\n"));
    assert!(requests[1].contains("password=new-token"));
    assert!(!guard.hosts_path().exists(), "helper backend must not touch the hosts file");
  }

  #[test]
  fn test_helper_failure_exits_non_zero() {
    let guard = HostsFileGuard::empty();
    let helper = HelperScriptGuard::failing(2, "keyring locked");

    hostcreds(&guard)
      .args(["get", "github.com", "user", "--helper"])
      .arg(helper.helper())
      .assert()
      .failure()
      .stderr(predicate::str::contains("keyring locked"));
  }
}
