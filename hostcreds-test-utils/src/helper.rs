//! Scripted git credential helpers for testing
//!
//! [`HelperScriptGuard`] writes a small POSIX shell script that behaves like
//! a credential helper: every request it receives is appended to a log file,
//! and `get` requests are answered with a canned response.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// RAII guard for a temporary credential helper script
pub struct HelperScriptGuard {
  temp_dir: TempDir,
  script_path: PathBuf,
  log_path: PathBuf,
}

impl HelperScriptGuard {
  /// A helper that answers `get` with `response` and accepts `store`
  pub fn new(response: &str) -> Self {
    Self::with_exit_code(response, 0)
  }

  /// A helper that prints `message` to stderr and exits with `code`
  pub fn failing(code: i32, message: &str) -> Self {
    let guard = Self::with_exit_code("", code);
    let script = fs::read_to_string(&guard.script_path).expect("Failed to read helper script");
    let script = script.replace("exit ", &format!("echo '{message}' >&2\nexit "));
    fs::write(&guard.script_path, script).expect("Failed to rewrite helper script");
    guard
  }

  fn with_exit_code(response: &str, code: i32) -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let script_path = temp_dir.path().join("git-credential-test");
    let log_path = temp_dir.path().join("requests.log");

    let script = format!(
      r#"#!/bin/sh
{{ echo "operation=$1"; cat; }} >> '{log}'
if [ "$1" = "get" ]; then
cat <<'HOSTCREDS_EOF'
{response}
HOSTCREDS_EOF
fi
exit {code}
"#,
      log = log_path.display(),
    );

    fs::write(&script_path, script).expect("Failed to write helper script");
    let mut perms = fs::metadata(&script_path)
      .expect("Failed to stat helper script")
      .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script_path, perms).expect("Failed to make helper script executable");

    Self {
      temp_dir,
      script_path,
      log_path,
    }
  }

  /// Absolute path of the script, usable directly as a helper value
  pub fn script_path(&self) -> &Path {
    &self.script_path
  }

  /// The helper value to configure (the script's absolute path)
  pub fn helper(&self) -> String {
    self.script_path.display().to_string()
  }

  /// Every request received so far, each starting with `operation=<op>`
  pub fn requests(&self) -> Vec<String> {
    let log = fs::read_to_string(&self.log_path).unwrap_or_default();
    log
      .split("\n\n")
      .map(str::trim)
      .filter(|request| !request.is_empty())
      .map(str::to_string)
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;
  use std::process::{Command, Stdio};

  use super::*;

  fn run(guard: &HelperScriptGuard, operation: &str, input: &str) -> std::process::Output {
    let mut child = Command::new(guard.script_path())
      .arg(operation)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .spawn()
      .expect("Failed to run helper script");
    child
      .stdin
      .take()
      .expect("stdin is piped")
      .write_all(input.as_bytes())
      .expect("Failed to write request");
    child.wait_with_output().expect("Failed to wait for helper script")
  }

  #[test]
  fn test_script_answers_get_and_logs() {
    let guard = HelperScriptGuard::new("username=u\npassword=p");

    let output = run(&guard, "get", "host=github.com\n\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "username=u\npassword=p\n");
    assert_eq!(guard.requests(), vec!["operation=get\nhost=github.com"]);
  }

  #[test]
  fn test_failing_script() {
    let guard = HelperScriptGuard::failing(4, "locked");

    let output = run(&guard, "get", "host=github.com\n\n");
    assert_eq!(output.status.code(), Some(4));
    assert_eq!(String::from_utf8_lossy(&output.stderr), "locked\n");
  }
}
