//! Process execution behind a small trait so helper calls can be faked in
//! tests.

use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Everything needed to launch a credential helper once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperInvocation {
  pub program: String,
  pub args: Vec<String>,
  /// Added on top of the inherited process environment
  pub env: Vec<(String, String)>,
  /// Request body written to the helper's stdin
  pub stdin: String,
}

/// Captured result of a finished helper process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
  pub success: bool,
  /// Exit code, `None` when the process was killed by a signal
  pub code: Option<i32>,
  pub stdout: String,
  pub stderr: String,
}

impl CommandOutput {
  /// A successful exit with the given stdout.
  pub fn ok(stdout: impl Into<String>) -> Self {
    Self {
      success: true,
      code: Some(0),
      stdout: stdout.into(),
      stderr: String::new(),
    }
  }

  /// A failed exit with the given code and stderr.
  pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
    Self {
      success: false,
      code: Some(code),
      stdout: String::new(),
      stderr: stderr.into(),
    }
  }

  /// stdout followed by stderr, for diagnostics.
  pub fn combined(&self) -> String {
    let mut combined = self.stdout.trim_end().to_string();
    let stderr = self.stderr.trim_end();
    if !stderr.is_empty() {
      if !combined.is_empty() {
        combined.push('\n');
      }
      combined.push_str(stderr);
    }
    combined
  }

  pub fn status_description(&self) -> String {
    match self.code {
      Some(code) => format!("exit code {code}"),
      None => "terminated by signal".to_string(),
    }
  }
}

/// Runs a helper invocation to completion
pub trait CommandRunner {
  fn run(&self, invocation: &HelperInvocation) -> io::Result<CommandOutput>;
}

/// [`CommandRunner`] backed by [`std::process::Command`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
  fn run(&self, invocation: &HelperInvocation) -> io::Result<CommandOutput> {
    let mut child = Command::new(&invocation.program)
      .args(&invocation.args)
      .envs(invocation.env.iter().map(|(key, value)| (key, value)))
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
      // Helpers that never read stdin may exit before the request is written
      match stdin.write_all(invocation.stdin.as_bytes()) {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => return Err(e),
        _ => {}
      }
    }

    let output = child.wait_with_output()?;

    Ok(CommandOutput {
      success: output.status.success(),
      code: output.status.code(),
      stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
      stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_combined_output() {
    let output = CommandOutput {
      success: false,
      code: Some(1),
      stdout: "partial\n".to_string(),
      stderr: "fatal: nope\n".to_string(),
    };
    assert_eq!(output.combined(), "partial\nfatal: nope");
    assert_eq!(output.status_description(), "exit code 1");
  }

  #[test]
  fn test_combined_output_stderr_only() {
    assert_eq!(CommandOutput::failed(2, "boom").combined(), "boom");
  }

  #[test]
  #[cfg(unix)]
  fn test_system_runner_feeds_stdin_and_env() {
    let invocation = HelperInvocation {
      program: "/bin/sh".to_string(),
      args: vec!["-c".to_string(), r#"cat; printf 'flag=%s\n' "$HOSTCREDS_TEST_FLAG""#.to_string()],
      env: vec![("HOSTCREDS_TEST_FLAG".to_string(), "on".to_string())],
      stdin: "host=github.com\n\n".to_string(),
    };

    let output = SystemRunner.run(&invocation).unwrap();
    assert!(output.success);
    assert_eq!(output.stdout, "host=github.com\n\nflag=on\n");
  }

  #[test]
  #[cfg(unix)]
  fn test_system_runner_reports_exit_code() {
    let invocation = HelperInvocation {
      program: "/bin/sh".to_string(),
      args: vec!["-c".to_string(), "echo nope >&2; exit 3".to_string()],
      env: Vec::new(),
      stdin: String::new(),
    };

    let output = SystemRunner.run(&invocation).unwrap();
    assert!(!output.success);
    assert_eq!(output.code, Some(3));
    assert_eq!(output.stderr, "nope\n");
  }

  #[test]
  fn test_system_runner_launch_failure() {
    let invocation = HelperInvocation {
      program: "/definitely/not/a/real/binary".to_string(),
      args: Vec::new(),
      env: Vec::new(),
      stdin: String::new(),
    };

    assert!(SystemRunner.run(&invocation).is_err());
  }
}
