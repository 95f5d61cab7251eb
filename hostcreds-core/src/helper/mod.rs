//! # Credential Helper Backend
//!
//! Fetches and stores credentials through an external git credential helper,
//! speaking the line-oriented `key=value` protocol over stdin/stdout.
//!
//! A [`Credentials`] value tracks exactly one hostname. It is loaded with a
//! `get` call when constructed and persisted with a `store` call on
//! [`Credentials::write`].

pub mod command;
pub mod protocol;
pub mod runner;

use std::fmt;
use std::path::PathBuf;

use directories::BaseDirs;
pub use runner::{CommandOutput, CommandRunner, HelperInvocation, SystemRunner};

use crate::consts::{DEFAULT_CREDENTIAL_PATH, DEFAULT_PROTOCOL, ENV_GCM_INTERACTIVE, OP_GET, OP_STORE, SHELL};
use crate::error::{CredsError, Result};
use crate::key::CredentialKey;
use crate::store::Backend;

/// Lifecycle of a [`Credentials`] value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialState {
  /// The helper answered but did not supply both username and password
  Loaded,
  /// Username and password are both known
  Ready,
  /// Changed with [`Credentials::set`] since the last load or write
  Modified,
  /// Persisted with [`Credentials::write`]
  Written,
}

/// Credentials for one host, backed by a git credential helper
pub struct Credentials {
  helper: String,
  hostname: String,
  username: String,
  password: String,
  protocol: String,
  path: String,
  home: Option<PathBuf>,
  state: CredentialState,
  runner: Box<dyn CommandRunner>,
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("helper", &self.helper)
      .field("hostname", &self.hostname)
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .field("state", &self.state)
      .finish_non_exhaustive()
  }
}

impl Credentials {
  /// Create credentials for `hostname` and load them from `helper`.
  ///
  /// A failing `get` call is returned as the constructor error.
  pub fn new(hostname: &str, helper: &str) -> Result<Self> {
    let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    Self::with_runner(hostname, helper, Box::new(SystemRunner), home)
  }

  /// Like [`Credentials::new`] but with an explicit runner and home
  /// directory.
  pub fn with_runner(
    hostname: &str,
    helper: &str,
    runner: Box<dyn CommandRunner>,
    home: Option<PathBuf>,
  ) -> Result<Self> {
    let mut credentials = Self::unloaded(hostname, helper, runner, home);
    credentials.load()?;
    Ok(credentials)
  }

  fn unloaded(hostname: &str, helper: &str, runner: Box<dyn CommandRunner>, home: Option<PathBuf>) -> Self {
    Self {
      helper: helper.to_string(),
      hostname: hostname.to_string(),
      username: String::new(),
      password: String::new(),
      protocol: DEFAULT_PROTOCOL.to_string(),
      path: DEFAULT_CREDENTIAL_PATH.to_string(),
      home,
      state: CredentialState::Loaded,
      runner,
    }
  }

  /// Use `path` instead of the default request path and reload.
  pub fn with_path(mut self, path: &str) -> Result<Self> {
    self.path = path.to_string();
    self.load()?;
    Ok(self)
  }

  pub fn helper(&self) -> &str {
    &self.helper
  }

  pub fn hostname(&self) -> &str {
    &self.hostname
  }

  pub const fn state(&self) -> CredentialState {
    self.state
  }

  pub const fn backend(&self) -> Backend {
    Backend::CredentialHelper
  }

  /// Return the username (`user`) or password (`oauth_token`).
  ///
  /// Only the bound hostname is known; any other host is `NotFound`.
  pub fn get(&self, hostname: &str, key: &str) -> Result<String> {
    if hostname != self.hostname {
      return Err(CredsError::NotFound {
        hostname: hostname.to_string(),
        backend: self.backend(),
      });
    }

    match key.parse::<CredentialKey>()? {
      CredentialKey::User => Ok(self.username.clone()),
      CredentialKey::OauthToken => Ok(self.password.clone()),
    }
  }

  /// Rebind to `hostname` and set the username or password.
  ///
  /// Unknown keys still rebind the hostname but change nothing else.
  pub fn set(&mut self, hostname: &str, key: &str, value: &str) -> Result<()> {
    self.hostname = hostname.to_string();

    match key.parse::<CredentialKey>() {
      Ok(CredentialKey::User) => self.username = value.to_string(),
      Ok(CredentialKey::OauthToken) => self.password = value.to_string(),
      Err(_) => tracing::warn!("Ignoring unknown key {key} for host {hostname}"),
    }

    self.state = CredentialState::Modified;
    Ok(())
  }

  /// Store the current username and password through the helper.
  pub fn write(&mut self) -> Result<()> {
    let fields = [
      ("protocol", self.protocol.as_str()),
      ("host", self.hostname.as_str()),
      ("path", self.path.as_str()),
      ("username", self.username.as_str()),
      ("password", self.password.as_str()),
    ];
    self.exec_helper(OP_STORE, &fields)?;

    self.state = CredentialState::Written;
    Ok(())
  }

  fn load(&mut self) -> Result<()> {
    let fields = [
      ("protocol", self.protocol.as_str()),
      ("host", self.hostname.as_str()),
      ("path", self.path.as_str()),
    ];
    let output = self.exec_helper(OP_GET, &fields)?;

    let response = protocol::parse_response(&output);
    if let Some(username) = response.username {
      self.username = username;
    }
    if let Some(password) = response.password {
      self.password = password;
    }

    self.state = if self.username.is_empty() || self.password.is_empty() {
      CredentialState::Loaded
    } else {
      CredentialState::Ready
    };
    tracing::debug!("Loaded credentials for {} ({:?})", self.hostname, self.state);
    Ok(())
  }

  fn exec_helper(&self, operation: &str, fields: &[(&str, &str)]) -> Result<String> {
    let line = command::command_line(&self.helper, operation, self.home.as_deref());
    let invocation = HelperInvocation {
      program: SHELL.to_string(),
      args: vec!["-c".to_string(), line],
      env: vec![(ENV_GCM_INTERACTIVE.to_string(), "0".to_string())],
      stdin: protocol::build_request(fields.iter().copied()),
    };

    tracing::debug!("Running credential helper: {} -c {:?}", invocation.program, invocation.args[1]);

    let output = self.runner.run(&invocation).map_err(|source| CredsError::HelperLaunch {
      operation: operation.to_string(),
      source,
    })?;

    if !output.success {
      return Err(CredsError::HelperFailure {
        operation: operation.to_string(),
        status: output.status_description(),
        output: output.combined(),
      });
    }

    Ok(output.stdout)
  }
}
