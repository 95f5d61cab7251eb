//! The key names callers use to address a credential field.

use std::fmt;
use std::str::FromStr;

use crate::error::CredsError;

/// A recognised credential field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKey {
  /// The login name (`user`)
  User,
  /// The token or password (`oauth_token`)
  OauthToken,
}

impl CredentialKey {
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::User => "user",
      Self::OauthToken => "oauth_token",
    }
  }
}

impl FromStr for CredentialKey {
  type Err = CredsError;

  fn from_str(key: &str) -> Result<Self, Self::Err> {
    match key {
      "user" => Ok(Self::User),
      "oauth_token" => Ok(Self::OauthToken),
      _ => Err(CredsError::UnknownKey { key: key.to_string() }),
    }
  }
}

impl fmt::Display for CredentialKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
