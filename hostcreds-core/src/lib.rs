//! # Hostcreds Core Library
//!
//! Resolves a username/token pair for a git host. Credentials come either from
//! the YAML hosts file maintained by the GitHub CLI or from an external git
//! credential helper, and both backends are reachable through the same
//! [`CredentialStore`] interface.

pub mod config;
pub mod consts;
pub mod error;
pub mod helper;
pub mod hosts;
pub mod key;
pub mod store;

// Re-export main types for callers
pub use config::{ConfigEnv, resolve_hosts_path};
pub use error::{CredsError, Result};
pub use helper::{CommandOutput, CommandRunner, CredentialState, Credentials, HelperInvocation, SystemRunner};
pub use hosts::{HostEntry, HostsFile};
pub use key::CredentialKey;
pub use store::{Backend, CredentialStore, StoreOptions, open_store};
