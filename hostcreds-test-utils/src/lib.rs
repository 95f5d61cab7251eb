//! Test utilities shared across the hostcreds workspace
//!
//! This crate provides common testing infrastructure including:
//! - Environment variable isolation ([`EnvTestGuard`])
//! - Temporary gh hosts files ([`HostsFileGuard`])
//! - Scripted git credential helpers ([`HelperScriptGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
#[cfg(unix)]
pub mod helper;
pub mod hosts;

// Re-export commonly used items
pub use env::EnvTestGuard;
#[cfg(unix)]
pub use helper::HelperScriptGuard;
pub use hosts::HostsFileGuard;
