//! # Hostcreds CLI Library
//!
//! Command definitions and handlers for the `hostcreds` binary.

pub mod cli;
pub mod output;
