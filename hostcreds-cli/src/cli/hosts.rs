//! # Hosts Command
//!
//! Lists the hosts recorded in the gh hosts file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hostcreds_core::{Backend, ConfigEnv, HostsFile, resolve_hosts_path};
use serde::Serialize;

use crate::output::{format_command, format_host, format_path, print_info, print_warning};

/// Arguments for `hostcreds hosts`
#[derive(Args)]
pub struct HostsArgs {
  /// Print a JSON array instead of a table
  #[arg(long)]
  pub json: bool,

  /// Read this hosts file instead of the resolved one
  #[arg(long, value_name = "PATH")]
  pub hosts_file: Option<PathBuf>,
}

/// One listed host; the token itself is never exposed
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HostSummary {
  pub host: String,
  pub user: Option<String>,
  pub has_token: bool,
}

/// Summarise every host in `hosts`, sorted by hostname
pub fn summarize(hosts: &HostsFile) -> Vec<HostSummary> {
  hosts
    .hosts()
    .iter()
    .map(|(host, entry)| HostSummary {
      host: host.clone(),
      user: entry.user.clone(),
      has_token: entry.oauth_token.as_deref().is_some_and(|token| !token.is_empty()),
    })
    .collect()
}

/// Handle the hosts command
pub(crate) fn handle_hosts_command(args: HostsArgs) -> Result<()> {
  let path = match args.hosts_file {
    Some(path) => path,
    None => resolve_hosts_path(&ConfigEnv::from_process()).context("Failed to resolve the hosts file path")?,
  };
  let hosts = HostsFile::load(&path)?;
  let summaries = summarize(&hosts);

  if args.json {
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    return Ok(());
  }

  if hosts.backend() == Backend::None {
    print_warning(&format!("No hosts file found at {}", format_path(&path.display().to_string())));
    println!("Add one with {}", format_command("hostcreds set <host> user <name>"));
    return Ok(());
  }

  if summaries.is_empty() {
    print_info("The hosts file does not list any hosts.");
    return Ok(());
  }

  for summary in &summaries {
    let token = if summary.has_token { "token" } else { "no token" };
    println!(
      "{}  {}  ({})",
      format_host(&summary.host),
      summary.user.as_deref().unwrap_or("-"),
      token
    );
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_summarize_hides_tokens() {
    let content = "github.com:\n  user: octocat\n  oauth_token: secret\nghe.com:\n  git_protocol: ssh\n";
    let hosts = HostsFile::from_reader("hosts.yml", content.as_bytes()).unwrap();

    let summaries = summarize(&hosts);
    assert_eq!(
      summaries,
      vec![
        HostSummary {
          host: "ghe.com".to_string(),
          user: None,
          has_token: false,
        },
        HostSummary {
          host: "github.com".to_string(),
          user: Some("octocat".to_string()),
          has_token: true,
        },
      ]
    );

    let json = serde_json::to_string(&summaries).unwrap();
    assert!(!json.contains("secret"));
  }
}
