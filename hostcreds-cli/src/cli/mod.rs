//! # Command Line Interface
//!
//! Defines the CLI structure and dispatches to the command handlers.

mod get;
mod hosts;
mod path;
mod set;

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Args, Parser, Subcommand};
use hostcreds_core::{ConfigEnv, CredentialStore, StoreOptions, open_store};

use crate::output::ColorMode;

/// Top-level CLI command for the hostcreds tool
#[derive(Parser)]
#[command(name = "hostcreds")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Resolve git host credentials from the gh hosts file or a git credential helper")]
#[command(
  long_about = "Hostcreds looks up and stores the username and token used for a git host.\n\n\
        Credentials are read from the GitHub CLI hosts file (hosts.yml) or, when a\n\
        helper is configured, from an external git credential helper."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the hostcreds tool
#[derive(Subcommand)]
pub enum Commands {
  /// Print the resolved hosts file path
  #[command(long_about = "Prints where the gh hosts file is expected.\n\n\
            The first of $GH_CONFIG_DIR/hosts.yml, $XDG_CONFIG_HOME/gh/hosts.yml,\n\
            %AppData%/GitHub CLI/hosts.yml (Windows) and ~/.config/gh/hosts.yml wins.\n\
            The file does not need to exist.")]
  Path,

  /// Print a credential value for a host
  #[command(long_about = "Prints the user or oauth_token stored for a host.\n\n\
            Fails when the host is unknown or the key is not one of user/oauth_token.")]
  Get(get::GetArgs),

  /// Set a credential value for a host and persist it
  #[command(long_about = "Sets the user or oauth_token for a host and writes it back.\n\n\
            With a credential helper the value is stored through the helper's\n\
            `store` operation; otherwise the hosts file is rewritten.")]
  Set(set::SetArgs),

  /// List the hosts in the hosts file
  #[command(long_about = "Lists every host in the hosts file with its user.\n\n\
            Tokens are never printed; use --json for machine-readable output.")]
  #[command(alias = "ls")]
  Hosts(hosts::HostsArgs),
}

/// Options selecting the credential backend
#[derive(Args, Debug, Clone, Default)]
pub struct BackendArgs {
  /// Credential helper to use instead of the hosts file
  #[arg(long, env = "HOSTCREDS_HELPER", value_name = "HELPER")]
  pub helper: Option<String>,

  /// Read and write this hosts file instead of the resolved one
  #[arg(long, value_name = "PATH")]
  pub hosts_file: Option<PathBuf>,
}

impl BackendArgs {
  /// Open the store these options point at for `hostname`
  pub(crate) fn open(&self, hostname: &str) -> Result<Box<dyn CredentialStore>> {
    let options = StoreOptions {
      helper: self.helper.clone(),
      hosts_path: self.hosts_file.clone(),
    };
    Ok(open_store(hostname, &options, &ConfigEnv::from_process())?)
  }
}

/// Handle the parsed command line
pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  match cli.command {
    Commands::Path => path::handle_path_command(),
    Commands::Get(get) => get::handle_get_command(get),
    Commands::Set(set) => set::handle_set_command(set),
    Commands::Hosts(hosts) => hosts::handle_hosts_command(hosts),
  }
}
