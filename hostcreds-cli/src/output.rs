//! # Output Formatting
//!
//! Coloured, consistently prefixed messages for the terminal.

use owo_colors::{OwoColorize, Stream, Style};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply the mode globally
  pub fn apply(self) {
    match self {
      Self::Always | Self::Yes => owo_colors::set_override(true),
      Self::Never | Self::No => owo_colors::set_override(false),
      // Let owo_colors detect the terminal itself
      Self::Auto => {}
    }
  }
}

fn styled(text: &str, stream: Stream, style: Style) -> String {
  text.if_supports_color(stream, |t| t.style(style)).to_string()
}

/// Print a success message
pub fn print_success(message: &str) {
  println!("{} {}", styled("✓", Stream::Stdout, Style::new().green().bold()), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  eprintln!("{} {}", styled("⚠", Stream::Stderr, Style::new().yellow().bold()), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  println!("{} {}", styled("ℹ", Stream::Stdout, Style::new().blue().bold()), message);
}

/// Format a filesystem path
pub fn format_path(path: &str) -> String {
  styled(path, Stream::Stdout, Style::new().bright_green())
}

/// Format a hostname
pub fn format_host(host: &str) -> String {
  styled(host, Stream::Stdout, Style::new().bright_cyan().bold())
}

/// Format a command or command example
pub fn format_command(cmd: &str) -> String {
  styled(cmd, Stream::Stdout, Style::new().purple())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_functions() {
    assert!(format_path("/home/user/.config/gh/hosts.yml").contains("hosts.yml"));
    assert!(format_host("github.com").contains("github.com"));
    assert!(format_command("hostcreds get").contains("hostcreds get"));
  }

  #[test]
  fn test_disabled_colors_emit_plain_text() {
    ColorMode::Never.apply();

    assert_eq!(format_host("github.com"), "github.com");
    assert_eq!(format_path("/tmp/hosts.yml"), "/tmp/hosts.yml");
    assert_eq!(format_command("hostcreds path"), "hostcreds path");
  }
}
