//! Turning a configured `credential.helper` value into a shell command line.

use std::path::Path;

/// The three shapes a helper value can take
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelperKind<'a> {
  /// `!f() { ...; }; f`: a shell snippet, `!` already stripped
  Shell(&'a str),
  /// `/usr/local/bin/helper --flag`
  AbsolutePath(&'a str),
  /// `store --file x`: run as `git credential-<name>`
  Named(&'a str),
}

impl<'a> HelperKind<'a> {
  pub fn classify(helper: &'a str) -> Self {
    if let Some(rest) = helper.strip_prefix('!') {
      Self::Shell(rest.trim_start_matches('!'))
    } else if Path::new(helper).is_absolute() {
      Self::AbsolutePath(helper)
    } else {
      Self::Named(helper)
    }
  }
}

/// Build the command line that `/bin/sh -c` runs for `operation`.
///
/// `home` is used to expand `~` in the arguments of an absolute-path helper.
pub fn command_line(helper: &str, operation: &str, home: Option<&Path>) -> String {
  match HelperKind::classify(helper) {
    HelperKind::Shell(script) => format!("{script} {operation}"),
    HelperKind::AbsolutePath(path) if path.contains(char::is_whitespace) => {
      let mut fields: Vec<String> = path
        .split_whitespace()
        .map(|field| expand_tilde(field, home))
        .collect();
      fields.push(operation.to_string());
      fields.join(" ")
    }
    HelperKind::AbsolutePath(path) => format!("{path} {operation}"),
    HelperKind::Named(name) => format!("git credential-{name} {operation}"),
  }
}

fn expand_tilde(field: &str, home: Option<&Path>) -> String {
  if !field.starts_with('~') {
    return field.to_string();
  }

  shellexpand::tilde_with_context(field, || home.and_then(Path::to_str)).into_owned()
}
