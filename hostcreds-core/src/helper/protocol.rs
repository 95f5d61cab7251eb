//! The git credential helper wire format: `key=value` lines ended by a blank
//! line.

/// Encode a helper request.
///
/// Each pair becomes `key=value\n` and the body ends with an empty line.
pub fn build_request<'a, I>(fields: I) -> String
where
  I: IntoIterator<Item = (&'a str, &'a str)>,
{
  let mut request = String::new();
  for (key, value) in fields {
    request.push_str(key);
    request.push('=');
    request.push_str(value);
    request.push('\n');
  }
  request.push('\n');
  request
}

/// The fields of a `get` response we care about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelperResponse {
  pub username: Option<String>,
  pub password: Option<String>,
}

/// Decode a helper response.
///
/// Blank lines, lines without `=` and keys other than `username`/`password`
/// are skipped.
pub fn parse_response(output: &str) -> HelperResponse {
  let mut response = HelperResponse::default();

  for line in output.trim_end().split('\n') {
    if line.trim().is_empty() {
      continue;
    }

    let Some((key, value)) = line.split_once('=') else {
      tracing::trace!("Skipping malformed helper output line");
      continue;
    };

    match key.trim() {
      "username" => response.username = Some(value.trim().to_string()),
      "password" => response.password = Some(value.trim().to_string()),
      other => tracing::trace!("Ignoring helper output key {other}"),
    }
  }

  response
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_build_request() {
    let request = build_request([("protocol", "https"), ("host", "github.com")]);
    assert_eq!(request, "protocol=https\nhost=github.com\n\n");
  }

  #[test]
  fn test_build_empty_request() {
    assert_eq!(build_request(std::iter::empty()), "\n");
  }

  #[test]
  fn test_parse_response() {
    let response = parse_response("username=u\npassword=p\n\n");
    assert_eq!(response.username.as_deref(), Some("u"));
    assert_eq!(response.password.as_deref(), Some("p"));
  }

  #[test]
  fn test_parse_full_echo_response() {
    let output = "protocol=https\nhost=github.com\nusername=username\npassword=password\npath=nektos/act#github-token\n\n";
    let response = parse_response(output);

    assert_eq!(
      response,
      HelperResponse {
        username: Some("username".to_string()),
        password: Some("password".to_string()),
      }
    );
  }

  #[test]
  fn test_parse_splits_on_first_equals_and_trims() {
    let response = parse_response("  username = alice \npassword=a=b=c\r\n");
    assert_eq!(response.username.as_deref(), Some("alice"));
    assert_eq!(response.password.as_deref(), Some("a=b=c"));
  }

  #[test]
  fn test_parse_skips_malformed_lines() {
    let response = parse_response("garbage\n\nusername=u\nquit\n");
    assert_eq!(response.username.as_deref(), Some("u"));
    assert_eq!(response.password, None);
  }

  #[test]
  fn test_parse_empty_output() {
    assert_eq!(parse_response(""), HelperResponse::default());
  }
}
