//! Constants shared by the config resolver and the helper invoker.

/// Environment variable overriding the whole gh config directory
pub const ENV_GH_CONFIG_DIR: &str = "GH_CONFIG_DIR";

/// XDG base directory for configuration
pub const ENV_XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";

/// Windows roaming application data directory
pub const ENV_APP_DATA: &str = "AppData";

/// Name of the hosts file inside the gh config directory
pub const HOSTS_FILE_NAME: &str = "hosts.yml";

/// gh config directory name under XDG/home config roots
pub const GH_DIR_NAME: &str = "gh";

/// gh config directory name under `AppData`
pub const GH_WINDOWS_DIR_NAME: &str = "GitHub CLI";

/// Disables interactive prompts from Git Credential Manager
pub const ENV_GCM_INTERACTIVE: &str = "GCM_INTERACTIVE";

/// Shell used to run every credential helper
pub const SHELL: &str = "/bin/sh";

/// Protocol sent in every helper request
pub const DEFAULT_PROTOCOL: &str = "https";

/// Path sent in every helper request unless overridden
pub const DEFAULT_CREDENTIAL_PATH: &str = "nektos/act#github-token";

/// Helper operation that reads credentials
pub const OP_GET: &str = "get";

/// Helper operation that persists credentials
pub const OP_STORE: &str = "store";
