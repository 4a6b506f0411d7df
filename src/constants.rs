//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default REST collection the users are read from and written to
pub const DEFAULT_API_URL: &str = "http://localhost:3000/users";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How long a toast stays on screen
pub const DEFAULT_TOAST_SECS: u64 = 5;

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "roster.log";

/// Maximum number of toasts kept on screen at once
pub const MAX_TOASTS: usize = 5;

/// Application name
pub const APP_NAME: &str = "roster";

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "roster";

/// Config file name inside `CONFIG_DIR_NAME`
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Toast messages
pub const MSG_USER_ADDED: &str = "User added";
pub const MSG_USER_UPDATED: &str = "User updated";
pub const MSG_USER_DELETED: &str = "User deleted";
