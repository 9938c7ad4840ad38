//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Simulated delay before the initial dataset appears
pub const DEFAULT_LOAD_DELAY_MS: u64 = 1000;

/// Simulated delay for "upload and validate"
pub const DEFAULT_UPLOAD_DELAY_MS: u64 = 1500;

/// Lifetime of a toast notification
pub const DEFAULT_NOTIFICATION_TTL_MS: u64 = 3000;

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "gst-review.log";

/// Directory under $HOME holding config.yaml
pub const CONFIG_DIR_NAME: &str = ".gst-review";

pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Extensions offered by the file prompt (hint only, content is never read)
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["csv", "xls", "xlsx"];

/// Oldest toasts are dropped beyond this many
pub const MAX_NOTIFICATIONS: usize = 5;

pub const NO_ISSUES_DETECTED: &str = "No issues detected";

pub const MSG_UPLOAD_DONE: &str = "File uploaded and validation results loaded!";
pub const MSG_EXPORT_CLEANED: &str = "Cleaned file export initiated!";
pub const MSG_EXPORT_SUMMARY: &str = "Summary report (PDF) export initiated!";

/// Application name
pub const APP_NAME: &str = "GST Invoice Validator";
