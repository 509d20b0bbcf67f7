//! Constants used throughout the application.
//!
//! This module contains all constants used in the Pigment application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "pigment";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A year-in-pixels mood journal for the command line";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the Pigment data directory.
pub const ENV_VAR_PIGMENT_DIR: &str = "PIGMENT_DIR";
/// Environment variable for specifying the summary service base URL.
pub const ENV_VAR_PIGMENT_API_URL: &str = "PIGMENT_API_URL";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for journal data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = "Documents/pigment";
/// Default base URL for the summary service.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

// File System Parameters
/// File name of the journal blob inside the data directory.
pub const JOURNAL_FILE_NAME: &str = "journal.json";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";

// Mood Model
/// Lowest allowed mood intensity.
pub const MIN_INTENSITY: u8 = 1;
/// Highest allowed mood intensity.
pub const MAX_INTENSITY: u8 = 5;

// Analytics Thresholds
/// Longest streak must exceed this many days before a record-streak insight appears.
pub const RECORD_STREAK_DAYS: u32 = 7;
/// Mood-bearing entry count must exceed this before a milestone insight appears.
pub const MILESTONE_ENTRY_COUNT: usize = 30;
/// Number of associated moods kept per tag, ranked by co-occurrence.
pub const MAX_ASSOCIATED_MOODS: usize = 3;

// Logging Configuration
/// Default log filter applied when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "pigment=info";
