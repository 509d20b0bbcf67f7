//! Configuration management for the pigment application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. It supports configuring the
//! data directory (where the journal blob lives) and the summary service URL.
//!
//! # Environment Variables
//!
//! - `PIGMENT_DIR`: Path to the data directory (defaults to ~/Documents/pigment)
//! - `PIGMENT_API_URL`: Base URL of the summary service (defaults to http://127.0.0.1:8000)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_DATA_SUBDIR, ENV_VAR_HOME, ENV_VAR_PIGMENT_API_URL,
    ENV_VAR_PIGMENT_DIR,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the pigment application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use pigment::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
///     api_url: "http://127.0.0.1:8000".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Directory where the journal blob is stored.
    ///
    /// Loaded from `PIGMENT_DIR` with a fallback to ~/Documents/pigment.
    pub data_dir: PathBuf,

    /// Base URL of the summary service.
    ///
    /// Loaded from `PIGMENT_API_URL` with a fallback to the local default.
    pub api_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The data path can reveal the user's home layout; keep it out of logs
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory path is expanded with `shellexpand` to handle `~`
    /// and environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails
    /// - The resulting data directory path is empty
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pigment::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Summary service at {}", config.api_url),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_PIGMENT_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Data directory path is empty".to_string(),
            ));
        }

        let api_url = env::var(ENV_VAR_PIGMENT_API_URL)
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Config { data_dir, api_url })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path is empty or relative
    /// - The summary service URL is empty or has no http(s) scheme
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Data directory path is empty".to_string(),
            ));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        if self.api_url.is_empty() {
            return Err(AppError::Config(
                "Summary service URL is empty".to_string(),
            ));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "Summary service URL must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }

        Ok(())
    }
}
