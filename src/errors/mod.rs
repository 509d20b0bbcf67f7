//! Error handling utilities for the pigment application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents specific error cases that can occur when loading or saving the journal.
///
/// This enum provides detailed, contextual error information for different failure
/// modes of the on-disk journal blob. Each variant captures relevant information
/// such as the affected path and the underlying IO or parse error.
///
/// # Examples
///
/// Creating a corrupt-journal error:
///
/// ```
/// use pigment::errors::StorageError;
/// use std::path::PathBuf;
///
/// let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
/// let error = StorageError::Corrupt {
///     path: PathBuf::from("/data/journal.json"),
///     source: json_err,
/// };
///
/// assert!(format!("{}", error).contains("could not be parsed"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// Error when the journal file exists but cannot be read.
    #[error("Failed to read journal file {path}: {source}. Please check file permissions and ensure the data directory is accessible.")]
    ReadFailed {
        /// The path to the journal file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the journal file contains invalid JSON.
    #[error("Journal file {path} could not be parsed: {source}. The file may be corrupt; restore it from a backup or move it aside to start fresh.")]
    Corrupt {
        /// The path to the journal file
        path: PathBuf,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Error when writing the journal file fails.
    #[error("Failed to write journal file {path}: {source}. Please check disk space and file permissions.")]
    WriteFailed {
        /// The path to the journal file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when serializing the journal for writing fails.
    #[error("Failed to serialize journal: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Error when the journal file is locked by another process.
    #[error("Journal file is currently in use by another process: {path}. Please wait for the other pigment instance to finish.")]
    FileBusy {
        /// The path to the file that is locked
        path: PathBuf,
    },
}

/// Represents specific error cases that can occur when talking to the summary service.
///
/// This enum provides detailed, contextual error information for different failure
/// modes when calling the remote summarization API. Summary failures are
/// user-retryable and never affect journal data.
///
/// # Examples
///
/// ```
/// use pigment::errors::ApiError;
///
/// let error = ApiError::InvalidResponse("missing summary field".to_string());
/// assert!(format!("{}", error).contains("missing summary field"));
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Summary service is not reachable.
    #[error("Summary service error: {0}. Is the service running? Check PIGMENT_API_URL and try again.")]
    Offline(#[source] reqwest::Error),

    /// Summary service rejected the request or returned a failure status.
    #[error("Summary service returned HTTP {status}: {body}")]
    Http {
        /// The HTTP status code returned by the service
        status: u16,
        /// The response body, if any
        body: String,
    },

    /// Invalid or unexpected response payload from the summary service.
    #[error("Invalid response from summary service: {0}")]
    InvalidResponse(String),
}

/// Represents all possible errors that can occur in the pigment application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use pigment::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use pigment::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in journal entry logic (e.g., invalid date formats, unknown moods).
    #[error("Journal error: {0}")]
    Journal(String),

    /// Errors related to journal persistence.
    ///
    /// This variant uses a dedicated StorageError type to provide detailed
    /// information about what went wrong while loading or saving the journal.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Errors related to the remote summary service.
    ///
    /// This variant uses a dedicated ApiError type to provide detailed
    /// information about what went wrong with summary service interactions.
    #[error("Summary service error: {0}")]
    Api(#[from] ApiError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the application to represent operations
/// that may fail with an `AppError`.
///
/// # Examples
///
/// ```
/// use pigment::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     // Operation that could fail
///     if false {
///         return Err(AppError::Journal("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
