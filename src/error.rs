//! Structured error types for config loading.

use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ResourceOpenFailed,
}

/// Error returned by [`crate::ConfigLoader`].
///
/// The underlying [`io::Error`] is kept as the error source, so callers can
/// match on its kind instead of the rendered message.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("opening config file: {source}")]
    ResourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Wrap a failed open of `path`.
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ResourceOpen {
            path: path.into(),
            source,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ResourceOpen { .. } => ErrorCode::ResourceOpenFailed,
        }
    }

    /// Path the loader was asked to open.
    pub fn path(&self) -> &Path {
        match self {
            Self::ResourceOpen { path, .. } => path,
        }
    }

    /// The platform error that caused the failure.
    pub fn cause(&self) -> &io::Error {
        match self {
            Self::ResourceOpen { source, .. } => source,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.cause().kind()
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == io::ErrorKind::NotFound
    }

    /// Unwrap into the underlying platform error.
    pub fn into_cause(self) -> io::Error {
        match self {
            Self::ResourceOpen { source, .. } => source,
        }
    }
}

/// Serializable view of a [`ConfigError`] for machine-readable output.
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
    /// Lossy rendering of the path: non-UTF-8 bytes become U+FFFD.
    pub path: String,
    pub cause: String,
    /// Debug name of the underlying `io::ErrorKind` (e.g. `NotFound`).
    pub kind: String,
}

impl From<&ConfigError> for ErrorReport {
    fn from(err: &ConfigError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
            path: err.path().display().to_string(),
            cause: err.cause().to_string(),
            kind: format!("{:?}", err.kind()),
        }
    }
}

/// Result type for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
