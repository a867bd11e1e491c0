//! Error types for the CCI column-metadata mirror.

use thiserror::Error;

/// Result type alias for mirror operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for CCI column-metadata mirror operations.
///
/// Both variants are non-retryable configuration/environment conditions
/// (wrong or unsupported native client library); callers should surface
/// them as setup-time failures, not per-row data errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested client-library version is not one of the known
    /// column-info shapes.
    #[error("Unsupported CCI client version: {version}")]
    UnsupportedVersion { version: String },

    /// The native column-info handle is null.
    #[error("Invalid native column-info handle (null pointer)")]
    InvalidNativeHandle,
}

impl Error {
    /// Create an unsupported-version error.
    pub fn unsupported_version(version: impl Into<String>) -> Self {
        Self::UnsupportedVersion {
            version: version.into(),
        }
    }
}
