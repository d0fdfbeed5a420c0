//! Error types for viewgen

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for viewgen operations
pub type ViewgenResult<T> = Result<T, ViewgenError>;

/// Error type for viewgen operations
#[derive(Error, Debug)]
pub enum ViewgenError {
    /// Reading a schema or template, or writing an output file, failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A display name does not end in any recognized suffix.
    ///
    /// Raised by the existing-artifact resolver; indicates the naming policy
    /// produced a name it cannot check, so the run must stop.
    #[error("name does not end in a recognized suffix: {name}")]
    UnrecognizedSuffix { name: String },

    /// No built-in template exists for a configured stem or extension
    #[error("no built-in template {name}; pass a template directory")]
    MissingTemplate { name: String },

    /// Mode argument was neither `long` nor `short`
    #[error("invalid mode '{0}': expected 'short' or 'long'")]
    InvalidMode(String),

    /// Configuration file could not be parsed or failed validation
    #[error("configuration error: {0}")]
    Config(String),
}

impl ViewgenError {
    /// Wrap an I/O error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ViewgenError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true for failures that stem from a broken naming policy rather
    /// than the environment
    pub fn is_precondition(&self) -> bool {
        matches!(self, ViewgenError::UnrecognizedSuffix { .. })
    }
}

impl From<toml::de::Error> for ViewgenError {
    fn from(err: toml::de::Error) -> Self {
        ViewgenError::Config(err.to_string())
    }
}
