//! Error types and handling for the bulletin generator

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for the bulletin generator.
///
/// Every variant is terminal for a run: nothing is retried and no partial
/// bulletin is ever written.
#[derive(Error, Debug)]
pub enum BulletinError {
    /// The forecast file does not exist
    #[error("{} not found", path.display())]
    InputNotFound { path: PathBuf },

    /// The forecast file exists but could not be read
    #[error("Error reading {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The forecast file is not valid JSON
    #[error("Error parsing {}: {source}", path.display())]
    InputMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A required key is missing or an array is too short
    #[error("Error extracting weather data: {message}")]
    DataIncomplete { message: String },

    /// The bulletin could not be written
    #[error("Error writing bulletin to {}: {source}", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl BulletinError {
    /// Create a new missing-input error
    pub fn input_not_found<P: AsRef<Path>>(path: P) -> Self {
        Self::InputNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a new incomplete-data error
    pub fn data_incomplete<S: Into<String>>(message: S) -> Self {
        Self::DataIncomplete {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly hint on how to fix the problem
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            BulletinError::InputNotFound { path } => {
                format!("Place the forecast file at {} and run again.", path.display())
            }
            BulletinError::InputUnreadable { .. } => {
                "The forecast file could not be read. Please check file permissions.".to_string()
            }
            BulletinError::InputMalformed { .. } => {
                "The forecast file is not valid JSON. Download a fresh copy.".to_string()
            }
            BulletinError::DataIncomplete { .. } => {
                "The forecast needs a `daily` object with at least two days of data.".to_string()
            }
            BulletinError::OutputWriteFailed { .. } => {
                "File operation failed. Please check file permissions and free disk space."
                    .to_string()
            }
            BulletinError::Config { message } => format!("Check bollettino.toml: {message}"),
        }
    }
}

impl From<anyhow::Error> for BulletinError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<BulletinError>() {
            Ok(err) => err,
            Err(err) => BulletinError::config(format!("{err:#}")),
        }
    }
}
