//! Error types for the boundary around the engine.
//!
//! The computation itself never fails. Errors only come from reading and
//! writing project files and configuration.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoiError {
    /// File system related errors
    #[error("File system error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RoiError {
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Self::Io {
            message: format!("{}: {}", path.display(), source),
            path: Some(path.to_path_buf()),
            source: Some(source),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RoiError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            path: None,
            source: Some(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, RoiError>;
