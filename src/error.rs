use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for changelog-extract operations
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot access '{}'", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration file: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in changelog-extract
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Create a file access error for the given path
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ChangelogError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
