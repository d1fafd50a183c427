//! Error types for loading configuration

use std::path::PathBuf;

/// Errors that can occur while loading a config file and applying
/// environment overrides.
///
/// A malformed environment value is deliberately absent from this list: the
/// field keeps its previous value and loading carries on.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An indirection in the target could not be borrowed exclusively.
    ///
    /// Occurs when the walk reaches an `Rc<T>` or `Arc<T>` that has other
    /// owners, so its referent cannot be overwritten in place.
    #[error("Config target at '{path}' is not exclusively addressable")]
    InvalidTarget {
        /// Environment variable name derived for the offending position
        /// (empty at the root)
        path: String,
    },

    /// The config file could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        /// Path that was passed to the loader
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file name does not end in `.yml` or `.json`.
    #[error("Config file '{path}' must end in either .yml or .json")]
    UnsupportedFormat {
        /// Path that was passed to the loader
        path: PathBuf,
    },

    /// The file content is not valid for its format or does not match the
    /// target's structure.
    #[error("Failed to deserialize config file '{path}': {source}")]
    Deserialize {
        /// Path that was passed to the loader
        path: PathBuf,
        /// Error reported by the format's parser
        source: DeserializeError,
    },
}

/// Parser error for one of the supported file formats.
#[derive(Debug, thiserror::Error)]
pub enum DeserializeError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn invalid_target(path: impl Into<String>) -> Self {
        Self::InvalidTarget { path: path.into() }
    }
}
