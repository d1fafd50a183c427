//! Config file loading

use crate::env::{EnvSource, ProcessEnv};
use crate::error::{ConfigError, DeserializeError};
use crate::node::Overlay;
use crate::overlay::overlay_env;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Supported config file formats, chosen by file name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl Format {
    /// Pick the format for `path` from its suffix.
    ///
    /// Matching is exact: `.yaml`, `.YML` and extensionless names are not
    /// recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.as_os_str().as_encoded_bytes();
        if name.ends_with(b".yml") {
            Some(Self::Yaml)
        } else if name.ends_with(b".json") {
            Some(Self::Json)
        } else {
            None
        }
    }

    /// Deserialize `raw` as this format.
    pub fn parse<T: DeserializeOwned>(self, raw: &[u8]) -> Result<T, DeserializeError> {
        match self {
            Self::Yaml => Ok(serde_yaml::from_slice(raw)?),
            Self::Json => Ok(serde_json::from_slice(raw)?),
        }
    }
}

/// Load `path` into `target`, then override fields from the process
/// environment.
///
/// The parsed file replaces `*target` wholesale, so fields the file leaves
/// out need `#[serde(default)]`. If reading or parsing fails, `target` is
/// not modified.
///
/// # Errors
///
/// - [`ConfigError::FileRead`] if the file cannot be read
/// - [`ConfigError::UnsupportedFormat`] if the name ends in neither `.yml` nor `.json`
/// - [`ConfigError::Deserialize`] if the content does not match `T`
/// - [`ConfigError::InvalidTarget`] if an indirection inside `target` is shared
pub fn get_config<T, P>(target: &mut T, path: P) -> Result<(), ConfigError>
where
    T: DeserializeOwned + Overlay,
    P: AsRef<Path>,
{
    get_config_with(target, path, &ProcessEnv)
}

/// Like [`get_config`], reading variables from `env` instead of the process
/// environment.
pub fn get_config_with<T, P>(target: &mut T, path: P, env: &dyn EnvSource) -> Result<(), ConfigError>
where
    T: DeserializeOwned + Overlay,
    P: AsRef<Path>,
{
    *target = read_file(path.as_ref())?;
    overlay_env(target, env)
}

/// Load `path` into a new value, then override fields from the process
/// environment.
pub fn load<T, P>(path: P) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Overlay,
    P: AsRef<Path>,
{
    load_with(path, &ProcessEnv)
}

/// Like [`load`], reading variables from `env`.
pub fn load_with<T, P>(path: P, env: &dyn EnvSource) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Overlay,
    P: AsRef<Path>,
{
    let mut value: T = read_file(path.as_ref())?;
    overlay_env(&mut value, env)?;
    Ok(value)
}

fn read_file<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let raw = fs::read(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let format = Format::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let value = format.parse(&raw).map_err(|e| ConfigError::Deserialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), ?format, "config file loaded");
    Ok(value)
}
