use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur when loading a TOML configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration")]
    Parse(#[from] toml::de::Error),
}

/// Parses a configuration record from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the text is not valid TOML or does not
/// match the shape of `T`.
pub fn parse_toml<T: DeserializeOwned>(text: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Reads and parses a configuration record from a TOML file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, or
/// [`ConfigError::Parse`] if its contents are invalid.
pub fn load_toml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_toml(&text)
}
