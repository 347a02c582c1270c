use std::path::PathBuf;

use thiserror::Error;

use crate::app_dirs::AppDirError;

/// Errors raised while loading or saving `config.toml`.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The application directory could not be resolved or created.
    #[error("Unable to resolve settings directory: {0}")]
    AppDir(#[from] AppDirError),
    /// Creating the settings directory failed.
    #[error("Unable to create settings directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Reading the settings file failed.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Writing the settings file failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The settings file is not valid TOML for [`AppSettings`](super::AppSettings).
    #[error("Invalid settings at {path}: {source}")]
    ParseToml {
        /// Offending file.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
    /// Serializing settings to TOML failed.
    #[error("Failed to serialize settings for {path}: {source}")]
    SerializeToml {
        /// Destination file.
        path: PathBuf,
        /// TOML serialization error.
        source: toml::ser::Error,
    },
}
