use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::{AppSettings, SettingsError};
use crate::app_dirs;

/// File name of the settings file inside the application root.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Path of `config.toml`, creating the application root if needed.
pub fn config_path() -> Result<PathBuf, SettingsError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings from the application root, or defaults if the file is absent.
pub fn load_or_default() -> Result<AppSettings, SettingsError> {
    load_from_path(&config_path()?)
}

/// Load settings from `path`, or defaults if it does not exist.
pub fn load_from_path(path: &Path) -> Result<AppSettings, SettingsError> {
    if !path.exists() {
        debug!("No settings at {}; using defaults", path.display());
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = toml::from_str::<AppSettings>(&text)
        .map_err(|source| SettingsError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?
        .normalized();
    info!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Write settings to the application root.
pub fn save(settings: &AppSettings) -> Result<(), SettingsError> {
    save_to_path(settings, &config_path()?)
}

/// Write settings to `path` atomically, creating parent directories.
pub fn save_to_path(settings: &AppSettings, path: &Path) -> Result<(), SettingsError> {
    let data = toml::to_string_pretty(settings).map_err(|source| SettingsError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir).map_err(|source| SettingsError::CreateDir {
        path: dir.clone(),
        source,
    })?;
    let write_error = |source: std::io::Error| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(&dir).map_err(write_error)?;
    tmp.write_all(data.as_bytes()).map_err(write_error)?;
    tmp.as_file().sync_all().map_err(write_error)?;
    tmp.persist(path).map_err(|err| write_error(err.error))?;
    Ok(())
}
