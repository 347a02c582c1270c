//! Persisted application settings (`config.toml`).
//!
//! Only tunables live here. The upload session itself is never saved.

mod defaults;
mod errors;
mod io;
mod types;

pub use errors::SettingsError;
pub use io::{CONFIG_FILE_NAME, config_path, load_from_path, load_or_default, save, save_to_path};
pub use types::{AppSettings, TrainingSettings, UploadSettings};
