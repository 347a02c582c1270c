use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults::{
    default_credit_cost, default_max_file_size_bytes, default_max_images, default_min_images,
    default_step_delay_ms, MAX_IMAGES_CEILING,
};

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Upload limits.
    #[serde(default)]
    pub uploads: UploadSettings,
    /// Simulated training pacing and labels.
    #[serde(default)]
    pub training: TrainingSettings,
}

/// Upload limits applied by the collector and the file-selection surface.
///
/// Config keys: `max_images`, `min_images`, `max_file_size_bytes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSettings {
    /// Capacity of the image collection; extra files are dropped.
    #[serde(default = "default_max_images")]
    pub max_images: usize,
    /// Images required before training can start.
    #[serde(default = "default_min_images")]
    pub min_images: usize,
    /// Per-file size limit in bytes.
    #[serde(default = "default_max_file_size_bytes")]
    pub max_file_size_bytes: u64,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_images: default_max_images(),
            min_images: default_min_images(),
            max_file_size_bytes: default_max_file_size_bytes(),
        }
    }
}

/// Config keys: `step_delay_ms`, `credit_cost`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSettings {
    /// Delay before each progress step of the simulated run.
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,
    /// Credit cost shown on the start button. Display only.
    #[serde(default = "default_credit_cost")]
    pub credit_cost: u32,
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self {
            step_delay_ms: default_step_delay_ms(),
            credit_cost: default_credit_cost(),
        }
    }
}

impl TrainingSettings {
    /// Step delay as a [`Duration`].
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

impl AppSettings {
    /// Clamp values into ranges the session can work with.
    pub fn normalized(mut self) -> Self {
        self.uploads.min_images = self.uploads.min_images.clamp(1, MAX_IMAGES_CEILING);
        self.uploads.max_images = self
            .uploads
            .max_images
            .clamp(self.uploads.min_images, MAX_IMAGES_CEILING);
        self.uploads.max_file_size_bytes = self.uploads.max_file_size_bytes.max(1);
        self
    }
}
