pub(super) const DEFAULT_MAX_IMAGES: usize = 20;
pub(super) const DEFAULT_MIN_IMAGES: usize = 10;
/// Highest `max_images` a config file may ask for.
pub(super) const MAX_IMAGES_CEILING: usize = 200;
pub(super) const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
pub(super) const DEFAULT_STEP_DELAY_MS: u64 = 100;
pub(super) const DEFAULT_CREDIT_COST: u32 = 350;

pub(super) fn default_max_images() -> usize {
    DEFAULT_MAX_IMAGES
}

pub(super) fn default_min_images() -> usize {
    DEFAULT_MIN_IMAGES
}

pub(super) fn default_max_file_size_bytes() -> u64 {
    DEFAULT_MAX_FILE_SIZE_BYTES
}

pub(super) fn default_step_delay_ms() -> u64 {
    DEFAULT_STEP_DELAY_MS
}

pub(super) fn default_credit_cost() -> u32 {
    DEFAULT_CREDIT_COST
}
