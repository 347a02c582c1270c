//! Library exports for reuse in the binary and integration tests.
/// Application directory helpers.
pub mod app_dirs;
/// Shared egui UI modules.
pub mod egui_app;
/// Logging setup.
pub mod logging;
/// Upload collection, options and training state.
pub mod session;
/// Persisted configuration.
pub mod settings;
/// Background training runs.
pub mod trainer;
/// File selection, filtering and loading.
pub mod uploads;
