#![deny(missing_docs)]

//! Entry point for the egui-based portrait trainer UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use portrait_trainer::egui_app::controller::EguiController;
use portrait_trainer::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use portrait_trainer::logging;
use portrait_trainer::settings::{self, AppSettings};
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = load_settings();
    info!(
        "Starting with limits {}..={} images, {} bytes per file",
        settings.uploads.min_images,
        settings.uploads.max_images,
        settings.uploads.max_file_size_bytes
    );

    let viewport = egui::ViewportBuilder::default()
        .with_title("Portrait Trainer")
        .with_inner_size([1180.0, 820.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_drag_and_drop(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Portrait Trainer",
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new(EguiController::new(settings))))),
    )?;
    Ok(())
}

/// Read `config.toml`, writing the defaults on first launch.
fn load_settings() -> AppSettings {
    let first_launch = settings::config_path().is_ok_and(|path| !path.exists());
    let loaded = match settings::load_or_default() {
        Ok(loaded) => loaded,
        Err(err) => {
            warn!("Falling back to default settings: {err}");
            return AppSettings::default();
        }
    };
    if first_launch && let Err(err) = settings::save(&loaded) {
        warn!("Could not write default settings: {err}");
    }
    loaded
}
