//! UI state owned by the controller and read by the renderer.

use egui::Color32;

use crate::egui_app::ui::style::{self, StatusTone};
use crate::session::TrainingCompletion;

/// Top-level UI model.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub screen: Screen,
    pub gallery: GalleryState,
}

impl UiState {
    /// Fresh state for a session that needs `min_images` before training.
    pub fn new(min_images: usize) -> Self {
        Self {
            status: StatusBarState::idle(min_images),
            screen: Screen::Training,
            gallery: GalleryState::default(),
        }
    }
}

/// Which page is shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Options, uploads and the training trigger.
    #[default]
    Training,
    /// Shown after a run completes.
    Prompt(TrainingCompletion),
}

/// Status badge and text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub tone: StatusTone,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle(min_images: usize) -> Self {
        Self::new(
            format!("Upload at least {min_images} images to get started"),
            StatusTone::Idle,
        )
    }

    pub fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        let (label, color) = style::status_badge(tone);
        Self {
            text: text.into(),
            tone,
            badge_label: label.to_string(),
            badge_color: color,
        }
    }
}

/// "My Images" panel toggles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    /// Whether images past the first page of slots are expanded.
    pub show_more: bool,
}
