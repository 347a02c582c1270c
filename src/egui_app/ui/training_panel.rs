use eframe::egui::{self, Button, Frame, Margin, ProgressBar, RichText, Ui};

use super::style;
use crate::egui_app::controller::EguiController;
use crate::session::MAX_PROGRESS;

pub(super) fn render(ui: &mut Ui, controller: &mut EguiController) {
    let palette = style::palette();
    let session = controller.session();

    if session.is_training() {
        ui.label(RichText::new("Training in progress...").color(palette.text_primary));
        ui.add_space(4.0);
        let fraction = f32::from(session.progress()) / f32::from(MAX_PROGRESS);
        ui.add(
            ProgressBar::new(fraction)
                .fill(palette.accent_blue)
                .show_percentage(),
        );
        ui.add_space(12.0);
    }

    if let Some(message) = session.error() {
        Frame::new()
            .fill(style::soften_color(palette.danger, 0.18))
            .stroke(egui::Stroke::new(1.0, palette.danger))
            .corner_radius(6.0)
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("Error").strong().color(palette.danger));
                ui.label(RichText::new(message).color(palette.text_primary));
            });
        ui.add_space(12.0);
    }

    let enabled = session.can_start();
    let label = controller.start_button_label();
    let button = Button::new(RichText::new(label).size(16.0).color(egui::Color32::WHITE))
        .fill(palette.accent_purple)
        .min_size(egui::vec2(ui.available_width(), 40.0));
    let hint = if controller.training_in_progress() {
        "Training is already running".to_string()
    } else {
        format!("Upload at least {} images to start", controller.session().min_images())
    };
    if ui
        .add_enabled(enabled, button)
        .on_disabled_hover_text(hint)
        .clicked()
    {
        controller.start_training();
    }
}
