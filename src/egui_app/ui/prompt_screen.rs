use eframe::egui::{self, RichText};

use super::cards::card;
use super::style;
use crate::egui_app::controller::EguiController;
use crate::session::TrainingCompletion;

/// Landing page shown once a run has completed.
pub(super) fn render(
    ctx: &egui::Context,
    controller: &mut EguiController,
    completion: &TrainingCompletion,
) {
    let palette = style::palette();
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.set_max_width(640.0);
            ui.add_space(24.0);
            card(
                ui,
                "Your model is ready",
                Some("Describe the profile image you want to generate"),
                |ui| {
                    ui.label(
                        RichText::new(format!(
                            "Run {} trained on {} images for {} photos ({})",
                            completion.run_id,
                            completion.image_count,
                            completion.options.purpose,
                            completion.options.gender,
                        ))
                        .color(palette.text_muted),
                    );
                },
            );
            if ui.button("Back to training").clicked() {
                controller.return_to_training();
            }
        });
    });
}
