use eframe::egui::{self, RichText};

use super::style;
use crate::egui_app::state::StatusBarState;

const BADGE_RADIUS: f32 = 6.0;

pub(super) fn render(ctx: &egui::Context, status: &StatusBarState) {
    let palette = style::palette();
    egui::TopBottomPanel::bottom("status_bar")
        .exact_height(28.0)
        .frame(
            egui::Frame::new()
                .fill(palette.bg_secondary)
                .inner_margin(egui::Margin::symmetric(10, 4)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(BADGE_RADIUS * 2.0, BADGE_RADIUS * 2.0),
                    egui::Sense::hover(),
                );
                ui.painter()
                    .circle_filled(rect.center(), BADGE_RADIUS, status.badge_color);
                ui.label(RichText::new(&status.badge_label).strong());
                ui.separator();
                ui.label(RichText::new(&status.text).color(palette.text_muted));
            });
        });
}
