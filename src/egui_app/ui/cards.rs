use eframe::egui::{self, Frame, Margin, RichText, Ui};

use super::style;

/// Bordered card with a title and an optional muted description.
pub(super) fn card<R>(
    ui: &mut Ui,
    title: &str,
    description: Option<&str>,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> R {
    let palette = style::palette();
    let inner = Frame::new()
        .fill(style::card_fill())
        .stroke(style::card_border())
        .corner_radius(8.0)
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                ui.label(RichText::new(title).heading().color(palette.text_primary));
                if let Some(description) = description {
                    ui.label(RichText::new(description).color(palette.text_muted));
                }
                ui.add_space(10.0);
                add_contents(ui)
            })
            .inner
        })
        .inner;
    ui.add_space(12.0);
    inner
}

pub(super) fn header_card(ui: &mut Ui) {
    card(
        ui,
        "Model Training",
        Some("Train your AI model to generate personalized profile images"),
        |_ui| {},
    );
}
