use eframe::egui::{self, Align2, CursorIcon, FontId, RichText, Sense, Stroke, StrokeKind, Ui};

use super::cards::card;
use super::style;
use crate::egui_app::controller::{EguiController, format_megabytes};

const DROP_ZONE_HEIGHT: f32 = 140.0;

pub(super) fn render(ui: &mut Ui, controller: &mut EguiController) {
    let min_images = controller.session().min_images();
    let capacity = controller.session().images().capacity();
    let description = format!(
        "Upload at least {min_images} images to train the model. {capacity} images will provide better results."
    );
    card(ui, "Upload Images", Some(description.as_str()), |ui| {
        if drop_zone(ui, controller).clicked() {
            controller.add_files_via_dialog();
        }
        let palette = style::palette();
        ui.add_space(8.0);
        ui.label(
            RichText::new(format!(
                "{} images uploaded",
                controller.session().image_count()
            ))
            .color(palette.text_muted),
        );
        ui.label(
            RichText::new(format!(
                "Min {min_images} images ({capacity} images is recommended)"
            ))
            .small()
            .color(palette.text_muted),
        );
    });
}

fn drop_zone(ui: &mut Ui, controller: &EguiController) -> egui::Response {
    let palette = style::palette();
    let hovering_files = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
    let size = egui::vec2(ui.available_width(), DROP_ZONE_HEIGHT);
    let response = ui
        .allocate_response(size, Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand);
    let rect = response.rect;

    let (fill, stroke_color) = if hovering_files {
        (palette.drop_highlight, palette.accent_blue)
    } else if response.hovered() {
        (palette.bg_tertiary, palette.text_muted)
    } else {
        (palette.bg_secondary, palette.panel_outline)
    };
    let painter = ui.painter();
    painter.rect_filled(rect, 6.0, fill);
    painter.rect_stroke(rect, 6.0, Stroke::new(2.0, stroke_color), StrokeKind::Inside);

    let headline = if hovering_files {
        "Drop the images here ..."
    } else {
        "Drag & drop images here, or click to select files"
    };
    painter.text(
        rect.center() - egui::vec2(0.0, 12.0),
        Align2::CENTER_CENTER,
        headline,
        FontId::proportional(16.0),
        palette.text_primary,
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 14.0),
        Align2::CENTER_CENTER,
        format!(
            "(Max {} per image, JPEG, PNG, or GIF)",
            format_megabytes(controller.settings().uploads.max_file_size_bytes)
        ),
        FontId::proportional(13.0),
        palette.text_muted,
    );
    response
}
