use eframe::egui::{self, Align2, Button, FontId, Rect, RichText, Sense, Ui, Vec2};

use super::previews::PreviewCache;
use super::style;
use crate::egui_app::controller::EguiController;
use crate::session::ImageAsset;

/// Slots always shown in the grid, filled or not.
pub const PRIMARY_SLOTS: usize = 10;
const COLUMNS: usize = 2;
const TILE_SPACING: f32 = 8.0;
const DELETE_BUTTON_SIZE: f32 = 22.0;

pub(super) fn render(ui: &mut Ui, controller: &mut EguiController, previews: &mut PreviewCache) {
    let palette = style::palette();
    let count = controller.images().len();
    let show_more = controller.ui.gallery.show_more;
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("My Images").heading().color(palette.text_primary));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(format!("{count}")).color(palette.text_muted));
        });
    });
    ui.add_space(8.0);

    let mut remove = None;
    let mut toggle = false;
    egui::ScrollArea::vertical()
        .id_salt("my_images_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let tile = tile_edge(ui.available_width());
            let images = controller.images();
            let slots = slot_count(images.len(), show_more);
            egui::Grid::new("my_images_grid")
                .num_columns(COLUMNS)
                .spacing(Vec2::splat(TILE_SPACING))
                .show(ui, |ui| {
                    for index in 0..slots {
                        match images.get(index) {
                            Some(asset) => {
                                if image_tile(ui, previews, asset, tile) {
                                    remove = Some(index);
                                }
                            }
                            None => placeholder_tile(ui, tile),
                        }
                        if (index + 1) % COLUMNS == 0 {
                            ui.end_row();
                        }
                    }
                });
            if let Some(label) = toggle_label(images.len(), show_more) {
                ui.add_space(8.0);
                if ui
                    .add_sized([ui.available_width(), 28.0], Button::new(label))
                    .clicked()
                {
                    toggle = true;
                }
            }
        });

    if toggle {
        controller.ui.gallery.show_more = !show_more;
    }
    if let Some(index) = remove {
        controller.remove_image(index);
    }
}

fn tile_edge(available_width: f32) -> f32 {
    ((available_width - TILE_SPACING * (COLUMNS as f32 - 1.0)) / COLUMNS as f32).max(48.0)
}

/// Number of grid cells to draw for `count` images.
fn slot_count(count: usize, show_more: bool) -> usize {
    if show_more {
        count.max(PRIMARY_SLOTS)
    } else {
        PRIMARY_SLOTS
    }
}

/// Label of the expand toggle, or `None` when everything already fits.
fn toggle_label(count: usize, show_more: bool) -> Option<String> {
    let hidden = count.checked_sub(PRIMARY_SLOTS).filter(|extra| *extra > 0)?;
    let verb = if show_more { "Hide" } else { "Show" };
    Some(format!("{verb} {hidden} more images"))
}

/// Draws one preview tile. Returns `true` when its delete button was clicked.
fn image_tile(ui: &mut Ui, previews: &mut PreviewCache, asset: &ImageAsset, edge: f32) -> bool {
    let palette = style::palette();
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(edge), Sense::hover());
    ui.painter().rect_filled(rect, 6.0, palette.bg_tertiary);
    match previews.texture(ui.ctx(), asset) {
        Some(texture) => {
            let image_rect = fit_rect(rect, texture.size_vec2());
            ui.painter().image(
                texture.id(),
                image_rect,
                Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        None => {
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                short_name(asset.file_name()),
                FontId::proportional(12.0),
                palette.text_muted,
            );
        }
    }
    delete_button(ui, asset, rect)
}

/// Remove control painted over the tile's corner.
///
/// Uses `interact` rather than adding a widget so the grid cursor stays put.
fn delete_button(ui: &mut Ui, asset: &ImageAsset, tile: Rect) -> bool {
    let palette = style::palette();
    let button_rect = Rect::from_min_size(
        tile.right_top() + egui::vec2(-DELETE_BUTTON_SIZE - 4.0, 4.0),
        Vec2::splat(DELETE_BUTTON_SIZE),
    );
    let id = ui.id().with(("delete_image", asset.id()));
    let response = ui
        .interact(button_rect, id, Sense::click())
        .on_hover_text("Remove image");
    let fill = if response.hovered() {
        palette.danger
    } else {
        style::soften_color(palette.danger, 0.75)
    };
    let painter = ui.painter();
    painter.circle_filled(button_rect.center(), DELETE_BUTTON_SIZE / 2.0, fill);
    painter.text(
        button_rect.center(),
        Align2::CENTER_CENTER,
        "x",
        FontId::proportional(13.0),
        palette.text_primary,
    );
    response.clicked()
}

fn placeholder_tile(ui: &mut Ui, edge: f32) {
    let palette = style::palette();
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(edge), Sense::hover());
    ui.painter().rect_filled(rect, 6.0, palette.placeholder);
}

/// Largest rect with the texture's aspect ratio centred inside `bounds`.
fn fit_rect(bounds: Rect, texture_size: Vec2) -> Rect {
    if texture_size.x <= 0.0 || texture_size.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.width() / texture_size.x).min(bounds.height() / texture_size.y);
    Rect::from_center_size(bounds.center(), texture_size * scale)
}

fn short_name(name: &str) -> String {
    const MAX_CHARS: usize = 14;
    if name.chars().count() <= MAX_CHARS {
        return name.to_string();
    }
    let head: String = name.chars().take(MAX_CHARS - 3).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Event, PointerButton, Pos2, RawInput};

    const TILE: f32 = 100.0;

    fn frame_input(events: Vec<Event>) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0))),
            events,
            ..Default::default()
        }
    }

    struct GridFrame {
        tile_min: Pos2,
        next_x: f32,
        clicked: bool,
    }

    /// Lays out one image tile followed by one plain cell.
    fn run_grid_frame(
        ctx: &egui::Context,
        previews: &mut PreviewCache,
        asset: &ImageAsset,
        events: Vec<Event>,
    ) -> GridFrame {
        let mut frame = GridFrame {
            tile_min: Pos2::ZERO,
            next_x: 0.0,
            clicked: false,
        };
        let _ = ctx.run(frame_input(events), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                egui::Grid::new("tile_grid")
                    .num_columns(COLUMNS)
                    .spacing(Vec2::splat(TILE_SPACING))
                    .show(ui, |ui| {
                        frame.tile_min = ui.cursor().min;
                        frame.clicked |= image_tile(ui, previews, asset, TILE);
                        let (rect, _) = ui.allocate_exact_size(Vec2::splat(TILE), Sense::hover());
                        frame.next_x = rect.min.x;
                        ui.end_row();
                    });
            });
        });
        frame
    }

    fn broken_asset() -> ImageAsset {
        ImageAsset::new("broken.png", vec![0u8; 4])
    }

    #[test]
    fn hovering_a_tile_keeps_the_grid_in_place() {
        let ctx = egui::Context::default();
        let mut previews = PreviewCache::default();
        let asset = broken_asset();

        let resting = run_grid_frame(&ctx, &mut previews, &asset, Vec::new());
        let inside = resting.tile_min + egui::vec2(30.0, 30.0);
        let hovered = run_grid_frame(&ctx, &mut previews, &asset, vec![Event::PointerMoved(inside)]);
        let after = run_grid_frame(&ctx, &mut previews, &asset, Vec::new());

        assert_eq!(resting.next_x, hovered.next_x);
        assert_eq!(resting.next_x, after.next_x);
        assert_eq!(resting.next_x, resting.tile_min.x + TILE + TILE_SPACING);
    }

    #[test]
    fn delete_button_reports_clicks() {
        let ctx = egui::Context::default();
        let mut previews = PreviewCache::default();
        let asset = broken_asset();
        let first = run_grid_frame(&ctx, &mut previews, &asset, Vec::new());
        assert!(!first.clicked);

        let pos = first.tile_min
            + egui::vec2(TILE - 4.0 - DELETE_BUTTON_SIZE / 2.0, 4.0 + DELETE_BUTTON_SIZE / 2.0);
        let press = |pressed| Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Default::default(),
        };

        let mut clicked = false;
        for events in [
            vec![Event::PointerMoved(pos)],
            vec![press(true)],
            vec![press(false)],
            Vec::new(),
        ] {
            clicked |= run_grid_frame(&ctx, &mut previews, &asset, events).clicked;
        }
        assert!(clicked);
    }

    #[test]
    fn grid_keeps_primary_slots_until_expanded() {
        assert_eq!(slot_count(0, false), PRIMARY_SLOTS);
        assert_eq!(slot_count(17, false), PRIMARY_SLOTS);
        assert_eq!(slot_count(17, true), 17);
        assert_eq!(slot_count(3, true), PRIMARY_SLOTS);
    }

    #[test]
    fn toggle_only_appears_with_overflow() {
        assert_eq!(toggle_label(10, false), None);
        assert_eq!(toggle_label(4, true), None);
        assert_eq!(toggle_label(13, false).as_deref(), Some("Show 3 more images"));
        assert_eq!(toggle_label(20, true).as_deref(), Some("Hide 10 more images"));
    }

    #[test]
    fn wide_textures_fit_by_width() {
        let bounds = Rect::from_min_size(egui::pos2(0.0, 0.0), Vec2::splat(100.0));
        let fitted = fit_rect(bounds, egui::vec2(200.0, 100.0));
        assert_eq!(fitted.size(), egui::vec2(100.0, 50.0));
        assert_eq!(fitted.center(), bounds.center());
    }

    #[test]
    fn long_names_are_shortened() {
        assert_eq!(short_name("me.png"), "me.png");
        assert_eq!(short_name("holiday_portrait_01.png"), "holiday_por...");
    }
}
