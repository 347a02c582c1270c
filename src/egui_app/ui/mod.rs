//! egui renderer for the application UI.

mod cards;
/// "My Images" side panel.
pub mod gallery;
mod options_panel;
/// Thumbnail decoding and texture cache.
pub mod previews;
mod prompt_screen;
mod status_bar;
/// Palette, visuals and status tones.
pub mod style;
mod training_panel;
mod upload_panel;

use std::time::Duration;

use eframe::egui::{self, DroppedFile};
use tracing::debug;

use crate::egui_app::controller::EguiController;
use crate::egui_app::state::Screen;
use crate::uploads::Candidate;
use previews::PreviewCache;

/// Smallest window size the layout is designed for.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::Vec2::new(900.0, 640.0);
const TRAINING_REPAINT_INTERVAL: Duration = Duration::from_millis(16);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    previews: PreviewCache,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: EguiController) -> Self {
        Self {
            controller,
            previews: PreviewCache::default(),
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn consume_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() || self.controller.ui.screen != Screen::Training {
            return;
        }
        debug!("{} file(s) dropped", dropped.len());
        let candidates: Vec<Candidate> = dropped.into_iter().filter_map(dropped_candidate).collect();
        self.controller.add_candidates(candidates);
    }

    fn render_training_screen(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("my_images")
            .resizable(true)
            .default_width(320.0)
            .min_width(240.0)
            .max_width(480.0)
            .show(ctx, |ui| {
                gallery::render(ui, &mut self.controller, &mut self.previews);
            });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("training_page_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(640.0);
                        cards::header_card(ui);
                        options_panel::render(ui, &mut self.controller);
                        upload_panel::render(ui, &mut self.controller);
                        training_panel::render(ui, &mut self.controller);
                    });
                });
        });
    }
}

fn dropped_candidate(file: DroppedFile) -> Option<Candidate> {
    match (file.path, file.bytes) {
        (Some(path), _) => Some(Candidate::Path(path)),
        (None, Some(bytes)) => Some(Candidate::Bytes {
            name: file.name,
            bytes,
        }),
        (None, None) => None,
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_training();
        self.consume_dropped_files(ctx);
        self.previews.begin_frame();
        self.previews
            .retain(self.controller.images().iter().map(|asset| asset.id()));

        status_bar::render(ctx, &self.controller.ui.status);
        match self.controller.ui.screen.clone() {
            Screen::Training => self.render_training_screen(ctx),
            Screen::Prompt(completion) => {
                prompt_screen::render(ctx, &mut self.controller, &completion)
            }
        }

        if self.controller.training_in_progress() || self.previews.has_pending() {
            ctx.request_repaint_after(TRAINING_REPAINT_INTERVAL);
        }
    }
}
