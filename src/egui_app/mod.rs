//! egui front end for the upload-and-train page.

/// Bridges the session core, uploads and training runs to the UI.
pub mod controller;
/// Plain UI state consumed by the renderer.
pub mod state;
/// egui rendering.
pub mod ui;
