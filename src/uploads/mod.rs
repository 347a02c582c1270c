//! File-selection surface.
//!
//! Turns picker paths and dropped files into
//! [`ImageAsset`](crate::session::ImageAsset)s. Only JPEG, PNG
//! and GIF content within the size limit gets through; everything else is
//! reported back as a [`RejectedFile`] and never reaches the session.

mod dialog;
mod filter;
mod loader;

pub use dialog::pick_files_dialog;
pub use filter::{PICKER_EXTENSIONS, RejectReason, UploadFilter};
pub use loader::{Candidate, RejectedFile, SelectionBatch, load_candidates, load_paths};
