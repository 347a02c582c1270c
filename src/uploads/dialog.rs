use std::path::PathBuf;

use rfd::FileDialog;

use super::filter::PICKER_EXTENSIONS;

/// Open the native multi-select picker limited to supported image types.
///
/// Returns an empty list when the user cancels.
pub fn pick_files_dialog() -> Vec<PathBuf> {
    FileDialog::new()
        .set_title("Select portrait images")
        .add_filter("Images (JPEG, PNG, GIF)", PICKER_EXTENSIONS)
        .pick_files()
        .unwrap_or_default()
}
