use std::collections::{HashMap, HashSet};

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use tracing::warn;
use uuid::Uuid;

use crate::session::ImageAsset;

/// Longest edge of a decoded preview, in pixels.
pub const MAX_PREVIEW_DIMENSION: u32 = 256;
/// Decodes allowed per frame so a large drop does not stall the UI.
const DECODES_PER_FRAME: usize = 2;

enum PreviewSlot {
    Ready(TextureHandle),
    Failed,
}

/// Preview textures keyed by asset id so they survive index shifts.
#[derive(Default)]
pub struct PreviewCache {
    slots: HashMap<Uuid, PreviewSlot>,
    decodes_this_frame: usize,
    pending: bool,
}

impl PreviewCache {
    /// Reset the per-frame decode budget.
    pub fn begin_frame(&mut self) {
        self.decodes_this_frame = 0;
        self.pending = false;
    }

    /// Drop textures of assets that are no longer in the collection.
    pub fn retain(&mut self, live: impl IntoIterator<Item = Uuid>) {
        let live: HashSet<Uuid> = live.into_iter().collect();
        self.slots.retain(|id, _| live.contains(id));
    }

    /// Whether some preview was deferred to a later frame.
    pub fn has_pending(&self) -> bool {
        self.pending
    }

    /// Texture for `asset`, decoding it if the frame budget allows.
    ///
    /// Returns `None` while deferred and for images that failed to decode.
    pub fn texture(&mut self, ctx: &egui::Context, asset: &ImageAsset) -> Option<&TextureHandle> {
        if !self.slots.contains_key(&asset.id()) {
            if self.decodes_this_frame >= DECODES_PER_FRAME {
                self.pending = true;
                return None;
            }
            self.decodes_this_frame += 1;
            let slot = match decode_preview(asset.bytes()) {
                Ok(image) => PreviewSlot::Ready(ctx.load_texture(
                    format!("preview-{}", asset.id()),
                    image,
                    TextureOptions::LINEAR,
                )),
                Err(err) => {
                    warn!("Preview for {} failed: {err}", asset.file_name());
                    PreviewSlot::Failed
                }
            };
            self.slots.insert(asset.id(), slot);
        }
        match self.slots.get(&asset.id()) {
            Some(PreviewSlot::Ready(texture)) => Some(texture),
            _ => None,
        }
    }
}

/// Decode image bytes into a downscaled RGBA preview.
pub fn decode_preview(bytes: &[u8]) -> Result<ColorImage, image::ImageError> {
    let decoded = image::load_from_memory(bytes)?;
    let fits = decoded.width() <= MAX_PREVIEW_DIMENSION && decoded.height() <= MAX_PREVIEW_DIMENSION;
    let thumbnail = if fits {
        decoded.to_rgba8()
    } else {
        decoded
            .thumbnail(MAX_PREVIEW_DIMENSION, MAX_PREVIEW_DIMENSION)
            .to_rgba8()
    };
    let size = [thumbnail.width() as usize, thumbnail.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, thumbnail.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        RgbImage::from_pixel(width, height, image::Rgb([10, 20, 30]))
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn large_images_are_downscaled_keeping_aspect() {
        let preview = decode_preview(&png_bytes(1024, 512)).unwrap();
        assert_eq!(preview.size, [256, 128]);
    }

    #[test]
    fn small_images_keep_their_size() {
        let preview = decode_preview(&png_bytes(40, 30)).unwrap();
        assert_eq!(preview.size, [40, 30]);
    }

    #[test]
    fn corrupt_bytes_fail_to_decode() {
        assert!(decode_preview(b"\x89PNG\r\n\x1a\ntruncated").is_err());
    }
}
