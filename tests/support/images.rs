use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};

/// Write a small solid-colour image in `format` and return its path.
pub fn write_test_image(dir: &Path, name: &str, format: ImageFormat) -> PathBuf {
    let path = dir.join(name);
    let shade = (name.len() * 13 % 255) as u8;
    let image = RgbImage::from_pixel(16, 12, Rgb([shade, 90, 200]));
    match format {
        ImageFormat::Gif => image::DynamicImage::ImageRgb8(image)
            .to_rgba8()
            .save_with_format(&path, format)
            .expect("write gif"),
        _ => image.save_with_format(&path, format).expect("write image"),
    }
    path
}

/// Write `count` PNG files named `photo_NN.png`.
pub fn write_png_series(dir: &Path, count: usize) -> Vec<PathBuf> {
    (0..count)
        .map(|idx| write_test_image(dir, &format!("photo_{idx:02}.png"), ImageFormat::Png))
        .collect()
}
