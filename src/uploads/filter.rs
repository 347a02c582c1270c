use image::ImageFormat;

use crate::settings::UploadSettings;

/// Extensions offered by the file picker.
pub const PICKER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Type and size limits applied before files reach the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadFilter {
    pub max_file_size_bytes: u64,
}

impl Default for UploadFilter {
    fn default() -> Self {
        Self::from(&UploadSettings::default())
    }
}

impl From<&UploadSettings> for UploadFilter {
    fn from(settings: &UploadSettings) -> Self {
        Self {
            max_file_size_bytes: settings.max_file_size_bytes,
        }
    }
}

/// Why a candidate file was discarded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("file is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },
    #[error("not a JPEG, PNG or GIF image")]
    UnsupportedType,
    #[error("file is empty")]
    Empty,
    #[error("unreadable: {0}")]
    Unreadable(String),
}

impl UploadFilter {
    /// Reject by size alone, before the content is read.
    pub fn check_size(&self, size: u64) -> Result<(), RejectReason> {
        if size > self.max_file_size_bytes {
            return Err(RejectReason::TooLarge {
                size,
                limit: self.max_file_size_bytes,
            });
        }
        Ok(())
    }

    /// Check size and sniff the content type.
    pub fn check(&self, bytes: &[u8]) -> Result<ImageFormat, RejectReason> {
        if bytes.is_empty() {
            return Err(RejectReason::Empty);
        }
        self.check_size(bytes.len() as u64)?;
        match image::guess_format(bytes) {
            Ok(format @ (ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Gif)) => Ok(format),
            _ => Err(RejectReason::UnsupportedType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10, b'J', b'F', b'I', b'F'];
    const GIF_MAGIC: &[u8] = b"GIF89a\x01\0\x01\0";

    #[test]
    fn accepts_supported_formats() {
        let filter = UploadFilter::default();
        assert_eq!(filter.check(PNG_MAGIC), Ok(ImageFormat::Png));
        assert_eq!(filter.check(JPEG_MAGIC), Ok(ImageFormat::Jpeg));
        assert_eq!(filter.check(GIF_MAGIC), Ok(ImageFormat::Gif));
    }

    #[test]
    fn rejects_other_formats_and_garbage() {
        let filter = UploadFilter::default();
        assert_eq!(
            filter.check(b"BM\0\0\0\0\0\0\0\0\0\0\0\0"),
            Err(RejectReason::UnsupportedType)
        );
        assert_eq!(
            filter.check(b"definitely not an image"),
            Err(RejectReason::UnsupportedType)
        );
        assert_eq!(filter.check(&[]), Err(RejectReason::Empty));
    }

    #[test]
    fn size_limit_is_inclusive() {
        let filter = UploadFilter {
            max_file_size_bytes: 5 * 1024 * 1024,
        };
        assert!(filter.check_size(5 * 1024 * 1024).is_ok());
        assert_eq!(
            filter.check_size(5 * 1024 * 1024 + 1),
            Err(RejectReason::TooLarge {
                size: 5 * 1024 * 1024 + 1,
                limit: 5 * 1024 * 1024
            })
        );
    }

    #[test]
    fn oversized_png_is_rejected_before_sniffing() {
        let filter = UploadFilter {
            max_file_size_bytes: 8,
        };
        assert!(matches!(
            filter.check(PNG_MAGIC),
            Err(RejectReason::TooLarge { .. })
        ));
    }
}
