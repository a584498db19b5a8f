use std::io::Write;
use std::path::Path;

use image::RgbImage;
use jpeg_encoder::{ColorType, Encoder};

use crate::error::{Error, Result};

/// Encoder quality used for JPEG outputs.
pub const JPEG_QUALITY: u8 = 95;

pub fn write_rgb_jpeg<W: Write>(writer: W, image: &RgbImage, dest: &Path) -> Result<()> {
    let too_large = || Error::Encode {
        path: dest.to_path_buf(),
        reason: format!(
            "{}x{} exceeds the JPEG limit of 65535 pixels per side",
            image.width(),
            image.height()
        ),
    };
    let cols = u16::try_from(image.width()).map_err(|_| too_large())?;
    let rows = u16::try_from(image.height()).map_err(|_| too_large())?;

    let encoder = Encoder::new(writer, JPEG_QUALITY);
    encoder
        .encode(image.as_raw(), cols, rows, ColorType::Rgb)
        .map_err(|e| Error::Encode {
            path: dest.to_path_buf(),
            reason: e.to_string(),
        })
}
