use std::io::{Seek, Write};
use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::error::{Error, Result};
use crate::types::OutputFormat;

/// Lossless formats handled by the `image` crate encoders.
pub fn write_rgb_raster<W: Write + Seek>(
    writer: &mut W,
    image: &RgbImage,
    format: OutputFormat,
    dest: &Path,
) -> Result<()> {
    let image_format = match format {
        OutputFormat::PNG => ImageFormat::Png,
        OutputFormat::BMP => ImageFormat::Bmp,
        OutputFormat::TIFF => ImageFormat::Tiff,
        OutputFormat::JPEG => ImageFormat::Jpeg,
    };
    image
        .write_to(writer, image_format)
        .map_err(|e| Error::Encode {
            path: dest.to_path_buf(),
            reason: e.to_string(),
        })
}
