//! Input validation and color decoding.
use std::path::Path;

use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader, RgbImage};
use tracing::debug;

use crate::error::{Error, Result};

/// Fail with [`Error::MissingInput`] when `path` does not exist.
pub fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::MissingInput {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn invalid(path: &Path, e: impl std::fmt::Display) -> Error {
    Error::InvalidImage {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

/// Decode `path` as an 8-bit, 3-channel color image. Alpha is dropped, the
/// format is sniffed from content (falling back to the extension) and an EXIF
/// orientation tag is applied so the pixels come back upright.
pub fn load_color_image(path: &Path) -> Result<RgbImage> {
    ensure_exists(path)?;

    let mut decoder = ImageReader::open(path)
        .map_err(|e| invalid(path, e))?
        .with_guessed_format()
        .map_err(|e| invalid(path, e))?
        .into_decoder()
        .map_err(|e| invalid(path, e))?;
    // Unreadable metadata is not fatal; the pixels are still usable.
    let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);
    let mut img = DynamicImage::from_decoder(decoder).map_err(|e| invalid(path, e))?;
    if orientation != Orientation::NoTransforms {
        debug!("Applying EXIF orientation {:?} to {}", orientation, path.display());
        img.apply_orientation(orientation);
    }

    if img.width() == 0 || img.height() == 0 {
        return Err(Error::InvalidImage {
            path: path.to_path_buf(),
            reason: "image has no pixels".to_string(),
        });
    }
    debug!(
        "Loaded {}: {}x{} ({:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img.to_rgb8())
}
