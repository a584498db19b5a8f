use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::RgbImage;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::io::writers::jpeg::write_rgb_jpeg;
use crate::io::writers::raster::write_rgb_raster;
use crate::types::OutputFormat;

/// Encode `image` in the format implied by `dest`'s extension.
pub fn encode_image<W: Write + Seek>(writer: &mut W, image: &RgbImage, dest: &Path) -> Result<()> {
    let format = OutputFormat::from_path(dest).ok_or_else(|| Error::UnsupportedOutputFormat {
        path: dest.to_path_buf(),
    })?;
    debug!("Encoding {} as {}", dest.display(), format);
    match format {
        OutputFormat::JPEG => write_rgb_jpeg(writer, image, dest),
        OutputFormat::PNG | OutputFormat::BMP | OutputFormat::TIFF => {
            write_rgb_raster(writer, image, format, dest)
        }
    }
}

/// Temp files default to owner-only access; outputs should get the same
/// umask-filtered mode as any newly created file.
#[cfg(unix)]
fn output_builder<'a>() -> tempfile::Builder<'a, 'a> {
    use std::os::unix::fs::PermissionsExt;
    let mut builder = tempfile::Builder::new();
    builder.permissions(std::fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn output_builder<'a>() -> tempfile::Builder<'a, 'a> {
    tempfile::Builder::new()
}

/// Encode into a temporary file beside `dest` so it can be renamed into place.
fn encode_to_temp(image: &RgbImage, dest: &Path) -> Result<NamedTempFile> {
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = output_builder()
        .prefix(".hybrid-")
        .suffix(".part")
        .tempfile_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        encode_image(&mut writer, image, dest)?;
        writer.flush()?;
    }
    Ok(tmp)
}

fn persist(tmp: NamedTempFile, dest: &Path) -> Result<()> {
    tmp.persist(dest).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

/// Write the full-size image and its thumbnail. Both are encoded before
/// either destination is touched, so an encode failure leaves no output.
pub fn write_output_pair(
    full: &RgbImage,
    full_path: &Path,
    thumbnail: &RgbImage,
    thumbnail_path: &Path,
) -> Result<()> {
    let full_tmp = encode_to_temp(full, full_path)?;
    let thumbnail_tmp = encode_to_temp(thumbnail, thumbnail_path)?;

    persist(full_tmp, full_path)?;
    info!("Full hybrid image saved to: {}", full_path.display());
    persist(thumbnail_tmp, thumbnail_path)?;
    info!("Small hybrid image saved to: {}", thumbnail_path.display());
    Ok(())
}
