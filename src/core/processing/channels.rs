use image::RgbImage;
use ndarray::Array2;

use crate::error::{Error, Result};
use crate::types::Channel;

/// Split an image into planes ordered as [`Channel::ALL`] (blue, green, red).
pub fn split_channels(image: &RgbImage) -> [Array2<u8>; 3] {
    let (w, h) = (image.width() as usize, image.height() as usize);
    let raw = image.as_raw();
    Channel::ALL.map(|channel| {
        let offset = channel.rgb_index();
        Array2::from_shape_fn((h, w), |(row, col)| raw[(row * w + col) * 3 + offset])
    })
}

/// Merge blue, green, red planes back into an interleaved image.
pub fn merge_channels(planes: &[Array2<u8>; 3]) -> Result<RgbImage> {
    let dim = planes[0].dim();
    for plane in &planes[1..] {
        if plane.dim() != dim {
            return Err(Error::DimensionMismatch {
                low: dim,
                high: plane.dim(),
            });
        }
    }
    let (rows, cols) = dim;

    let mut raw = vec![0u8; rows * cols * 3];
    for (channel, plane) in Channel::ALL.iter().zip(planes) {
        let offset = channel.rgb_index();
        for ((row, col), &v) in plane.indexed_iter() {
            raw[(row * cols + col) * 3 + offset] = v;
        }
    }

    RgbImage::from_raw(cols as u32, rows as u32, raw).ok_or_else(|| {
        Error::Processing(format!("buffer does not fit a {}x{} RGB image", cols, rows))
    })
}
