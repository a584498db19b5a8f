use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Side length of the square thumbnail written next to the full-size output.
pub const THUMBNAIL_SIZE: u32 = 100;

/// Resizes whole color images. Injected into the builder so callers can swap
/// the interpolation backend or observe resize calls.
pub trait Resampler {
    fn resize(&mut self, image: &RgbImage, width: u32, height: u32) -> Result<RgbImage>;
}

/// Bilinear resampling backed by `fast_image_resize`.
pub struct BilinearResampler {
    resizer: Resizer,
    options: ResizeOptions,
}

impl BilinearResampler {
    pub fn new() -> Self {
        Self {
            resizer: Resizer::new(),
            options: ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear)),
        }
    }
}

impl Default for BilinearResampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Resampler for BilinearResampler {
    fn resize(&mut self, image: &RgbImage, width: u32, height: u32) -> Result<RgbImage> {
        if width == 0 || height == 0 {
            return Err(Error::Resize(format!(
                "target size must be non-zero, got {}x{}",
                width, height
            )));
        }
        debug!(
            "Resizing {}x{} -> {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );

        let src_image = Image::from_vec_u8(
            image.width(),
            image.height(),
            image.as_raw().clone(),
            PixelType::U8x3,
        )
        .map_err(Error::resize)?;
        let mut dst_image = Image::new(width, height, PixelType::U8x3);
        self.resizer
            .resize(&src_image, &mut dst_image, &self.options)
            .map_err(Error::resize)?;

        RgbImage::from_raw(width, height, dst_image.into_vec()).ok_or_else(|| {
            Error::Resize(format!("resized buffer does not fit {}x{}", width, height))
        })
    }
}

/// Squash `image` into a fixed `THUMBNAIL_SIZE` square, ignoring aspect ratio.
pub fn make_thumbnail<R: Resampler + ?Sized>(resampler: &mut R, image: &RgbImage) -> Result<RgbImage> {
    resampler.resize(image, THUMBNAIL_SIZE, THUMBNAIL_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn resize_hits_requested_dimensions() {
        let img = RgbImage::from_fn(40, 30, |x, y| Rgb([x as u8, y as u8, 7]));
        let mut resampler = BilinearResampler::new();
        let out = resampler.resize(&img, 13, 57).unwrap();
        assert_eq!(out.dimensions(), (13, 57));
    }

    #[test]
    fn uniform_color_survives_resize() {
        let img = RgbImage::from_pixel(64, 48, Rgb([12, 200, 90]));
        let mut resampler = BilinearResampler::new();
        let out = resampler.resize(&img, 20, 20).unwrap();
        assert!(out.pixels().all(|p| *p == Rgb([12, 200, 90])));
    }

    #[test]
    fn thumbnail_is_square_regardless_of_aspect() {
        let img = RgbImage::new(300, 17);
        let mut resampler = BilinearResampler::new();
        let thumb = make_thumbnail(&mut resampler, &img).unwrap();
        assert_eq!(thumb.dimensions(), (THUMBNAIL_SIZE, THUMBNAIL_SIZE));
    }

    #[test]
    fn zero_target_is_an_error() {
        let img = RgbImage::new(4, 4);
        let mut resampler = BilinearResampler::new();
        assert!(matches!(resampler.resize(&img, 0, 4), Err(Error::Resize(_))));
    }
}
