use image::RgbImage;
use ndarray::Array2;
use tracing::{debug, info};

use crate::core::params::FilterParams;
use crate::core::processing::blend::blend_hybrid;
use crate::core::processing::channels::{merge_channels, split_channels};
use crate::core::processing::filters::{gaussian_blur_u8, laplacian_f64};
use crate::core::processing::normalize::normalize_min_max_u8;
use crate::core::processing::resize::Resampler;
use crate::error::{Error, Result};
use crate::types::Channel;

/// Low-pass, high-pass and blended views produced from one image pair.
#[derive(Debug, Clone)]
pub struct HybridComposite {
    pub low_pass: RgbImage,
    pub high_pass: RgbImage,
    pub hybrid: RgbImage,
}

/// Per-channel planes of a single filtering pass.
pub struct ChannelResult {
    pub channel: Channel,
    pub low: Array2<u8>,
    pub high: Array2<u8>,
    pub hybrid: Array2<u8>,
}

/// Bring `high` to the dimensions of `low`. Returns `None` when no resize was needed.
pub fn match_dimensions<R: Resampler + ?Sized>(
    low: &RgbImage,
    high: &RgbImage,
    resampler: &mut R,
) -> Result<Option<RgbImage>> {
    if low.dimensions() == high.dimensions() {
        return Ok(None);
    }
    info!(
        "Resizing high-pass source {}x{} to match low-pass source {}x{}",
        high.width(),
        high.height(),
        low.width(),
        low.height()
    );
    let resized = resampler.resize(high, low.width(), low.height())?;
    if resized.dimensions() != low.dimensions() {
        return Err(Error::DimensionMismatch {
            low: (low.height() as usize, low.width() as usize),
            high: (resized.height() as usize, resized.width() as usize),
        });
    }
    Ok(Some(resized))
}

/// Low-pass `low`, high-pass `high`, normalize and blend one channel pair.
pub fn process_channel(
    channel: Channel,
    low: &Array2<u8>,
    high: &Array2<u8>,
    params: &FilterParams,
) -> Result<ChannelResult> {
    let low_pass = gaussian_blur_u8(low, params.gaussian_kernel, params.sigma);
    let response = laplacian_f64(high, params.laplacian_ksize);
    let high_pass = normalize_min_max_u8(&response);
    let hybrid = blend_hybrid(&low_pass, &high_pass)?;
    debug!("{} channel processed: {:?}", channel, hybrid.dim());
    Ok(ChannelResult {
        channel,
        low: low_pass,
        high: high_pass,
        hybrid,
    })
}

/// Full hybrid pipeline on decoded images: resize-to-match, split, filter,
/// normalize, blend and merge.
pub fn compose_hybrid<R: Resampler + ?Sized>(
    low: &RgbImage,
    high: &RgbImage,
    params: &FilterParams,
    resampler: &mut R,
) -> Result<HybridComposite> {
    params.validate()?;

    let resized = match_dimensions(low, high, resampler)?;
    let high = resized.as_ref().unwrap_or(high);

    let low_planes = split_channels(low);
    let high_planes = split_channels(high);

    let mut lows = Vec::with_capacity(Channel::ALL.len());
    let mut highs = Vec::with_capacity(Channel::ALL.len());
    let mut hybrids = Vec::with_capacity(Channel::ALL.len());
    for ((channel, l), h) in Channel::ALL.iter().zip(&low_planes).zip(&high_planes) {
        let result = process_channel(*channel, l, h, params)?;
        lows.push(result.low);
        highs.push(result.high);
        hybrids.push(result.hybrid);
    }

    Ok(HybridComposite {
        low_pass: merge_vec(lows)?,
        high_pass: merge_vec(highs)?,
        hybrid: merge_vec(hybrids)?,
    })
}

fn merge_vec(planes: Vec<Array2<u8>>) -> Result<RgbImage> {
    let planes: [Array2<u8>; 3] = planes.try_into().map_err(|v: Vec<Array2<u8>>| {
        Error::Processing(format!("expected 3 planes, got {}", v.len()))
    })?;
    merge_channels(&planes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::KernelSize;
    use image::Rgb;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Records how often it is asked to resize; produces a black image.
    struct CountingResampler {
        calls: Rc<Cell<usize>>,
    }

    impl Resampler for CountingResampler {
        fn resize(&mut self, _image: &RgbImage, width: u32, height: u32) -> Result<RgbImage> {
            self.calls.set(self.calls.get() + 1);
            Ok(RgbImage::new(width, height))
        }
    }

    fn small_params() -> FilterParams {
        FilterParams {
            gaussian_kernel: KernelSize::square(5),
            sigma: 1.5,
            laplacian_ksize: 3,
        }
    }

    fn checker(w: u32, h: u32) -> RgbImage {
        RgbImage::from_fn(w, h, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb([255, 128, 0])
            } else {
                Rgb([0, 64, 255])
            }
        })
    }

    #[test]
    fn equal_sizes_never_call_the_resampler() {
        let calls = Rc::new(Cell::new(0));
        let mut resampler = CountingResampler {
            calls: calls.clone(),
        };
        let low = RgbImage::from_pixel(12, 8, Rgb([90, 90, 90]));
        let high = checker(12, 8);
        let composite = compose_hybrid(&low, &high, &small_params(), &mut resampler).unwrap();
        assert_eq!(calls.get(), 0);
        assert_eq!(composite.hybrid.dimensions(), (12, 8));
    }

    #[test]
    fn high_pass_source_is_resized_once_to_low_pass_dims() {
        let calls = Rc::new(Cell::new(0));
        let mut resampler = CountingResampler {
            calls: calls.clone(),
        };
        let low = RgbImage::from_pixel(16, 10, Rgb([40, 80, 120]));
        let high = checker(7, 23);
        let composite = compose_hybrid(&low, &high, &small_params(), &mut resampler).unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(composite.low_pass.dimensions(), (16, 10));
        assert_eq!(composite.high_pass.dimensions(), (16, 10));
        assert_eq!(composite.hybrid.dimensions(), (16, 10));
    }

    #[test]
    fn high_pass_channels_span_full_range() {
        let mut resampler = CountingResampler {
            calls: Rc::new(Cell::new(0)),
        };
        let low = RgbImage::new(9, 9);
        let high = RgbImage::from_fn(9, 9, |x, y| match (x, y) {
            (4, 4) => Rgb([255, 10, 10]),
            (2, 6) => Rgb([0, 200, 10]),
            (7, 1) => Rgb([0, 10, 180]),
            _ => Rgb([0, 10, 10]),
        });
        let composite = compose_hybrid(&low, &high, &small_params(), &mut resampler).unwrap();
        for channel in Channel::ALL {
            let values: Vec<u8> = composite
                .high_pass
                .pixels()
                .map(|p| p[channel.rgb_index()])
                .collect();
            assert_eq!(values.iter().min(), Some(&0));
            assert_eq!(values.iter().max(), Some(&255));
        }
    }

    #[test]
    fn uniform_sources_blend_channel_wise() {
        let mut resampler = CountingResampler {
            calls: Rc::new(Cell::new(0)),
        };
        // Constant high-pass source has no Laplacian response, so it normalizes to 0.
        let low = RgbImage::from_pixel(6, 6, Rgb([200, 100, 50]));
        let high = RgbImage::from_pixel(6, 6, Rgb([9, 9, 9]));
        let composite = compose_hybrid(&low, &high, &small_params(), &mut resampler).unwrap();
        assert!(composite.hybrid.pixels().all(|p| *p == Rgb([100, 50, 25])));
        assert!(composite.low_pass.pixels().all(|p| *p == Rgb([200, 100, 50])));
    }

    #[test]
    fn invalid_params_fail_before_filtering() {
        let calls = Rc::new(Cell::new(0));
        let mut resampler = CountingResampler {
            calls: calls.clone(),
        };
        let params = FilterParams {
            laplacian_ksize: 4,
            ..small_params()
        };
        let err = compose_hybrid(&RgbImage::new(4, 4), &RgbImage::new(2, 2), &params, &mut resampler)
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn resampler_returning_wrong_size_is_rejected() {
        struct Broken;
        impl Resampler for Broken {
            fn resize(&mut self, _image: &RgbImage, _w: u32, _h: u32) -> Result<RgbImage> {
                Ok(RgbImage::new(1, 1))
            }
        }
        let err = compose_hybrid(
            &RgbImage::new(4, 4),
            &RgbImage::new(2, 2),
            &small_params(),
            &mut Broken,
        )
        .unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }
}
