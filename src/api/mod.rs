//! High-level, ergonomic library API: build a hybrid image from two files, or
//! compose one in memory from decoded images. Prefer these entrypoints over
//! the low-level processing modules when integrating the crate.
use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::info;

use crate::core::params::FilterParams;
use crate::core::processing::pipeline::{HybridComposite, compose_hybrid};
use crate::core::processing::resize::{BilinearResampler, Resampler, make_thumbnail};
use crate::display::{DisplaySink, NoopDisplay, Preview};
use crate::error::{Error, Result};
use crate::io::loader::{ensure_exists, load_color_image};
use crate::io::writers::write_output_pair;
use crate::types::PreviewKind;

/// Where the outputs of a successful build landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HybridOutputs {
    pub full_path: PathBuf,
    pub thumbnail_path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Builds hybrid images with fixed filter parameters.
///
/// The resampler (used to match the high-pass source to the low-pass source
/// and to make the thumbnail) and the display sink are injectable; defaults
/// are [`BilinearResampler`] and [`NoopDisplay`].
pub struct HybridImageBuilder<R = BilinearResampler, D = NoopDisplay> {
    params: FilterParams,
    resampler: R,
    display: D,
}

impl HybridImageBuilder {
    pub fn new(params: FilterParams) -> Self {
        Self {
            params,
            resampler: BilinearResampler::new(),
            display: NoopDisplay,
        }
    }
}

impl Default for HybridImageBuilder {
    fn default() -> Self {
        Self::new(FilterParams::default())
    }
}

impl<R: Resampler, D: DisplaySink> HybridImageBuilder<R, D> {
    pub fn with_resampler<R2: Resampler>(self, resampler: R2) -> HybridImageBuilder<R2, D> {
        HybridImageBuilder {
            params: self.params,
            resampler,
            display: self.display,
        }
    }

    pub fn with_display<D2: DisplaySink>(self, display: D2) -> HybridImageBuilder<R, D2> {
        HybridImageBuilder {
            params: self.params,
            resampler: self.resampler,
            display,
        }
    }

    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    /// Run the filter pipeline on already-decoded images (no disk I/O).
    pub fn compose(&mut self, low: &RgbImage, high: &RgbImage) -> Result<HybridComposite> {
        compose_hybrid(low, high, &self.params, &mut self.resampler)
    }

    /// Load both sources, compose the hybrid, write the full-size image and a
    /// fixed-size thumbnail, then hand all views to the display sink.
    ///
    /// Fails before touching any output when the configuration is invalid,
    /// both outputs share a path, an input is missing, or an input does not
    /// decode.
    pub fn build(
        &mut self,
        low_pass_path: &Path,
        high_pass_path: &Path,
        full_output_path: &Path,
        thumbnail_output_path: &Path,
    ) -> Result<HybridOutputs> {
        self.params.validate()?;
        if full_output_path == thumbnail_output_path {
            return Err(Error::configuration(
                "thumbnail_output_path",
                format!(
                    "full-size and thumbnail outputs must differ, both are {}",
                    full_output_path.display()
                ),
            ));
        }
        ensure_exists(low_pass_path)?;
        ensure_exists(high_pass_path)?;

        let low = load_color_image(low_pass_path)?;
        let high = load_color_image(high_pass_path)?;
        info!(
            "Building hybrid: low-pass {} ({}x{}), high-pass {} ({}x{})",
            low_pass_path.display(),
            low.width(),
            low.height(),
            high_pass_path.display(),
            high.width(),
            high.height()
        );

        let composite = self.compose(&low, &high)?;
        let thumbnail = make_thumbnail(&mut self.resampler, &composite.hybrid)?;

        write_output_pair(
            &composite.hybrid,
            full_output_path,
            &thumbnail,
            thumbnail_output_path,
        )?;

        self.display.show(&[
            Preview::new(PreviewKind::LowPass, &composite.low_pass),
            Preview::new(PreviewKind::HighPass, &composite.high_pass),
            Preview::new(PreviewKind::Hybrid, &composite.hybrid),
            Preview::new(PreviewKind::HybridThumbnail, &thumbnail),
        ])?;

        Ok(HybridOutputs {
            full_path: full_output_path.to_path_buf(),
            thumbnail_path: thumbnail_output_path.to_path_buf(),
            width: composite.hybrid.width(),
            height: composite.hybrid.height(),
        })
    }
}

/// One-shot helper with the default resampler and no display.
pub fn build_hybrid_image(
    low_pass_path: &Path,
    high_pass_path: &Path,
    full_output_path: &Path,
    thumbnail_output_path: &Path,
    params: &FilterParams,
) -> Result<HybridOutputs> {
    HybridImageBuilder::new(params.clone()).build(
        low_pass_path,
        high_pass_path,
        full_output_path,
        thumbnail_output_path,
    )
}
