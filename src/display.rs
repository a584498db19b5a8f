//! Presentation of intermediate results. The builder hands every view to a
//! [`DisplaySink`] once outputs are written; headless runs use [`NoopDisplay`].
use image::RgbImage;

use crate::error::Result;
use crate::types::PreviewKind;

/// One titled view of the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Preview<'a> {
    pub kind: PreviewKind,
    pub image: &'a RgbImage,
}

impl<'a> Preview<'a> {
    pub fn new(kind: PreviewKind, image: &'a RgbImage) -> Self {
        Self { kind, image }
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

/// Receives the low-pass, high-pass, hybrid and thumbnail views. Implementations
/// may block until the operator dismisses them.
pub trait DisplaySink {
    fn show(&mut self, previews: &[Preview<'_>]) -> Result<()>;
}

/// Discards every preview.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDisplay;

impl DisplaySink for NoopDisplay {
    fn show(&mut self, _previews: &[Preview<'_>]) -> Result<()> {
        Ok(())
    }
}

impl<D: DisplaySink + ?Sized> DisplaySink for Box<D> {
    fn show(&mut self, previews: &[Preview<'_>]) -> Result<()> {
        (**self).show(previews)
    }
}
