//! Shared types and enums used across the crate.
//! Includes `Channel`, `PreviewKind` and `OutputFormat`.
use std::path::Path;

/// One color plane of an image. Planes are processed in blue, green, red order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Channel {
    Blue,
    Green,
    Red,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Blue, Channel::Green, Channel::Red];

    /// Index of this channel inside an interleaved RGB pixel.
    pub fn rgb_index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Blue => write!(f, "Blue"),
            Channel::Green => write!(f, "Green"),
            Channel::Red => write!(f, "Red"),
        }
    }
}

/// Intermediate and final views handed to a display sink.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PreviewKind {
    LowPass,
    HighPass,
    Hybrid,
    HybridThumbnail,
}

impl PreviewKind {
    pub fn title(self) -> &'static str {
        match self {
            PreviewKind::LowPass => "Low-Pass Image",
            PreviewKind::HighPass => "High-Pass Image",
            PreviewKind::Hybrid => "Hybrid Image",
            PreviewKind::HybridThumbnail => "Hybrid Image (Small)",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OutputFormat {
    JPEG,
    PNG,
    BMP,
    TIFF,
}

impl OutputFormat {
    /// Infer the output format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" | "jpe" => Some(OutputFormat::JPEG),
            "png" => Some(OutputFormat::PNG),
            "bmp" => Some(OutputFormat::BMP),
            "tif" | "tiff" => Some(OutputFormat::TIFF),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutputFormat::JPEG => "JPEG",
            OutputFormat::PNG => "PNG",
            OutputFormat::BMP => "BMP",
            OutputFormat::TIFF => "TIFF",
        };
        write!(f, "{}", s)
    }
}
