//! I/O layer: input loading (`loader`) and output encoders (`writers`)
//! for JPEG, PNG, BMP and TIFF.
pub mod loader;
pub use loader::{ensure_exists, load_color_image};

pub mod writers;
