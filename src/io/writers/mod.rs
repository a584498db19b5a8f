//! Output encoders and the all-or-nothing writer for the full/thumbnail pair.
pub mod jpeg;
pub mod output;
pub mod raster;

pub use output::{encode_image, write_output_pair};
