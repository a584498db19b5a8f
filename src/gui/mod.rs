//! Native preview window (feature `gui`).
pub mod viewer;

pub use viewer::WindowDisplay;
