//! Core processing building blocks: filter parameters, Gaussian/Laplacian
//! filters, normalization, blending, resize and the hybrid pipeline. These are
//! the primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
