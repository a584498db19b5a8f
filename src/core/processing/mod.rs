//! Filtering primitives and the per-channel hybrid pipeline.
pub mod blend;
pub mod channels;
pub mod filters;
pub mod normalize;
pub mod pipeline;
pub mod resize;
