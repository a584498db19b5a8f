//! Command Line Interface (CLI) layer.
//!
//! This module defines argument parsing (`args`), CLI-only error types
//! (`errors`), and the orchestration logic (`runner`): resolve filter
//! parameters, pick a display sink and drive `HybridImageBuilder`.
//!
//! If you are embedding hybrid-image into another application, use the
//! library API (`hybrid_image::api`) instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::{init_logging, run};
