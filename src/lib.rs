#![doc = r#"
hybrid-image — build hybrid images from two photographs.

A hybrid image keeps the coarse structure of one picture (a Gaussian low-pass
view) and the fine detail of another (a Laplacian high-pass view), blended
per color channel at equal weights. Up close the detail dominates; from a
distance only the blurred picture remains.

This crate provides the filters, the per-channel pipeline and a small builder
that loads two files, writes the full-size hybrid plus a 100x100 thumbnail,
and optionally shows the intermediate views. It powers the `hybrid-image` CLI.

Add dependency
--------------
```toml
[dependencies]
hybrid-image = "0.1"
```

Quick start: build from files
-----------------------------
```rust,no_run
use std::path::Path;
use hybrid_image::{FilterParams, HybridImageBuilder};

fn main() -> hybrid_image::Result<()> {
    let outputs = HybridImageBuilder::new(FilterParams::default()).build(
        Path::new("dog.jpg"),
        Path::new("cat.jpg"),
        Path::new("hybrid_full.jpg"),
        Path::new("hybrid_small.jpg"),
    )?;
    println!("{}x{} -> {:?}", outputs.width, outputs.height, outputs.full_path);
    Ok(())
}
```

Compose in memory
-----------------
```rust
use image::{Rgb, RgbImage};
use hybrid_image::{FilterParams, HybridImageBuilder, KernelSize};

let params = FilterParams {
    gaussian_kernel: KernelSize::square(5),
    sigma: 2.0,
    laplacian_ksize: 3,
};
let low = RgbImage::from_pixel(32, 32, Rgb([200, 120, 40]));
let high = RgbImage::from_fn(48, 48, |x, y| Rgb([(x * 5) as u8, (y * 5) as u8, 0]));

let composite = HybridImageBuilder::new(params).compose(&low, &high).unwrap();
assert_eq!(composite.hybrid.dimensions(), (32, 32));
```

Error handling
--------------
All public functions return `hybrid_image::Result<T>`. [`Error::kind`] sorts
every failure into missing input, invalid image, configuration or unexpected,
and [`ErrorKind::exit_code`] gives the CLI status for each.

```rust,no_run
use std::path::Path;
use hybrid_image::{build_hybrid_image, ErrorKind, FilterParams};

match build_hybrid_image(
    Path::new("dog.jpg"),
    Path::new("cat.jpg"),
    Path::new("full.jpg"),
    Path::new("small.jpg"),
    &FilterParams::default(),
) {
    Ok(_) => {}
    Err(e) if e.kind() == ErrorKind::MissingInput => eprintln!("Error: {e}"),
    Err(e) => eprintln!("Unexpected: {e}"),
}
```

Feature flags
-------------
- `gui`: native preview window (`gui::WindowDisplay`) for the four views.
- `full`: enables every optional feature.

Useful modules
--------------
- [`api`] — `HybridImageBuilder` and one-shot helpers.
- [`core`] — filter parameters, filters, normalization, blending, resize.
- [`io`] — input loading and output encoders.
- [`display`] — the `DisplaySink` capability.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod display;
pub mod error;
pub mod io;
pub mod types;

// GUI module (only available with gui feature)
#[cfg(feature = "gui")]
pub mod gui;

// Curated public API surface
// Types
pub use crate::core::params::{FilterParams, KernelSize};
pub use crate::core::processing::pipeline::HybridComposite;
pub use crate::core::processing::resize::{BilinearResampler, Resampler, THUMBNAIL_SIZE};
pub use display::{DisplaySink, NoopDisplay, Preview};
pub use error::{Error, ErrorKind, Result};
pub use types::{Channel, OutputFormat, PreviewKind};

// Filter primitives
pub use crate::core::processing::blend::{add_weighted, blend_hybrid};
pub use crate::core::processing::channels::{merge_channels, split_channels};
pub use crate::core::processing::filters::{
    gaussian_blur_u8, gaussian_kernel, laplacian_f64, laplacian_kernels,
};
pub use crate::core::processing::normalize::normalize_min_max_u8;
pub use crate::core::processing::resize::make_thumbnail;

// High-level API re-exports
pub use api::{HybridImageBuilder, HybridOutputs, build_hybrid_image};
