use tracing::info;
use tracing_subscriber::EnvFilter;

use hybrid_image::{DisplaySink, FilterParams, HybridImageBuilder, NoopDisplay, Result};

use super::args::CliArgs;

/// Install the fmt subscriber. `RUST_LOG` wins over the `--log` flag.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hybrid_image={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Defaults, then the JSON preset, then explicit flags.
fn resolve_params(args: &CliArgs) -> Result<FilterParams> {
    let mut params = match &args.config {
        Some(path) => {
            info!("Loading filter preset: {:?}", path);
            FilterParams::from_json_file(path)?
        }
        None => FilterParams::default(),
    };
    if let Some(kernel) = args.gaussian_kernel {
        params.gaussian_kernel = kernel;
    }
    if let Some(sigma) = args.sigma {
        params.sigma = sigma;
    }
    if let Some(ksize) = args.laplacian_ksize {
        params.laplacian_ksize = ksize;
    }
    params.validate()?;
    Ok(params)
}

#[cfg(feature = "gui")]
fn window_display() -> Box<dyn DisplaySink> {
    Box::new(hybrid_image::gui::WindowDisplay::default())
}

#[cfg(not(feature = "gui"))]
fn window_display() -> Box<dyn DisplaySink> {
    tracing::warn!("--show requires the `gui` feature; previews are skipped");
    Box::new(NoopDisplay)
}

pub fn run(args: CliArgs) -> Result<()> {
    let params = resolve_params(&args)?;
    info!(
        "Filter parameters: gaussian_kernel={}, sigma={}, laplacian_ksize={}",
        params.gaussian_kernel, params.sigma, params.laplacian_ksize
    );

    let display: Box<dyn DisplaySink> = if args.show {
        window_display()
    } else {
        Box::new(NoopDisplay)
    };

    let outputs = HybridImageBuilder::new(params)
        .with_display(display)
        .build(&args.low_pass, &args.high_pass, &args.output, &args.thumbnail)?;

    info!(
        "Hybrid image complete: {}x{} -> {:?}, thumbnail -> {:?}",
        outputs.width, outputs.height, outputs.full_path, outputs.thumbnail_path
    );
    Ok(())
}
