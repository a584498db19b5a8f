use clap::Parser;
use std::path::PathBuf;

use hybrid_image::KernelSize;

use super::errors::parse_kernel_size;

#[derive(Parser, Debug)]
#[command(name = "hybrid-image", version, about = "Hybrid image builder")]
pub struct CliArgs {
    /// Image kept for its coarse structure (Gaussian low-pass)
    #[arg(long, default_value = "dog.jpg")]
    pub low_pass: PathBuf,

    /// Image kept for its fine detail (Laplacian high-pass); resized to the low-pass image
    #[arg(long, default_value = "cat.jpg")]
    pub high_pass: PathBuf,

    /// Full-size output; format follows the extension (jpg, png, bmp, tif)
    #[arg(short, long, default_value = "hybrid_full.jpg")]
    pub output: PathBuf,

    /// 100x100 thumbnail output
    #[arg(short, long, default_value = "hybrid_small.jpg")]
    pub thumbnail: PathBuf,

    /// Gaussian kernel as WIDTHxHEIGHT, both odd (default 31x31)
    #[arg(long, value_parser = parse_kernel_size)]
    pub gaussian_kernel: Option<KernelSize>,

    /// Gaussian standard deviation (default 15)
    #[arg(long)]
    pub sigma: Option<f64>,

    /// Laplacian aperture, odd and at most 31 (default 3)
    #[arg(long)]
    pub laplacian_ksize: Option<u32>,

    /// JSON preset with filter parameters; explicit flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show the low-pass, high-pass and hybrid views and wait for a key press
    #[arg(long, default_value_t = false)]
    pub show: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
