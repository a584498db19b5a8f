//! hybrid-image CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, build the hybrid
//! image, and exit with a status that identifies the failure kind.
//! For programmatic use, prefer the library API (`hybrid_image::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    cli::init_logging(args.log);

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error ({}): {}", e.kind(), e);
            ExitCode::from(e.kind().exit_code())
        }
    }
}
