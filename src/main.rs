//! CUTSRUN CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, build the
//! solver target, launch it, and exit with appropriate status.
//! For programmatic use, prefer the library API (`cutsrun::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
