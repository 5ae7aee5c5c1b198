//! Command Line Interface (CLI) layer for CUTSRUN.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the build-then-run flow.
//! It wires user-provided options to the underlying library
//! functionality exposed via `cutsrun::api`.
//!
//! If you are embedding CUTSRUN into another application, prefer using
//! the high-level `cutsrun::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
