//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, build, and solver errors, and provides semantic
//! variants for configuration-field validation.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Build error: {0}")]
    Build(#[from] crate::exec::BuildError),

    #[error("Solver error: {0}")]
    Solver(#[from] crate::exec::SolverError),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },
}
