//! High-level, ergonomic entry points: build the solver target, run a
//! configured invocation against the built binary, or do both in
//! sequence. Prefer these over the low-level `exec` module when
//! embedding the harness in another application.
use crate::core::params::Invocation;
use crate::error::Result;
use crate::exec::build::{self, BuildRequest};
use crate::exec::solver::{self, SolverCommand};

/// Build the solver target described by `request`, blocking until the
/// build tool exits. A non-zero build status is surfaced as an error and
/// nothing else happens — in particular, no solver run.
pub fn build_solver(request: &BuildRequest) -> Result<()> {
    build::run_build(request)?;
    Ok(())
}

/// Resolve the executable `request` would have produced and run
/// `invocation` against it, blocking until the solver exits.
///
/// The request carries exactly the {target, config, build root} triple
/// the resolution formula needs, so the run always targets the binary
/// the preceding build produced.
pub fn run_solver(request: &BuildRequest, invocation: &Invocation) -> Result<()> {
    let executable =
        solver::resolve_executable(&request.build_root, &request.config, &request.target)?;
    let command = SolverCommand::new(executable, invocation)?;
    command.run()?;
    Ok(())
}

/// Build, then run. A failed build short-circuits the run.
pub fn build_and_run(request: &BuildRequest, invocation: &Invocation) -> Result<()> {
    build_solver(request)?;
    run_solver(request, invocation)
}
