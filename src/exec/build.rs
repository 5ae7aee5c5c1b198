//! Build step: drives one incremental build of the solver target through
//! the external build tool and reports its exit status.
use std::path::PathBuf;
use std::process::Command;
use std::thread;

use thiserror::Error;
use tracing::info;

/// Errors from the build boundary
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("build tool failed to start: {0}")]
    Tool(#[from] std::io::Error),
    #[error("build of target '{target}' failed with exit status {status}")]
    Failed { target: String, status: i32 },
}

/// One build of a named target at a chosen configuration.
///
/// `config` is passed through to the build tool unvalidated; it owns that
/// vocabulary ("Release", "Debug", ...). `build_root` and `program` carry
/// documented defaults and exist so neither the build tree location nor
/// the tool itself is baked into the orchestration.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// Target name known to the build system
    pub target: String,
    /// Build configuration, e.g. "Release" or "Debug"
    pub config: String,
    /// Worker count handed to the build tool
    pub jobs: usize,
    /// Build tree root the executable lands under
    pub build_root: PathBuf,
    /// Build tool binary
    pub program: String,
}

impl Default for BuildRequest {
    fn default() -> Self {
        Self {
            target: "OptCuts_bin".to_string(),
            config: "Release".to_string(),
            jobs: default_jobs(),
            build_root: PathBuf::from("build"),
            program: "cmake".to_string(),
        }
    }
}

/// Default build worker count: one less than the CPU count, leaving a
/// core for the host, and never below one.
pub fn default_jobs() -> usize {
    jobs_for(
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1),
    )
}

fn jobs_for(cores: usize) -> usize {
    cores.saturating_sub(1).max(1)
}

/// Run one incremental build, blocking until the tool exits. The tool's
/// output streams to the caller's stdio. A non-zero exit status is an
/// error; there are no retries.
pub fn run_build(request: &BuildRequest) -> Result<(), BuildError> {
    info!(
        "building target '{}' [{}] with {} workers",
        request.target, request.config, request.jobs
    );

    let status = Command::new(&request.program)
        .arg("--build")
        .arg(&request.build_root)
        .args(["--config", request.config.as_str()])
        .args(["--target", request.target.as_str()])
        .arg("-j")
        .arg(request.jobs.to_string())
        .status()?;

    if !status.success() {
        return Err(BuildError::Failed {
            target: request.target.clone(),
            status: status.code().unwrap_or(-1),
        });
    }
    Ok(())
}
