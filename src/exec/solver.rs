//! Solver invocation: locate the built executable, pin it to an absolute
//! path, and launch it with the positional argument vector.
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::info;

use crate::core::encode;
use crate::core::params::Invocation;

/// Errors encountered when resolving or launching the solver
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("solver executable not found: {0}")]
    NotFound(PathBuf),
    #[error("could not resolve '{path}' to an absolute path: {source}")]
    Resolve {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("refusing to launch solver via relative path: {0}")]
    RelativePath(PathBuf),
    #[error("failed to launch solver: {0}")]
    Launch(std::io::Error),
    #[error("solver exited with status {0}")]
    Exited(i32),
}

/// Locate the built solver binary for a target/config pair under the
/// build tree and pin it to an absolute path.
///
/// The solver anchors its own relative lookups (the input mesh among
/// them) to its working directory, which need not be the caller's, so a
/// relative executable path must never reach the launch step. Resolution
/// fails here, before any spawn, when the binary is missing.
pub fn resolve_executable(
    build_root: &Path,
    config: &str,
    target: &str,
) -> Result<PathBuf, SolverError> {
    let file_name = format!("{}{}", target, std::env::consts::EXE_SUFFIX);
    let candidate = build_root.join(config).join(file_name);

    if !candidate.is_file() {
        return Err(SolverError::NotFound(candidate));
    }

    std::path::absolute(&candidate).map_err(|source| SolverError::Resolve {
        path: candidate,
        source,
    })
}

/// A configured, ready-to-launch solver run: an absolute executable path
/// plus the encoded argument vector. Constructing one is the last point
/// where anything can be rejected; launching only observes the child's
/// exit status.
#[derive(Debug, Clone)]
pub struct SolverCommand {
    executable: PathBuf,
    args: Vec<String>,
}

impl SolverCommand {
    pub fn new(executable: PathBuf, invocation: &Invocation) -> Result<Self, SolverError> {
        if !executable.is_absolute() {
            return Err(SolverError::RelativePath(executable));
        }
        Ok(Self {
            executable,
            args: encode::encode(invocation),
        })
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// The encoded token sequence handed to the solver, in contract order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Launch the solver as a fresh OS process and block until it exits.
    /// A non-zero exit status is an error; the run is not retried.
    pub fn run(&self) -> Result<(), SolverError> {
        info!(
            "launching {} {}",
            self.executable.display(),
            self.args.join(" ")
        );

        let status = Command::new(&self.executable)
            .args(&self.args)
            .status()
            .map_err(SolverError::Launch)?;

        if !status.success() {
            return Err(SolverError::Exited(status.code().unwrap_or(-1)));
        }
        info!("solver finished with status 0");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::SolverParams;

    fn headless_invocation() -> Invocation {
        Invocation::offline("mesh.obj".into(), SolverParams::default(), true).unwrap()
    }

    #[test]
    fn test_missing_executable_detected_before_launch() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_executable(dir.path(), "Release", "OptCuts_bin").unwrap_err();
        match err {
            SolverError::NotFound(path) => {
                assert!(path.ends_with(
                    Path::new("Release").join(format!("OptCuts_bin{}", std::env::consts::EXE_SUFFIX))
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolved_path_is_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("Release");
        std::fs::create_dir_all(&config_dir).unwrap();
        let file_name = format!("OptCuts_bin{}", std::env::consts::EXE_SUFFIX);
        std::fs::write(config_dir.join(&file_name), b"").unwrap();

        let resolved = resolve_executable(dir.path(), "Release", "OptCuts_bin").unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with(Path::new("Release").join(file_name)));
    }

    #[test]
    fn test_relative_executable_rejected() {
        let err =
            SolverCommand::new("build/Release/OptCuts_bin".into(), &headless_invocation())
                .unwrap_err();
        assert!(matches!(err, SolverError::RelativePath(_)));
    }

    #[test]
    fn test_command_carries_contract_argv() {
        let exe = std::path::absolute("build/Release/OptCuts_bin").unwrap();
        let command = SolverCommand::new(exe.clone(), &headless_invocation()).unwrap();
        assert_eq!(command.executable(), exe.as_path());
        assert_eq!(command.args().len(), encode::ARG_COUNT);
        assert_eq!(command.args()[0], "100");
        assert_eq!(command.args()[1], "mesh.obj");
    }
}
