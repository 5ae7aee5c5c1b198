//! Process boundary: the external build tool and the solver child
//! process. Both are opaque collaborators reached through one spawned
//! command each; the only shared channel is argv in and exit status out.
pub mod build;
pub use build::{BuildError, BuildRequest, default_jobs, run_build};

pub mod solver;
pub use solver::{SolverCommand, SolverError, resolve_executable};
