#![doc = r#"
CUTSRUN — a build-and-run harness for the OptCuts mesh parameterization solver.

This crate drives two external collaborators in sequence: an incremental
CMake build of the solver target, and the solver executable itself, which
consumes a fixed eight-token positional argument contract (run mode, mesh
path, and six numeric/boolean algorithm parameters). It powers the
`cutsrun` CLI and can be embedded in your own Rust applications.

The solver's argument contract is positional, order-significant, and
exactly eight tokens long; see [`core::encode`] for the full table.

Add dependency
--------------
```toml
[dependencies]
cutsrun = "0.1"
```

Quick start: build, then run headless
-------------------------------------
```rust,no_run
use cutsrun::{BuildRequest, Invocation, SolverParams, build_and_run};

fn main() -> cutsrun::Result<()> {
    let request = BuildRequest::default(); // OptCuts_bin, Release, cores-1 workers
    let invocation = Invocation::offline(
        "input/benchmark/bishop_part.obj".into(),
        SolverParams::default(),
        true, // headless
    )?;

    build_and_run(&request, &invocation)
}
```

Running an already-built solver
-------------------------------
```rust,no_run
use cutsrun::{BuildRequest, Invocation, SolverParams, run_solver};

fn main() -> cutsrun::Result<()> {
    let request = BuildRequest {
        config: "Debug".to_string(),
        ..Default::default()
    };
    let invocation = Invocation::offline("meshes/torus.obj".into(), SolverParams::default(), true)?;
    run_solver(&request, &invocation)
}
```

Direct run modes
----------------
The diagnostic and mesh-processing modes are reached by constructing an
invocation with the mode itself; only the headless flag distinguishes
offline-windowed (10) from headless (100).

```rust,no_run
use cutsrun::{Invocation, RunMode, SolverParams};

let invocation = Invocation::new(
    RunMode::Diagnostic,
    "meshes/torus.obj".into(),
    SolverParams::default(),
)?;
# Ok::<(), cutsrun::Error>(())
```

Error handling
--------------
All public functions return `cutsrun::Result<T>`; match on
`cutsrun::Error` to handle specific cases, e.g. build or solver failures.

```rust,no_run
use cutsrun::{BuildRequest, Error, build_solver};

match build_solver(&BuildRequest::default()) {
    Ok(()) => {}
    Err(Error::Build(e)) => eprintln!("build failed: {e}"),
    Err(other) => eprintln!("other error: {other}"),
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — the invocation record and the positional token encoding.
- [`exec`] — the build-tool and solver process boundaries.
- [`types`] — shared enums (`RunMode`, `MethodType`, `InitCut`) and wire codes.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod exec;
pub mod types;

// Curated public API surface
// Types
pub use core::params::{Invocation, SolverParams};
pub use error::{Error, Result};
pub use types::{InitCut, MethodType, RunMode};

// Encoding
pub use core::encode::{ARG_COUNT, decode, encode};

// Process boundaries
pub use exec::build::{BuildError, BuildRequest, default_jobs};
pub use exec::solver::{SolverCommand, SolverError, resolve_executable};

// High-level API re-exports
pub use api::{build_and_run, build_solver, run_solver};
