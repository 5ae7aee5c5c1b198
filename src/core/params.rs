use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::types::{InitCut, MethodType, RunMode};

/// Algorithm parameters suitable for config files and presets
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolverParams {
    /// Initial blending weight for the optimization objective, in [0, 1)
    pub lambda_init: f64,
    /// Opaque numeric tag attached to the run
    pub test_id: f64,
    /// Seam optimization method
    pub method: MethodType,
    /// Positive upper bound on the distortion energy
    pub upper_bound: f64,
    /// Enforce a fold-over free (one-to-one) parameterization
    pub bijective: bool,
    /// Initial seam placement for closed surfaces
    pub init_cut: InitCut,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            lambda_init: 0.999,
            test_id: 1.0,
            method: MethodType::NoDual,
            upper_bound: 4.1,
            bijective: true,
            init_cut: InitCut::RandomTwoEdge,
        }
    }
}

/// One solver invocation: a run mode, an input mesh, and the algorithm
/// parameters. Constructed once, encoded once, and discarded after launch;
/// there is no shared or global instance.
///
/// The mesh path is passed through to the solver unresolved — the solver
/// anchors relative inputs to its own working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invocation {
    pub run_mode: RunMode,
    pub mesh_path: PathBuf,
    pub params: SolverParams,
}

impl Invocation {
    /// Build an invocation for an explicit run mode, validating the
    /// numeric parameters. Errors name the offending field.
    pub fn new(run_mode: RunMode, mesh_path: PathBuf, params: SolverParams) -> Result<Self> {
        if !params.lambda_init.is_finite()
            || params.lambda_init < 0.0
            || params.lambda_init >= 1.0
        {
            return Err(Error::InvalidArgument {
                arg: "lambda_init",
                value: params.lambda_init.to_string(),
            });
        }
        if !params.test_id.is_finite() {
            return Err(Error::InvalidArgument {
                arg: "test_id",
                value: params.test_id.to_string(),
            });
        }
        if !params.upper_bound.is_finite() || params.upper_bound <= 0.0 {
            return Err(Error::InvalidArgument {
                arg: "upper_bound",
                value: params.upper_bound.to_string(),
            });
        }
        Ok(Self {
            run_mode,
            mesh_path,
            params,
        })
    }

    /// Build an offline-optimization invocation. `headless` is the only
    /// input deciding between run-mode codes 100 and 10.
    pub fn offline(mesh_path: PathBuf, params: SolverParams, headless: bool) -> Result<Self> {
        Self::new(RunMode::offline(headless), mesh_path, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SolverParams::default();
        assert_eq!(params.lambda_init, 0.999);
        assert_eq!(params.test_id, 1.0);
        assert_eq!(params.method, MethodType::NoDual);
        assert_eq!(params.upper_bound, 4.1);
        assert!(params.bijective);
        assert_eq!(params.init_cut, InitCut::RandomTwoEdge);
    }

    #[test]
    fn test_lambda_out_of_range_rejected() {
        for bad in [1.0, 1.5, -0.1, f64::NAN, f64::INFINITY] {
            let params = SolverParams {
                lambda_init: bad,
                ..Default::default()
            };
            let err = Invocation::offline("mesh.obj".into(), params, true).unwrap_err();
            match err {
                Error::InvalidArgument { arg, .. } => assert_eq!(arg, "lambda_init"),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_upper_bound_must_be_positive() {
        for bad in [0.0, -4.1, f64::NAN] {
            let params = SolverParams {
                upper_bound: bad,
                ..Default::default()
            };
            let err = Invocation::offline("mesh.obj".into(), params, true).unwrap_err();
            match err {
                Error::InvalidArgument { arg, .. } => assert_eq!(arg, "upper_bound"),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_test_id_must_be_numeric() {
        let params = SolverParams {
            test_id: f64::NAN,
            ..Default::default()
        };
        let err = Invocation::offline("mesh.obj".into(), params, true).unwrap_err();
        match err {
            Error::InvalidArgument { arg, .. } => assert_eq!(arg, "test_id"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_offline_headless_mapping() {
        let inv = Invocation::offline("mesh.obj".into(), SolverParams::default(), true).unwrap();
        assert_eq!(inv.run_mode, RunMode::Headless);
        let inv = Invocation::offline("mesh.obj".into(), SolverParams::default(), false).unwrap();
        assert_eq!(inv.run_mode, RunMode::OfflineOptimization);
    }

    #[test]
    fn test_mesh_path_not_inspected() {
        // Nonexistent paths are accepted here; the solver reports them itself.
        let inv = Invocation::offline(
            "does/not/exist.obj".into(),
            SolverParams::default(),
            true,
        );
        assert!(inv.is_ok());
    }
}
