use std::fs;
use std::path::Path;

use tracing::info;

use cutsrun::api;
use cutsrun::exec::build::{BuildRequest, default_jobs};
use cutsrun::{Invocation, SolverParams};

use super::args::CliArgs;
use super::errors::AppError;

fn load_params(path: &Path) -> Result<SolverParams, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::PresetRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| AppError::PresetParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = match &args.params {
        Some(path) => load_params(path)?,
        None => SolverParams {
            lambda_init: args.lambda,
            test_id: args.test_id,
            method: args.method,
            upper_bound: args.upper_bound,
            bijective: args.bijective,
            init_cut: args.init_cut,
        },
    };

    let jobs = match args.jobs {
        Some(0) => return Err(AppError::ZeroJobs { jobs: 0 }.into()),
        Some(n) => n,
        None => default_jobs(),
    };

    let request = BuildRequest {
        target: args.target,
        config: args.config,
        jobs,
        build_root: args.build_root,
        ..Default::default()
    };

    // Direct modes bypass the headless flag; everything else is the
    // offline pair, headless unless --interactive.
    let invocation = match args.mode {
        Some(mode) => Invocation::new(mode, args.mesh, params)?,
        None => Invocation::offline(args.mesh, params, !args.interactive)?,
    };

    if args.skip_build {
        info!("skipping build of target '{}'", request.target);
    } else {
        info!("using {} build workers", request.jobs);
        api::build_solver(&request)?;
    }

    api::run_solver(&request, &invocation)?;

    info!("run complete: {:?}", invocation.mesh_path);
    Ok(())
}
