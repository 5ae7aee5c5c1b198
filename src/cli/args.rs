use clap::Parser;
use std::path::PathBuf;

use cutsrun::{InitCut, MethodType, RunMode};

#[derive(Parser)]
#[command(name = "cutsrun", version, about = "CUTSRUN: build and run the OptCuts solver")]
pub struct CliArgs {
    /// Input mesh file handed to the solver (passed through unresolved)
    #[arg(short, long, default_value = "input/benchmark/bishop_part.obj")]
    pub mesh: PathBuf,

    /// Run the solver with its viewer instead of headless
    #[arg(long, default_value_t = false)]
    pub interactive: bool,

    /// Select a direct run mode instead of the offline/headless pair
    #[arg(long, value_enum)]
    pub mode: Option<RunMode>,

    /// Initial blending weight for the optimization objective, in [0, 1)
    #[arg(long, default_value_t = 0.999)]
    pub lambda: f64,

    /// Numeric tag attached to the run
    #[arg(long, default_value_t = 1.0)]
    pub test_id: f64,

    /// Seam optimization method
    #[arg(long, value_enum, default_value_t = MethodType::NoDual)]
    pub method: MethodType,

    /// Upper bound on the distortion energy
    #[arg(long, default_value_t = 4.1)]
    pub upper_bound: f64,

    /// Enforce a bijective (fold-over free) parameterization
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub bijective: bool,

    /// Initial cut placement for closed surfaces
    #[arg(long, value_enum, default_value_t = InitCut::RandomTwoEdge)]
    pub init_cut: InitCut,

    /// JSON file with a complete solver parameter set; overrides the
    /// individual parameter flags
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Build target name
    #[arg(long, default_value = "OptCuts_bin")]
    pub target: String,

    /// Build configuration passed through to the build tool
    #[arg(long, default_value = "Release")]
    pub config: String,

    /// Build worker count (default: one less than the CPU count)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Build tree root the executable is resolved under
    #[arg(long, default_value = "build")]
    pub build_root: PathBuf,

    /// Skip the build step and run the already-built solver
    #[arg(long, default_value_t = false)]
    pub skip_build: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
