//! Shared types and enums used across CUTSRUN.
//! Includes `RunMode`, `MethodType`, and `InitCut`, together with the
//! integer wire codes the solver parses from its argument vector.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Top-level selector for what the solver executable does.
///
/// The offline/headless pair is normally chosen through the `headless`
/// flag of [`RunMode::offline`]; the remaining variants are selected by
/// constructing an invocation with them directly.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum RunMode {
    Optimization,
    Diagnostic,
    MeshProcessing,
    OfflineOptimization,
    Headless,
}

impl RunMode {
    /// Integer code expected at argv position 0.
    pub fn code(self) -> u32 {
        match self {
            RunMode::Optimization => 0,
            RunMode::Diagnostic => 1,
            RunMode::MeshProcessing => 2,
            RunMode::OfflineOptimization => 10,
            RunMode::Headless => 100,
        }
    }

    /// Inverse of [`RunMode::code`]; `None` for codes the solver does not know.
    pub fn from_code(code: u32) -> Option<RunMode> {
        match code {
            0 => Some(RunMode::Optimization),
            1 => Some(RunMode::Diagnostic),
            2 => Some(RunMode::MeshProcessing),
            10 => Some(RunMode::OfflineOptimization),
            100 => Some(RunMode::Headless),
            _ => None,
        }
    }

    /// The offline mode pair: headless (code 100) or windowed (code 10).
    /// This flag is the only input that distinguishes the two.
    pub fn offline(headless: bool) -> RunMode {
        if headless {
            RunMode::Headless
        } else {
            RunMode::OfflineOptimization
        }
    }
}

// Manual implementation for ValueEnum: only the direct modes are
// CLI-selectable; the offline/headless pair goes through --interactive.
impl clap::ValueEnum for RunMode {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            RunMode::Optimization,
            RunMode::Diagnostic,
            RunMode::MeshProcessing,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            RunMode::Optimization => Some(clap::builder::PossibleValue::new("optimization")),
            RunMode::Diagnostic => Some(clap::builder::PossibleValue::new("diagnostic")),
            RunMode::MeshProcessing => Some(clap::builder::PossibleValue::new("mesh-processing")),
            RunMode::OfflineOptimization | RunMode::Headless => None,
        }
    }
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunMode::Optimization => write!(f, "Optimization"),
            RunMode::Diagnostic => write!(f, "Diagnostic"),
            RunMode::MeshProcessing => write!(f, "MeshProcessing"),
            RunMode::OfflineOptimization => write!(f, "OfflineOptimization"),
            RunMode::Headless => write!(f, "Headless"),
        }
    }
}

/// Seam optimization method, argv position 4.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum MethodType {
    NoDual,
    OptCuts,
    EbCuts,
    DistMin,
}

impl MethodType {
    pub fn code(self) -> u32 {
        match self {
            MethodType::NoDual => 0,
            MethodType::OptCuts => 1,
            MethodType::EbCuts => 2,
            MethodType::DistMin => 3,
        }
    }

    pub fn from_code(code: u32) -> Option<MethodType> {
        match code {
            0 => Some(MethodType::NoDual),
            1 => Some(MethodType::OptCuts),
            2 => Some(MethodType::EbCuts),
            3 => Some(MethodType::DistMin),
            _ => None,
        }
    }
}

impl std::fmt::Display for MethodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MethodType::NoDual => "NoDual",
            MethodType::OptCuts => "OptCuts",
            MethodType::EbCuts => "EbCuts",
            MethodType::DistMin => "DistMin",
        };
        write!(f, "{}", s)
    }
}

/// Initial seam placement for closed surfaces, argv position 7.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum InitCut {
    RandomTwoEdge,
    FarthestTwoPoint,
}

impl InitCut {
    pub fn code(self) -> u32 {
        match self {
            InitCut::RandomTwoEdge => 0,
            InitCut::FarthestTwoPoint => 1,
        }
    }

    /// The solver accepts any integer here but treats everything outside
    /// {0, 1} as the random 2-edge cut. Mirror that, loudly.
    pub fn from_code(code: i64) -> InitCut {
        match code {
            0 => InitCut::RandomTwoEdge,
            1 => InitCut::FarthestTwoPoint,
            other => {
                warn!("initial cut option {} invalid, using random 2-edge cut", other);
                InitCut::RandomTwoEdge
            }
        }
    }
}

impl std::fmt::Display for InitCut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitCut::RandomTwoEdge => write!(f, "RandomTwoEdge"),
            InitCut::FarthestTwoPoint => write!(f, "FarthestTwoPoint"),
        }
    }
}
