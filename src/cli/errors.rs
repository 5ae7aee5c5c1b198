use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid worker count: {jobs}. Must be at least 1")]
    ZeroJobs { jobs: usize },

    #[error("Failed to read parameter preset {path:?}: {source}")]
    PresetRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse parameter preset {path:?}: {source}")]
    PresetParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
