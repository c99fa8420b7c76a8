use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("--evaluate and --train-only are mutually exclusive")]
    ConflictingPhases,

    #[error("Launcher error: {0}")]
    Launcher(#[from] satrun::Error),
}
