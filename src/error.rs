//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and config-parse errors, and provides semantic
//! variants for argument validation and trainer-process failures.
use thiserror::Error;

use crate::types::Phase;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Failed to launch trainer '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Trainer {phase} phase exited with {status}")]
    Trainer {
        phase: Phase,
        status: std::process::ExitStatus,
    },

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
