//! Command Line Interface (CLI) layer for SATRUN.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-run and multi-seed
//! sweep flows. It wires user-provided overrides to the underlying library
//! functionality exposed via `satrun::api`.
//!
//! If you are embedding SATRUN into another application, prefer using the
//! high-level `satrun::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
