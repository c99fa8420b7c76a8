//! I/O layer: launcher configuration, the trainer process boundary, and the
//! per-run JSON manifest sidecar.
pub mod config;
pub use config::LauncherConfig;

pub mod trainer;
pub use trainer::run_teed;

pub mod manifest;
pub use manifest::{PhaseRecord, RunManifest};
