//! Core launcher building blocks: the hyperparameter set, named presets,
//! save-directory derivation, and trainer command assembly. These are the
//! primitives consumed by the high-level `api` module.
pub mod command;
pub mod params;
pub mod presets;
pub mod savedir;
