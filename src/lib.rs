#![doc = r#"
SATRUN — a configuration-driven launcher for selective-classification
self-adaptive training (SAT) experiments.

This crate replaces a pile of per-experiment wrapper scripts with one typed
launcher. It owns everything up to the trainer's process boundary: the
hyperparameter set and its presets, the derived save-directory naming, the
assembly of the external trainer's command line, spawning the trainer for
its train and evaluate phases, and teeing trainer output into an append-mode
log next to a JSON run manifest. The training program itself is external and
is located through a small TOML config.

Quick start: launch one experiment
----------------------------------
```rust,no_run
use satrun::{run_experiment, LauncherConfig, Preset, RunOptions};

fn main() -> satrun::Result<()> {
    let config = LauncherConfig::load()?;
    let mut params = Preset::Cifar10Sat.params();
    params.seed = 42;

    let report = run_experiment(&config, &params, &RunOptions::default())?;
    println!("artifacts in {}", report.save_dir.display());
    Ok(())
}
```

Sweep over seeds
----------------
```rust,no_run
use satrun::{run_sweep, LauncherConfig, Preset, RunOptions};

fn main() -> satrun::Result<()> {
    let config = LauncherConfig::load()?;
    let params = Preset::Cifar10Ce.params();

    let report = run_sweep(&config, &params, &[100, 200, 300], &RunOptions::default(), true)?;
    println!("completed={} errors={}", report.completed, report.errors);
    Ok(())
}
```

Inspect without launching
-------------------------
```rust
use satrun::{build_commands, save_name, LauncherConfig, RunOptions, TrainParams};

let params = TrainParams::default();
assert_eq!(save_name(&params), "cifar10_resnet34_ce_seed-100");

let commands = build_commands(&LauncherConfig::default(), &params, &RunOptions::default());
for (phase, command) in &commands {
    println!("{}: {}", phase, command.shell_line());
}
```

Error handling
--------------
All public functions return `satrun::Result<T>`; match on `satrun::Error`
to handle specific cases, e.g. a trainer phase exiting non-zero.

```rust,no_run
use satrun::{run_experiment, Error, LauncherConfig, RunOptions, TrainParams};

fn main() {
    let config = LauncherConfig::default();
    let params = TrainParams::default();

    match run_experiment(&config, &params, &RunOptions::default()) {
        Ok(_) => {}
        Err(Error::Trainer { phase, status }) => eprintln!("{phase} phase failed: {status}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `Dataset`, `Architecture`, `LossFn`).
- [`core`] — params, presets, save-dir derivation, command assembly.
- [`io`] — launcher config, trainer process boundary, run manifest.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::TrainParams;
pub use crate::core::presets::Preset;
pub use error::{Error, Result};
pub use types::{Architecture, Dataset, LossFn, Optimizer, Phase, RunMode};

// Launcher plumbing
pub use crate::core::command::{TrainerCommand, trainer_args};
pub use crate::core::savedir::{save_name, save_path};
pub use io::config::LauncherConfig;
pub use io::manifest::{PhaseRecord, RunManifest};

// High-level API re-exports
pub use api::{RunOptions, RunReport, SweepReport, build_commands, run_experiment, run_sweep};
