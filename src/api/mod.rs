//! High-level, ergonomic library API: launch a single experiment or a
//! multi-seed sweep against the configured external trainer. Prefer these
//! entrypoints over the low-level `core`/`io` modules when embedding SATRUN.
use std::path::PathBuf;

use tracing::{info, warn};

use crate::core::command::{TrainerCommand, trainer_args};
use crate::core::params::TrainParams;
use crate::core::savedir;
use crate::error::{Error, Result};
use crate::io::config::LauncherConfig;
use crate::io::manifest::RunManifest;
use crate::io::trainer::run_teed;
use crate::types::Phase;

/// Knobs that shape a launch without being trainer hyperparameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Skip training and evaluate an already-trained checkpoint
    pub evaluate_only: bool,
    /// Run the training phase only, skipping evaluation
    pub train_only: bool,
    /// Print the assembled commands instead of launching anything
    pub dry_run: bool,
}

/// Outcome of one experiment: where artifacts landed and how each phase exited.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub save_dir: PathBuf,
    pub log_path: PathBuf,
    pub phases: Vec<(Phase, Option<i32>)>,
}

/// Aggregate outcome of a multi-seed sweep.
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepReport {
    pub completed: usize,
    pub errors: usize,
}

fn phases_for(opts: &RunOptions) -> Vec<Phase> {
    if opts.evaluate_only {
        vec![Phase::Evaluate]
    } else if opts.train_only {
        vec![Phase::Train]
    } else {
        vec![Phase::Train, Phase::Evaluate]
    }
}

/// Assemble the trainer invocations an experiment would issue, in order.
/// Exposed so callers (and dry-run) can inspect exactly what will launch.
pub fn build_commands(
    config: &LauncherConfig,
    params: &TrainParams,
    opts: &RunOptions,
) -> Vec<(Phase, TrainerCommand)> {
    let save_dir = savedir::save_path(&config.runs_root, params);
    let save_arg = save_dir.to_string_lossy().into_owned();

    phases_for(opts)
        .into_iter()
        .map(|phase| {
            let mut args = trainer_args(params, &save_arg, phase);
            args.extend(config.trainer_args.iter().cloned());
            (
                phase,
                TrainerCommand::new(&config.python_bin, &config.train_script, args),
            )
        })
        .collect()
}

/// Run one experiment: create the save directory, write the run manifest,
/// then launch the trainer once per phase (train, then evaluate), teeing
/// output to the shared append-mode log.
///
/// A non-zero trainer exit stops the run; the manifest still records the
/// failed phase. With `dry_run` set, the commands are printed and nothing
/// is touched on disk.
pub fn run_experiment(
    config: &LauncherConfig,
    params: &TrainParams,
    opts: &RunOptions,
) -> Result<RunReport> {
    let save = savedir::save_name(params);
    let save_dir = config.runs_root.join(&save);
    let log_path = save_dir.join(&config.log_name);
    let commands = build_commands(config, params, opts);

    if opts.dry_run {
        for (_, command) in &commands {
            println!("{}", command.shell_line());
        }
        return Ok(RunReport {
            save_dir,
            log_path,
            phases: Vec::new(),
        });
    }

    std::fs::create_dir_all(&save_dir)?;

    let mut manifest = RunManifest::new(
        save,
        params.clone(),
        commands.iter().map(|(_, c)| c.shell_line()).collect(),
    );
    manifest.write(&save_dir)?;

    let mut phases = Vec::new();
    for (phase, command) in &commands {
        info!("{} phase: {}", phase, command.shell_line());
        let status = run_teed(command, &log_path)?;
        manifest.record(*phase, status.code());
        manifest.write(&save_dir)?;
        phases.push((*phase, status.code()));

        if !status.success() {
            return Err(Error::Trainer {
                phase: *phase,
                status,
            });
        }
    }

    info!("Run complete: {}", save_dir.display());
    Ok(RunReport {
        save_dir,
        log_path,
        phases,
    })
}

/// Run the same experiment once per seed.
/// If `continue_on_error` is true, a failed run is counted and the sweep
/// moves on to the next seed; otherwise, the first error is returned.
pub fn run_sweep(
    config: &LauncherConfig,
    base: &TrainParams,
    seeds: &[u64],
    opts: &RunOptions,
    continue_on_error: bool,
) -> Result<SweepReport> {
    let mut report = SweepReport::default();

    for &seed in seeds {
        let mut params = base.clone();
        params.seed = seed;

        match run_experiment(config, &params, opts) {
            Ok(_) => report.completed += 1,
            Err(e) => {
                warn!("seed {} failed: {}", seed, e);
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}
