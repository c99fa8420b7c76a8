use tracing::{info, warn};

use satrun::api::{self, RunOptions};
use satrun::core::params::TrainParams;
use satrun::io::config::LauncherConfig;
use satrun::types::Dataset;

use super::args::CliArgs;
use super::errors::AppError;

/// Merge CLI overrides onto the preset (or default) parameter set.
fn resolve_params(args: &CliArgs) -> TrainParams {
    let mut params = args
        .preset
        .map(|p| p.params())
        .unwrap_or_default();

    if let Some(dataset) = args.dataset {
        params.dataset = dataset;
    }
    if let Some(arch) = args.arch {
        params.arch = arch;
    }
    if let Some(loss) = args.loss {
        params.loss = loss;
    }
    if let Some(optim) = args.optim {
        params.optim = optim;
    }
    if let Some(mode) = args.mode {
        params.mode = mode;
    }
    if let Some(epochs) = args.epochs {
        params.epochs = epochs;
    }
    if let Some(pretrain) = args.pretrain {
        params.pretrain = pretrain;
    }
    if let Some(sat_momentum) = args.sat_momentum {
        params.sat_momentum = sat_momentum;
    }
    if let Some(entropy) = args.entropy {
        params.entropy = entropy;
    }
    if let Some(train_batch) = args.train_batch {
        params.train_batch = train_batch;
    }
    if let Some(schedule) = &args.schedule {
        params.schedule = schedule.clone();
    }
    if let Some(ppm) = args.ppm {
        params.ppm = ppm;
    }
    if let Some(rate) = args.dropoutrate {
        params.dropoutrate = Some(rate);
    }
    if let Some(num_classes) = args.num_classes {
        params.num_classes = num_classes;
    }
    params.seed = args.seed;

    params
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if args.evaluate && args.train_only {
        return Err(AppError::ConflictingPhases.into());
    }

    let config = match &args.config {
        Some(path) => LauncherConfig::from_path(path).map_err(AppError::from)?,
        None => LauncherConfig::load().map_err(AppError::from)?,
    };

    let params = resolve_params(&args);

    // the trainer silently ignores these combinations; flag them up front
    if args.num_classes.is_some() && params.dataset != Dataset::ImagenetSubset {
        warn!(
            "--num-classes only applies to imagenet_subset; {} fixes its own class count",
            params.dataset
        );
    }
    if params.dropoutrate.is_some() && !params.arch.supports_dropout() {
        warn!(
            "--dropoutrate has no effect on {}; only the dropout architecture family consumes it",
            params.arch
        );
    }

    let opts = RunOptions {
        evaluate_only: args.evaluate,
        train_only: args.train_only,
        dry_run: args.dry_run,
    };

    if let Some(seeds) = &args.seeds {
        info!("Starting sweep over {} seeds", seeds.len());

        let report = api::run_sweep(&config, &params, seeds, &opts, true)?;

        info!("Sweep complete!");
        info!("Completed: {}", report.completed);
        info!("Errors: {}", report.errors);
    } else {
        let report = api::run_experiment(&config, &params, &opts)?;
        if !args.dry_run {
            info!("Successfully finished: {}\n", report.save_dir.display());
        }
    }

    Ok(())
}
