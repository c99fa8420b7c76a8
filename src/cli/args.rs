use clap::Parser;
use std::path::PathBuf;

use satrun::core::presets::Preset;
use satrun::{Architecture, Dataset, LossFn, Optimizer, RunMode};

#[derive(Parser)]
#[command(name = "satrun", version, about = "SATRUN training launcher")]
pub struct CliArgs {
    /// Experiment preset mirroring one of the original run scripts
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,

    /// Manual random seed, embedded in the derived save path
    #[arg(short, long, default_value_t = 100)]
    pub seed: u64,

    /// Seeds for sweep mode: one full run per seed
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub seeds: Option<Vec<u64>>,

    /// Model architecture override
    #[arg(short, long, value_enum)]
    pub arch: Option<Architecture>,

    /// Class-count override (consumed by imagenet_subset only)
    #[arg(short = 'n', long)]
    pub num_classes: Option<u32>,

    /// Dataset override
    #[arg(short, long, value_enum)]
    pub dataset: Option<Dataset>,

    /// Loss function override
    #[arg(long, value_enum)]
    pub loss: Option<LossFn>,

    /// Optimizer override
    #[arg(long, value_enum)]
    pub optim: Option<Optimizer>,

    /// Total epochs override
    #[arg(long)]
    pub epochs: Option<u32>,

    /// Cross-entropy pretraining epochs override
    #[arg(long)]
    pub pretrain: Option<u32>,

    /// Momentum for the self-adaptive-training losses
    #[arg(long)]
    pub sat_momentum: Option<f64>,

    /// Entropy coefficient for the sat_entropy loss
    #[arg(long)]
    pub entropy: Option<f64>,

    /// Train batch size override
    #[arg(long)]
    pub train_batch: Option<u32>,

    /// LR schedule override (epochs at which LR is multiplied by gamma)
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub schedule: Option<Vec<u32>>,

    /// Use the paper model definitions (true/false)
    #[arg(long)]
    pub ppm: Option<bool>,

    /// Dropout rate (dropout architecture family only)
    #[arg(long)]
    pub dropoutrate: Option<f64>,

    /// Run mode (train, or tuning for an 80/20 hyperparameter split)
    #[arg(long, value_enum)]
    pub mode: Option<RunMode>,

    /// Evaluate an already-trained checkpoint instead of training
    #[arg(short, long, default_value_t = false)]
    pub evaluate: bool,

    /// Run the training phase only, skipping evaluation
    #[arg(long, default_value_t = false)]
    pub train_only: bool,

    /// Print the assembled trainer commands without launching
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Launcher config file (defaults to ./satrun.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
