use std::path::{Path, PathBuf};

use crate::core::params::TrainParams;
use crate::types::{Dataset, LossFn, Phase};

/// One assembled trainer invocation: the interpreter plus its full argv.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainerCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl TrainerCommand {
    pub fn new(program: &Path, script: &Path, mut args: Vec<String>) -> Self {
        let mut argv = vec![script.to_string_lossy().into_owned()];
        argv.append(&mut args);
        Self {
            program: program.to_path_buf(),
            args: argv,
        }
    }

    /// Single-string rendering for dry-run display and the run manifest.
    pub fn shell_line(&self) -> String {
        let mut parts = vec![quote(&self.program.to_string_lossy())];
        parts.extend(self.args.iter().map(|a| quote(a)));
        parts.join(" ")
    }
}

fn quote(arg: &str) -> String {
    if arg.is_empty() || arg.contains(char::is_whitespace) {
        format!("\"{}\"", arg)
    } else {
        arg.to_string()
    }
}

fn push(args: &mut Vec<String>, flag: &str, value: String) {
    args.push(flag.to_string());
    args.push(value);
}

/// Assemble the flag list the external trainer expects for `phase`.
///
/// Rendering is deterministic: flags always appear in the same order, and
/// conditional flags (`--sat-momentum`, `--entropy`, `--num_classes`,
/// `--dropoutrate`, `--evaluate`) appear exactly when the parameters that
/// drive them are in play. `--ppm` is rendered as the literal strings
/// `True`/`False` because the trainer string-compares it.
pub fn trainer_args(params: &TrainParams, save: &str, phase: Phase) -> Vec<String> {
    let mut args = Vec::new();

    push(&mut args, "--dataset", params.dataset.to_string());
    push(&mut args, "--mode", params.mode.to_string());
    push(&mut args, "--epochs", params.epochs.to_string());
    push(&mut args, "--save_model_step", params.save_model_step.to_string());
    push(&mut args, "--train-batch", params.train_batch.to_string());
    push(&mut args, "--test-batch", params.test_batch.to_string());
    push(&mut args, "--workers", params.workers.to_string());
    push(&mut args, "--lr", params.lr.to_string());

    args.push("--schedule".to_string());
    args.extend(params.schedule.iter().map(|e| e.to_string()));

    push(&mut args, "--gamma", params.gamma.to_string());
    push(&mut args, "--momentum", params.momentum.to_string());
    push(&mut args, "--weight-decay", params.weight_decay.to_string());
    push(&mut args, "--pretrain", params.pretrain.to_string());
    push(&mut args, "--save", save.to_string());
    push(&mut args, "--loss", params.loss.to_string());
    if params.loss == LossFn::SatEntropy {
        push(&mut args, "--entropy", params.entropy.to_string());
    }
    if params.loss.is_sat() {
        push(&mut args, "--sat-momentum", params.sat_momentum.to_string());
    }
    push(&mut args, "--arch", params.arch.to_string());
    push(&mut args, "--optim", params.optim.to_string());
    push(
        &mut args,
        "--ppm",
        if params.ppm { "True" } else { "False" }.to_string(),
    );
    if params.dataset == Dataset::ImagenetSubset {
        push(&mut args, "--num_classes", params.num_classes.to_string());
    }
    if let Some(rate) = params.dropoutrate {
        push(&mut args, "--dropoutrate", rate.to_string());
    }
    push(&mut args, "--manualSeed", params.seed.to_string());

    if phase == Phase::Evaluate {
        args.push("--evaluate".to_string());
    }

    args
}
