use serde::{Deserialize, Serialize};

use crate::types::{Architecture, Dataset, LossFn, Optimizer, RunMode};

/// Full hyperparameter set for one training run, suitable for config files
/// and presets. Defaults mirror the external trainer's own argparse defaults
/// so an unmodified `TrainParams` launches the trainer's baseline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainParams {
    pub dataset: Dataset,
    pub arch: Architecture,
    pub loss: LossFn,
    pub optim: Optimizer,
    pub mode: RunMode,
    /// Manual seed, embedded in the derived save path
    pub seed: u64,
    pub epochs: u32,
    /// Epochs of plain cross-entropy before the selected loss takes over
    pub pretrain: u32,
    pub train_batch: u32,
    pub test_batch: u32,
    pub lr: f64,
    /// LR is multiplied by gamma at each scheduled epoch
    pub gamma: f64,
    pub schedule: Vec<u32>,
    pub momentum: f64,
    /// Momentum for the self-adaptive-training losses
    pub sat_momentum: f64,
    pub weight_decay: f64,
    /// Entropy coefficient, consumed by the sat_entropy loss only
    pub entropy: f64,
    /// Class count for imagenet_subset; fixed by the dataset otherwise
    pub num_classes: u32,
    /// Use the paper model definitions instead of the torchvision ones
    pub ppm: bool,
    /// Dropout rate for the dropout architecture family
    pub dropoutrate: Option<f64>,
    pub workers: u32,
    pub save_model_step: u32,
}

impl Default for TrainParams {
    fn default() -> Self {
        Self {
            dataset: Dataset::Cifar10,
            arch: Architecture::Resnet34,
            loss: LossFn::Ce,
            optim: Optimizer::SgdOri,
            mode: RunMode::Train,
            seed: 100,
            epochs: 300,
            pretrain: 0,
            train_batch: 64,
            test_batch: 200,
            lr: 0.1,
            gamma: 0.5,
            schedule: (1..=20).map(|i| i * 25).collect(),
            momentum: 0.9,
            sat_momentum: 0.9,
            weight_decay: 5e-4,
            entropy: 0.0,
            num_classes: 150,
            ppm: false,
            dropoutrate: None,
            workers: 8,
            save_model_step: 25,
        }
    }
}
