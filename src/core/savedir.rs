use std::path::{Path, PathBuf};

use crate::core::params::TrainParams;
use crate::types::{Dataset, LossFn};

/// Derive the save-directory name for a run.
///
/// The name is a deterministic, collision-free function of every parameter
/// that distinguishes one run's artifacts from another's:
///
/// ```text
/// {dataset}_{arch}_{loss}[_entropy_coeff-{c}][_do{rate}][_nClasses-{n}]_seed-{seed}
/// ```
///
/// e.g. `cifar10_vgg16_bn_ce_seed-100`. The optional components only appear
/// when the corresponding parameter is in play, so runs differing in dropout
/// rate, entropy coefficient or subset class count never share a directory.
pub fn save_name(params: &TrainParams) -> String {
    let mut name = format!("{}_{}_{}", params.dataset, params.arch, params.loss);

    if params.loss == LossFn::SatEntropy {
        name.push_str(&format!("_entropy_coeff-{}", params.entropy));
    }
    if let Some(rate) = params.dropoutrate {
        name.push_str(&format!("_do{}", rate));
    }
    if params.dataset == Dataset::ImagenetSubset {
        name.push_str(&format!("_nClasses-{}", params.num_classes));
    }

    name.push_str(&format!("_seed-{}", params.seed));
    name
}

/// Save directory under the configured runs root.
pub fn save_path(runs_root: &Path, params: &TrainParams) -> PathBuf {
    runs_root.join(save_name(params))
}
