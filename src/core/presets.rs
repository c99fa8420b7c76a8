use clap::ValueEnum;

use crate::core::params::TrainParams;
use crate::types::{Architecture, Dataset, LossFn};

/// Named experiment presets, one per wrapper-script family this launcher
/// replaces. A preset is a starting point; any field can still be
/// overridden from the CLI.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum Preset {
    /// CIFAR-10 cross-entropy baseline on VGG16-BN
    Cifar10Ce,
    /// CIFAR-10 self-adaptive training on VGG16-BN
    Cifar10Sat,
    /// ImageNet-100 self-adaptive training on ResNet-34
    Imagenet100Sat,
    /// ImageNet subset (parameterized class count) on ResNet-34
    ImagenetSubsetSat,
    /// Stanford Cars on ResNet-34
    CarsSat,
    /// Food-101 on ResNet-34
    FoodSat,
}

impl Preset {
    pub fn params(&self) -> TrainParams {
        match self {
            Preset::Cifar10Ce => TrainParams {
                dataset: Dataset::Cifar10,
                arch: Architecture::Vgg16Bn,
                loss: LossFn::Ce,
                ppm: true,
                ..TrainParams::default()
            },
            Preset::Cifar10Sat => TrainParams {
                dataset: Dataset::Cifar10,
                arch: Architecture::Vgg16Bn,
                loss: LossFn::Sat,
                ppm: true,
                pretrain: 100,
                ..TrainParams::default()
            },
            Preset::Imagenet100Sat => TrainParams {
                dataset: Dataset::Imagenet100,
                arch: Architecture::Resnet34,
                loss: LossFn::Sat,
                pretrain: 100,
                epochs: 500,
                ..TrainParams::default()
            },
            Preset::ImagenetSubsetSat => TrainParams {
                dataset: Dataset::ImagenetSubset,
                arch: Architecture::Resnet34,
                loss: LossFn::Sat,
                pretrain: 100,
                epochs: 500,
                ..TrainParams::default()
            },
            Preset::CarsSat => TrainParams {
                dataset: Dataset::Cars,
                arch: Architecture::Resnet34,
                loss: LossFn::Sat,
                pretrain: 100,
                ..TrainParams::default()
            },
            Preset::FoodSat => TrainParams {
                dataset: Dataset::Food,
                arch: Architecture::Resnet34,
                loss: LossFn::Sat,
                pretrain: 100,
                ..TrainParams::default()
            },
        }
    }
}
