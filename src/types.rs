//! Shared types and enums used across SATRUN.
//! Includes `Dataset`, `Architecture`, `LossFn`, `Optimizer`, `RunMode`, and
//! `Phase`. Value enums parse from and render to the exact spellings the
//! external trainer consumes on its command line.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum Dataset {
    Cifar10,
    Imagenet100,
    #[value(name = "imagenet_subset")]
    ImagenetSubset,
    Imagenet,
    Cars,
    Food,
}

impl Dataset {
    /// Class count fixed by the dataset; `None` for the subset dataset,
    /// where the count is a run parameter.
    pub fn num_classes(&self) -> Option<u32> {
        match self {
            Dataset::Cifar10 => Some(10),
            Dataset::Imagenet100 => Some(100),
            Dataset::ImagenetSubset => None,
            Dataset::Imagenet => Some(1000),
            Dataset::Cars => Some(196),
            Dataset::Food => Some(101),
        }
    }

    /// Input resolution the trainer feeds the model for this dataset.
    pub fn input_size(&self) -> u32 {
        match self {
            Dataset::Cifar10 => 32,
            _ => 224,
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Dataset::Cifar10 => "cifar10",
            Dataset::Imagenet100 => "imagenet100",
            Dataset::ImagenetSubset => "imagenet_subset",
            Dataset::Imagenet => "imagenet",
            Dataset::Cars => "cars",
            Dataset::Food => "food",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Architecture {
    Vgg16,
    Vgg16Bn,
    Resnet34,
    Resnetdo34,
    EfficientNet,
    Resnext50,
    RegnetX400mf,
    RegnetX800mf,
    RegnetX1_6gf,
    ShufflenetV2X1_0,
    ShufflenetV2X1_5,
}

impl Architecture {
    /// Trainer-side identifier. Underscore spellings are part of the
    /// external contract and must not be kebab-cased.
    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::Vgg16 => "vgg16",
            Architecture::Vgg16Bn => "vgg16_bn",
            Architecture::Resnet34 => "resnet34",
            Architecture::Resnetdo34 => "resnetdo34",
            Architecture::EfficientNet => "EfficientNet",
            Architecture::Resnext50 => "resnext50_32x4d",
            Architecture::RegnetX400mf => "regnet_x_400mf",
            Architecture::RegnetX800mf => "regnet_x_800mf",
            Architecture::RegnetX1_6gf => "regnet_x_1_6gf",
            Architecture::ShufflenetV2X1_0 => "shufflenet_v2_x1_0",
            Architecture::ShufflenetV2X1_5 => "shufflenet_v2_x1_5",
        }
    }

    /// Whether the trainer threads a dropout rate through this architecture.
    pub fn supports_dropout(&self) -> bool {
        matches!(self, Architecture::Resnetdo34)
    }
}

// Manual implementation for ValueEnum: the accepted spellings are the
// trainer's own, not clap's kebab-case derivation
impl clap::ValueEnum for Architecture {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Architecture::Vgg16,
            Architecture::Vgg16Bn,
            Architecture::Resnet34,
            Architecture::Resnetdo34,
            Architecture::EfficientNet,
            Architecture::Resnext50,
            Architecture::RegnetX400mf,
            Architecture::RegnetX800mf,
            Architecture::RegnetX1_6gf,
            Architecture::ShufflenetV2X1_0,
            Architecture::ShufflenetV2X1_5,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum LossFn {
    Ce,
    Sat,
    #[value(name = "sat_entropy")]
    SatEntropy,
    Gambler,
    Max,
}

impl LossFn {
    /// Self-adaptive-training losses carry the sat-momentum hyperparameter.
    pub fn is_sat(&self) -> bool {
        matches!(self, LossFn::Sat | LossFn::SatEntropy)
    }
}

impl std::fmt::Display for LossFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LossFn::Ce => "ce",
            LossFn::Sat => "sat",
            LossFn::SatEntropy => "sat_entropy",
            LossFn::Gambler => "gambler",
            LossFn::Max => "max",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum Optimizer {
    #[value(name = "sgdori")]
    SgdOri,
    #[value(name = "sgd1e-3")]
    Sgd1e3,
    #[value(name = "sgdconst")]
    SgdConst,
    Adam,
    Sam,
}

impl std::fmt::Display for Optimizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Optimizer::SgdOri => "sgdori",
            Optimizer::Sgd1e3 => "sgd1e-3",
            Optimizer::SgdConst => "sgdconst",
            Optimizer::Adam => "adam",
            Optimizer::Sam => "sam",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum RunMode {
    Train,
    /// 80/20 split of the training data for hyperparameter tuning
    Tuning,
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RunMode::Train => "train",
            RunMode::Tuning => "tuning",
        };
        write!(f, "{}", s)
    }
}

/// The two sequential trainer invocations of a full run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Phase {
    Train,
    Evaluate,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Phase::Train => "train",
            Phase::Evaluate => "evaluate",
        };
        write!(f, "{}", s)
    }
}
