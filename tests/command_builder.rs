use satrun::{
    Architecture, Dataset, LossFn, Phase, RunOptions, TrainParams, build_commands, trainer_args,
};
use satrun::{LauncherConfig, TrainerCommand};

fn shell_line(params: &TrainParams, save: &str, phase: Phase) -> String {
    TrainerCommand::new(
        "python".as_ref(),
        "train.py".as_ref(),
        trainer_args(params, save, phase),
    )
    .shell_line()
}

#[test]
fn default_train_phase_uses_trainer_defaults() {
    let line = shell_line(
        &TrainParams::default(),
        "runs/cifar10_resnet34_ce_seed-100",
        Phase::Train,
    );
    let expected = "python train.py --dataset cifar10 --mode train --epochs 300 \
--save_model_step 25 --train-batch 64 --test-batch 200 --workers 8 --lr 0.1 \
--schedule 25 50 75 100 125 150 175 200 225 250 275 300 325 350 375 400 425 450 475 500 \
--gamma 0.5 --momentum 0.9 --weight-decay 0.0005 --pretrain 0 \
--save runs/cifar10_resnet34_ce_seed-100 --loss ce --arch resnet34 --optim sgdori \
--ppm False --manualSeed 100";
    assert_eq!(line, expected);
}

#[test]
fn evaluate_phase_appends_exactly_one_flag() {
    let params = TrainParams::default();
    let train = shell_line(&params, "runs/x", Phase::Train);
    let eval = shell_line(&params, "runs/x", Phase::Evaluate);
    assert_eq!(eval, format!("{train} --evaluate"));
}

#[test]
fn sat_loss_carries_its_momentum() {
    let params = TrainParams {
        loss: LossFn::Sat,
        sat_momentum: 0.99,
        ..TrainParams::default()
    };
    let line = shell_line(&params, "runs/x", Phase::Train);
    assert!(line.contains("--loss sat --sat-momentum 0.99"));

    let ce = shell_line(&TrainParams::default(), "runs/x", Phase::Train);
    assert!(!ce.contains("--sat-momentum"));
}

#[test]
fn sat_entropy_loss_carries_entropy_and_momentum() {
    let params = TrainParams {
        loss: LossFn::SatEntropy,
        entropy: 0.1,
        ..TrainParams::default()
    };
    let line = shell_line(&params, "runs/x", Phase::Train);
    assert!(line.contains("--loss sat_entropy --entropy 0.1 --sat-momentum 0.9"));
}

#[test]
fn ppm_renders_as_python_literal() {
    let params = TrainParams {
        ppm: true,
        ..TrainParams::default()
    };
    assert!(shell_line(&params, "runs/x", Phase::Train).contains("--ppm True"));
    assert!(
        shell_line(&TrainParams::default(), "runs/x", Phase::Train).contains("--ppm False")
    );
}

#[test]
fn subset_dataset_passes_class_count() {
    let params = TrainParams {
        dataset: Dataset::ImagenetSubset,
        num_classes: 50,
        ..TrainParams::default()
    };
    assert!(shell_line(&params, "runs/x", Phase::Train).contains("--num_classes 50"));

    // every other dataset fixes its own count
    let cifar = shell_line(&TrainParams::default(), "runs/x", Phase::Train);
    assert!(!cifar.contains("--num_classes"));
}

#[test]
fn dropout_rate_is_passed_when_set() {
    let params = TrainParams {
        arch: Architecture::Resnetdo34,
        dropoutrate: Some(0.3),
        ..TrainParams::default()
    };
    let line = shell_line(&params, "runs/x", Phase::Train);
    assert!(line.contains("--arch resnetdo34"));
    assert!(line.contains("--dropoutrate 0.3"));
}

#[test]
fn assembly_is_deterministic() {
    let params = TrainParams::default();
    assert_eq!(
        trainer_args(&params, "runs/x", Phase::Train),
        trainer_args(&params, "runs/x", Phase::Train)
    );
}

#[test]
fn build_commands_produces_train_then_evaluate() {
    let config = LauncherConfig::default();
    let commands = build_commands(&config, &TrainParams::default(), &RunOptions::default());

    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0].0, Phase::Train);
    assert_eq!(commands[1].0, Phase::Evaluate);
    assert!(commands[1].1.shell_line().ends_with("--evaluate"));

    // both phases target the same save directory
    let save = "runs/cifar10_resnet34_ce_seed-100";
    assert!(commands[0].1.shell_line().contains(save));
    assert!(commands[1].1.shell_line().contains(save));
}

#[test]
fn evaluate_only_skips_the_train_phase() {
    let opts = RunOptions {
        evaluate_only: true,
        ..RunOptions::default()
    };
    let commands = build_commands(&LauncherConfig::default(), &TrainParams::default(), &opts);
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].0, Phase::Evaluate);
}

#[test]
fn extra_trainer_args_are_appended_verbatim() {
    let config = LauncherConfig {
        trainer_args: vec!["--rewards".to_string(), "2.2".to_string()],
        ..LauncherConfig::default()
    };
    let commands = build_commands(&config, &TrainParams::default(), &RunOptions::default());
    for (_, command) in &commands {
        let line = command.shell_line();
        // appended after everything the launcher assembles itself
        assert!(line.contains("--rewards 2.2"));
    }
}
