//! CLI surface checks against the real binary.
use std::process::{Command, Output};

fn satrun(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_satrun"))
        .args(args)
        .env_remove("SATRUN_CONFIG")
        .output()
        .expect("spawn satrun")
}

#[test]
fn seed_override_lands_in_the_save_path() {
    let out = satrun(&["--dry-run", "-s", "123"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("cifar10_resnet34_ce_seed-123"));
    assert!(stdout.contains("--manualSeed 123"));
}

#[test]
fn dry_run_prints_train_then_evaluate() {
    let out = satrun(&["--dry-run"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(!lines[0].contains("--evaluate"));
    assert!(lines[1].ends_with("--evaluate"));
}

#[test]
fn preset_and_overrides_compose() {
    let out = satrun(&[
        "--dry-run",
        "--preset",
        "cifar10-sat",
        "-s",
        "5",
        "--arch",
        "resnet34",
    ]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("cifar10_resnet34_sat_seed-5"));
    assert!(stdout.contains("--loss sat"));
    assert!(stdout.contains("--sat-momentum 0.9"));
    assert!(stdout.contains("--ppm True"));
}

#[test]
fn arch_values_keep_trainer_spellings() {
    let out = satrun(&["--dry-run", "--arch", "vgg16_bn"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("--arch vgg16_bn"));

    // kebab-cased spelling is not part of the contract
    let out = satrun(&["--dry-run", "--arch", "vgg16-bn"]);
    assert!(!out.status.success());
}

#[test]
fn missing_seed_argument_aborts() {
    let out = satrun(&["--dry-run", "-s"]);
    assert!(!out.status.success());
    assert!(!String::from_utf8_lossy(&out.stderr).is_empty());
}

#[test]
fn unknown_flag_aborts() {
    let out = satrun(&["--dry-run", "--frobnicate"]);
    assert!(!out.status.success());
}

#[test]
fn conflicting_phase_flags_abort() {
    let out = satrun(&["--dry-run", "--evaluate", "--train-only"]);
    assert!(!out.status.success());
}

#[test]
fn evaluate_only_emits_a_single_command() {
    let out = satrun(&["--dry-run", "--evaluate"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("--evaluate"));
}

#[test]
fn sweep_dry_run_covers_every_seed() {
    let out = satrun(&["--dry-run", "--seeds", "100,200,300"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    for seed in [100, 200, 300] {
        assert!(stdout.contains(&format!("seed-{seed}")));
    }
}
