use std::fs;
use std::path::PathBuf;

use satrun::LauncherConfig;

fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("satrun.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn defaults_cover_every_field() {
    let cfg = LauncherConfig::default();
    assert_eq!(cfg.python_bin, PathBuf::from("python"));
    assert_eq!(cfg.train_script, PathBuf::from("train.py"));
    assert_eq!(cfg.runs_root, PathBuf::from("runs"));
    assert_eq!(cfg.log_name, "launch.log");
    assert!(cfg.trainer_args.is_empty());
}

#[test]
fn loads_minimal_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "python_bin = \"python3\"\n");
    let cfg = LauncherConfig::from_path(&path).expect("load config");
    assert_eq!(cfg.python_bin, PathBuf::from("python3"));
    // unset fields keep their defaults
    assert_eq!(cfg.train_script, PathBuf::from("train.py"));
    assert_eq!(cfg.log_name, "launch.log");
}

#[test]
fn loads_full_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
python_bin = "python3"
train_script = "vendor/train.py"
runs_root = "artifacts/runs"
log_name = "console.log"

[trainer]
args = ["--rewards", "2.2"]
"#,
    );
    let cfg = LauncherConfig::from_path(&path).expect("load config");
    assert_eq!(cfg.train_script, PathBuf::from("vendor/train.py"));
    assert_eq!(cfg.runs_root, PathBuf::from("artifacts/runs"));
    assert_eq!(cfg.log_name, "console.log");
    assert_eq!(cfg.trainer_args, vec!["--rewards", "2.2"]);
}

#[test]
fn blank_log_name_falls_back_to_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "log_name = \"  \"\n");
    let cfg = LauncherConfig::from_path(&path).expect("load config");
    assert_eq!(cfg.log_name, "launch.log");
}

#[test]
fn malformed_toml_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "python_bin = [not toml\n");
    assert!(LauncherConfig::from_path(&path).is_err());
}

#[test]
fn missing_file_is_an_error_when_named_explicitly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nope.toml");
    assert!(LauncherConfig::from_path(&path).is_err());
}
