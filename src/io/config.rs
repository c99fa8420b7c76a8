use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::Result;

const DEFAULT_CONFIG_NAME: &str = "satrun.toml";
const CONFIG_ENV: &str = "SATRUN_CONFIG";

/// Launcher-side configuration: where the external trainer lives and where
/// run artifacts go. Everything has a working default; a `satrun.toml` next
/// to the invocation (or pointed at by `SATRUN_CONFIG`) overrides fields
/// selectively.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Interpreter used to run the trainer script
    pub python_bin: PathBuf,
    /// Path to the external trainer entrypoint
    pub train_script: PathBuf,
    /// Directory under which per-run save directories are created
    pub runs_root: PathBuf,
    /// Name of the teed console log inside each save directory
    pub log_name: String,
    /// Extra arguments appended verbatim to every trainer invocation
    pub trainer_args: Vec<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            python_bin: PathBuf::from("python"),
            train_script: PathBuf::from("train.py"),
            runs_root: PathBuf::from("runs"),
            log_name: "launch.log".to_string(),
            trainer_args: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct LauncherConfigFile {
    python_bin: Option<String>,
    train_script: Option<String>,
    runs_root: Option<String>,
    log_name: Option<String>,
    trainer: Option<TrainerSection>,
}

#[derive(Debug, Deserialize, Default)]
struct TrainerSection {
    args: Option<Vec<String>>,
}

impl LauncherConfig {
    /// Resolve the config: `SATRUN_CONFIG` if set, else `./satrun.toml`,
    /// else built-in defaults. A missing file is fine; an unreadable or
    /// malformed one is an error.
    pub fn load() -> Result<Self> {
        let path = match std::env::var(CONFIG_ENV) {
            Ok(p) => PathBuf::from(p),
            Err(_) => PathBuf::from(DEFAULT_CONFIG_NAME),
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_path(&path)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: LauncherConfigFile = toml::from_str(&raw)?;
        let cfg = Self::from_file(file);
        cfg.warn_if_invalid();
        Ok(cfg)
    }

    fn from_file(file: LauncherConfigFile) -> Self {
        let defaults = Self::default();
        LauncherConfig {
            python_bin: file
                .python_bin
                .map(|v| expand_path(&v))
                .unwrap_or(defaults.python_bin),
            train_script: file
                .train_script
                .map(|v| expand_path(&v))
                .unwrap_or(defaults.train_script),
            runs_root: file
                .runs_root
                .map(|v| expand_path(&v))
                .unwrap_or(defaults.runs_root),
            log_name: file
                .log_name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(defaults.log_name),
            trainer_args: file.trainer.and_then(|t| t.args).unwrap_or_default(),
        }
    }

    fn warn_if_invalid(&self) {
        if self.python_bin.as_os_str().is_empty() {
            warn!("config: python_bin is empty; runs will fail to launch");
        }
        if self.train_script.as_os_str().is_empty() {
            warn!("config: train_script is empty; runs will fail to launch");
        }
    }
}

/// `~` and `${VAR}` expansion for configured paths.
fn expand_path(raw: &str) -> PathBuf {
    let mut out = raw.to_string();
    if let Some(stripped) = out.strip_prefix("~") {
        if let Ok(home) = std::env::var("HOME") {
            out = format!("{home}{stripped}");
        }
    }
    PathBuf::from(expand_env(&out))
}

fn expand_env(input: &str) -> String {
    let mut out = String::new();
    let mut rest = input;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find('}') {
            Some(end) => {
                let key = &rest[start + 2..start + 2 + end];
                match std::env::var(key) {
                    Ok(val) => out.push_str(&val),
                    // leave unknown variables in place
                    Err(_) => out.push_str(&format!("${{{key}}}")),
                }
                rest = &rest[start + 2 + end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
