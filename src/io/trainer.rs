use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::core::command::TrainerCommand;
use crate::error::{Error, Result};

/// Run one trainer invocation to completion, teeing its stdout line by line
/// to both the console and `log_path`.
///
/// The log file is opened in append mode: the evaluate phase of a run lands
/// in the same file as its train phase, and re-running never truncates an
/// existing log. Stderr passes straight through to the console.
pub fn run_teed(command: &TrainerCommand, log_path: &Path) -> Result<ExitStatus> {
    let mut log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    debug!("spawning: {}", command.shell_line());
    let mut child = Command::new(&command.program)
        .args(&command.args)
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| Error::Spawn {
            program: command.program.to_string_lossy().into_owned(),
            source,
        })?;

    // stdout is piped, so take() always yields a handle here
    if let Some(stdout) = child.stdout.take() {
        let reader = BufReader::new(stdout);
        for line in reader.lines() {
            let line = line?;
            println!("{}", line);
            writeln!(log, "{}", line)?;
        }
    }
    log.flush()?;

    Ok(child.wait()?)
}
