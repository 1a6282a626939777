//! Runs every report generator in turn as a child process.

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::reports::ReportKind;

/// Generators in run order.
pub fn generators() -> impl Iterator<Item = &'static str> {
    ReportKind::ALL.into_iter().map(ReportKind::binary_name)
}

#[derive(Debug)]
pub enum ChildOutcome {
    Success,
    /// Exit code, `None` when killed by a signal.
    Failed(Option<i32>),
    SpawnError(io::Error),
}

impl ChildOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ChildOutcome::Success)
    }
}

/// `name` next to the running executable.
pub fn sibling_path(name: &str) -> io::Result<PathBuf> {
    let exe = env::current_exe()?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(format!("{name}{}", env::consts::EXE_SUFFIX)))
}

/// Run `program` with inherited stdio and wait for it.
pub fn run_program(program: &Path) -> ChildOutcome {
    debug!(program = %program.display(), "starting");
    match Command::new(program).status() {
        Ok(status) if status.success() => ChildOutcome::Success,
        Ok(status) => ChildOutcome::Failed(status.code()),
        Err(e) => ChildOutcome::SpawnError(e),
    }
}

/// Run each program, report its result and go on with the next one
/// regardless. Returns how many failed.
pub fn run_all<'a>(programs: impl IntoIterator<Item = &'a Path>) -> usize {
    let mut failed = 0;
    for program in programs {
        let name = program.display();
        match run_program(program) {
            ChildOutcome::Success => println!("'{name}' executed successfully."),
            ChildOutcome::Failed(Some(code)) => {
                failed += 1;
                println!("'{name}' failed with return code: {code}");
            }
            ChildOutcome::Failed(None) => {
                failed += 1;
                println!("'{name}' was terminated by a signal");
            }
            ChildOutcome::SpawnError(e) => {
                failed += 1;
                warn!(program = %name, error = %e, "could not start");
                println!("Error: could not run '{name}': {e}");
            }
        }
    }
    failed
}
