//! Pass-through execution of a raw command line inside a working directory,
//! delegated to the `launch.sh` collaborator script.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use log::debug;

const RUNNER_SCRIPT: &str = include_str!("../../launch.sh");
const RUNNER_NAME: &str = "launch.sh";

/// Executes a raw command line inside an absolute working directory.
pub trait Launch {
    /// Runs the command and returns the child's exit code unmodified.
    fn launch(&self, directory: &Path, command: &str) -> Result<i32>;
}

/// Hands `<directory> <command>` to the wrapper script as positional
/// arguments; the script `cd`s and execs, inheriting stdio.
pub struct ScriptLauncher {
    script: PathBuf,
}

impl ScriptLauncher {
    /// Finds the wrapper script next to the executable, materializing the
    /// built-in copy in the temp directory when none is installed.
    pub fn locate() -> Result<Self> {
        if let Ok(exe) = env::current_exe() {
            if let Some(dir) = exe.parent() {
                let installed = dir.join(RUNNER_NAME);
                if installed.exists() {
                    return Ok(Self { script: installed });
                }
            }
        }
        // Per-process name so concurrent instances never clobber each other.
        let fallback = env::temp_dir().join(format!("appdock-launch-{}.sh", std::process::id()));
        fs::write(&fallback, RUNNER_SCRIPT)
            .with_context(|| format!("Failed to write runner script to {}", fallback.display()))?;
        Ok(Self { script: fallback })
    }

    pub fn script_path(&self) -> &Path {
        &self.script
    }
}

impl Launch for ScriptLauncher {
    fn launch(&self, directory: &Path, command: &str) -> Result<i32> {
        debug!(
            "launching '{}' in {} via {}",
            command,
            directory.display(),
            self.script.display()
        );
        let status = Command::new("bash")
            .arg(&self.script)
            .arg(directory)
            .arg(command)
            .status()
            .with_context(|| format!("Failed to run {}", self.script.display()))?;
        Ok(status
            .code()
            .unwrap_or(if status.success() { 0 } else { 1 }))
    }
}
