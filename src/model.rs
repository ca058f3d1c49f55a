use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[cfg(windows)]
const NPM_PROGRAM: &str = "npm.cmd";
#[cfg(not(windows))]
const NPM_PROGRAM: &str = "npm";

/// A program plus its argument vector, handed to the OS as-is (no shell).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl BuildCommand {
    /// The fixed `npm run build` invocation.
    pub fn npm_build() -> Self {
        Self {
            program: NPM_PROGRAM.to_string(),
            args: vec!["run".to_string(), "build".to_string()],
        }
    }

    /// Render the command for log and status lines.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub command: BuildCommand,
    #[serde(default)]
    pub project_dir: Option<PathBuf>,
    pub dry_run: bool,
    pub json: bool,
    pub silent: bool,
}

/// Lifecycle of a single build run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    NotStarted,
    Running { pid: u32 },
    Completed { exit_code: i32 },
}

/// How the child terminated, reduced to what the caller needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Status this process should exit with.
    pub exit_code: i32,
    /// Signal number when the child was killed rather than exiting (unix only).
    pub signal: Option<i32>,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub started_utc: String,
    pub program: String,
    pub args: Vec<String>,
    #[serde(default)]
    pub project_dir: Option<PathBuf>,
    pub exit_code: i32,
    #[serde(default)]
    pub signal: Option<i32>,
    pub success: bool,
    pub duration_ms: u64,
}
