mod exit_status;

use crate::error::RunError;
use crate::model::{BuildCommand, RunConfig, RunOutcome, RunReport, RunState};
use std::process::Command;
use std::time::{Duration, Instant};

/// A finished run: how it ended plus when and how long.
#[derive(Debug, Clone)]
pub struct CompletedRun {
    pub outcome: RunOutcome,
    pub started_utc: String,
    pub duration: Duration,
}

impl CompletedRun {
    pub fn to_report(&self, cfg: &RunConfig) -> RunReport {
        RunReport {
            started_utc: self.started_utc.clone(),
            program: cfg.command.program.clone(),
            args: cfg.command.args.clone(),
            project_dir: cfg.project_dir.clone(),
            exit_code: self.outcome.exit_code,
            signal: self.outcome.signal,
            success: self.outcome.success(),
            duration_ms: self.duration.as_millis() as u64,
        }
    }
}

pub struct BuildRunner {
    cfg: RunConfig,
    state: RunState,
}

impl BuildRunner {
    pub fn new(cfg: RunConfig) -> Self {
        Self {
            cfg,
            state: RunState::NotStarted,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    fn transition(&mut self, next: RunState) {
        log::debug!("run state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Build the OS command. Arguments go straight to argv; nothing is
    /// interpreted by a shell. Standard streams are inherited.
    fn command(&self) -> Result<Command, RunError> {
        let BuildCommand { program, args } = &self.cfg.command;
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = self.cfg.project_dir.as_deref() {
            if !dir.is_dir() {
                return Err(RunError::ProjectDir(dir.to_path_buf()));
            }
            cmd.current_dir(dir);
        }
        Ok(cmd)
    }

    /// Launch the command and block until it exits.
    ///
    /// A runner is single-shot: once it has completed, calling `run` again
    /// launches a fresh child and overwrites the recorded state.
    pub fn run(&mut self) -> Result<CompletedRun, RunError> {
        let program = self.cfg.command.program.clone();
        let mut cmd = self.command()?;

        log::info!("running `{}`", self.cfg.command.display());
        let started_utc = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| "now".into());
        let start = Instant::now();

        let mut child = cmd
            .spawn()
            .map_err(|e| RunError::from_spawn(&program, e))?;
        self.transition(RunState::Running { pid: child.id() });

        let status = child
            .wait()
            .map_err(|source| RunError::Wait { program, source })?;
        let duration = start.elapsed();
        let outcome = exit_status::outcome_from_status(status);
        if let Some(sig) = outcome.signal {
            log::warn!(
                "`{}` terminated by signal {sig}",
                self.cfg.command.display()
            );
        }
        self.transition(RunState::Completed {
            exit_code: outcome.exit_code,
        });

        Ok(CompletedRun {
            outcome,
            started_utc,
            duration,
        })
    }
}
