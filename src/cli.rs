use crate::model::{BuildCommand, RunConfig};
use crate::report;
use crate::runner::BuildRunner;
use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "build-runner",
    version,
    about = "Run `npm run build` and exit with its status"
)]
pub struct Cli {
    /// Directory to run the build in (defaults to the current directory)
    #[arg(long)]
    pub project_dir: Option<std::path::PathBuf>,

    /// Print the command that would run and exit without spawning it
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON run report to stderr after the build exits
    #[arg(long)]
    pub json: bool,

    /// Suppress the runner's own status lines (build output is unaffected)
    #[arg(long)]
    pub silent: bool,
}

/// Build a `RunConfig` from CLI arguments. The command itself is never
/// taken from the caller.
pub fn build_config(args: &Cli) -> RunConfig {
    RunConfig {
        command: BuildCommand::npm_build(),
        project_dir: args.project_dir.clone(),
        dry_run: args.dry_run,
        json: args.json,
        silent: args.silent,
    }
}

/// Run the build and return the status this process should exit with.
pub fn run(args: Cli) -> Result<i32> {
    let cfg = build_config(&args);

    if cfg.dry_run {
        log::info!("dry run, not spawning `{}`", cfg.command.display());
        if !cfg.silent {
            eprintln!("{}", report::dry_run_line(&cfg));
        }
        return Ok(0);
    }

    let mut runner = BuildRunner::new(cfg.clone());
    let completed = runner
        .run()
        .with_context(|| format!("could not run `{}`", cfg.command.display()))?;
    log::debug!("runner finished in state {:?}", runner.state());

    let run_report = completed.to_report(&cfg);
    if !cfg.silent {
        eprintln!("{}", report::status_line(&run_report));
    }
    if cfg.json {
        eprintln!("{}", report::to_json(&run_report)?);
    }

    Ok(completed.outcome.exit_code)
}
