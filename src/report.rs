//! Status lines for the runner's own output.
//!
//! Child stdout is inherited, so everything here is meant for stderr.

use crate::model::{RunConfig, RunReport};
use anyhow::Result;
use std::time::Duration;

/// One-line human summary of a finished run.
pub(crate) fn status_line(report: &RunReport) -> String {
    // Millisecond resolution keeps humantime from printing micro/nanoseconds.
    let elapsed = humantime::format_duration(Duration::from_millis(report.duration_ms));
    match report.signal {
        Some(sig) => format!(
            "build terminated by signal {sig} after {elapsed} (exit {})",
            report.exit_code
        ),
        None if report.success => format!("build finished: exit 0 in {elapsed}"),
        None => format!("build failed: exit {} in {elapsed}", report.exit_code),
    }
}

pub(crate) fn dry_run_line(cfg: &RunConfig) -> String {
    match cfg.project_dir.as_deref() {
        Some(dir) => format!("would run `{}` in {}", cfg.command.display(), dir.display()),
        None => format!("would run `{}`", cfg.command.display()),
    }
}

pub(crate) fn to_json(report: &RunReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BuildCommand;

    fn report(exit_code: i32, signal: Option<i32>) -> RunReport {
        RunReport {
            started_utc: "2026-01-01T00:00:00Z".into(),
            program: "npm".into(),
            args: vec!["run".into(), "build".into()],
            project_dir: None,
            exit_code,
            signal,
            success: exit_code == 0,
            duration_ms: 1_200,
        }
    }

    #[test]
    fn status_line_variants() {
        assert_eq!(status_line(&report(0, None)), "build finished: exit 0 in 1s 200ms");
        assert_eq!(status_line(&report(2, None)), "build failed: exit 2 in 1s 200ms");
        assert_eq!(
            status_line(&report(143, Some(15))),
            "build terminated by signal 15 after 1s 200ms (exit 143)"
        );
    }

    #[test]
    fn dry_run_mentions_directory() {
        let mut cfg = RunConfig {
            command: BuildCommand {
                program: "npm".into(),
                args: vec!["run".into(), "build".into()],
            },
            project_dir: None,
            dry_run: true,
            json: false,
            silent: false,
        };
        assert_eq!(dry_run_line(&cfg), "would run `npm run build`");
        cfg.project_dir = Some("web".into());
        assert_eq!(dry_run_line(&cfg), "would run `npm run build` in web");
    }

    #[test]
    fn json_report_fields() {
        let v: serde_json::Value = serde_json::from_str(&to_json(&report(2, None)).unwrap()).unwrap();
        assert_eq!(v["exit_code"], 2);
        assert_eq!(v["success"], false);
        assert_eq!(v["args"], serde_json::json!(["run", "build"]));
        assert!(v["signal"].is_null());
    }
}
