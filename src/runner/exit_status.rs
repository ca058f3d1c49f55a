//! Reduce an OS `ExitStatus` to the code this process exits with.

use crate::error::EXIT_FAILURE;
use crate::model::RunOutcome;
use std::process::ExitStatus;

/// Offset added to a signal number, matching what POSIX shells report.
#[cfg(unix)]
const SIGNAL_EXIT_BASE: i32 = 128;

pub fn outcome_from_status(status: ExitStatus) -> RunOutcome {
    if let Some(code) = status.code() {
        return RunOutcome {
            exit_code: code,
            signal: None,
        };
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return RunOutcome {
                exit_code: SIGNAL_EXIT_BASE + sig,
                signal: Some(sig),
            };
        }
    }

    // Neither a code nor a signal; still must not look like success.
    RunOutcome {
        exit_code: EXIT_FAILURE,
        signal: None,
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn normal_exit_code_passes_through() {
        for code in [0, 1, 2, 42, 255] {
            let outcome = outcome_from_status(ExitStatus::from_raw(code << 8));
            assert_eq!(outcome.exit_code, code);
            assert_eq!(outcome.signal, None);
        }
    }

    #[test]
    fn signal_maps_to_shell_convention() {
        // Raw wait status 9 == killed by SIGKILL.
        let outcome = outcome_from_status(ExitStatus::from_raw(9));
        assert_eq!(outcome.signal, Some(9));
        assert_eq!(outcome.exit_code, 137);
        assert!(!outcome.success());
    }
}
