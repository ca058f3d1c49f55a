//! Launch failures and the exit codes they map to.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Shell convention for "command not found".
pub const EXIT_NOT_FOUND: i32 = 127;
/// Shell convention for "found but not executable".
pub const EXIT_NOT_EXECUTABLE: i32 = 126;
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("`{program}` not found on PATH")]
    NotFound {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("permission denied launching `{program}`")]
    PermissionDenied {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to launch `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed waiting for `{program}` to exit")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("project directory {} is not a directory", .0.display())]
    ProjectDir(PathBuf),
}

impl RunError {
    /// Classify a spawn error by its io kind.
    pub fn from_spawn(program: &str, source: io::Error) -> Self {
        let program = program.to_string();
        match source.kind() {
            io::ErrorKind::NotFound => RunError::NotFound { program, source },
            io::ErrorKind::PermissionDenied => RunError::PermissionDenied { program, source },
            _ => RunError::Spawn { program, source },
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::NotFound { .. } => EXIT_NOT_FOUND,
            RunError::PermissionDenied { .. } => EXIT_NOT_EXECUTABLE,
            RunError::Spawn { .. } | RunError::Wait { .. } | RunError::ProjectDir(_) => {
                EXIT_FAILURE
            }
        }
    }
}
