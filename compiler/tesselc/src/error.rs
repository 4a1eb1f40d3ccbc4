//! Errors surfaced by CLI commands.

use std::path::PathBuf;

use tessel_scan::Unbalanced;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bad command-line arguments; the binary prints usage after it.
    #[error("{0}")]
    Usage(String),

    #[error("{}: {source}", path.display())]
    Unbalanced {
        path: PathBuf,
        #[source]
        source: Unbalanced,
    },

    #[error("{failed} of {total} file(s) are unbalanced")]
    ChecksFailed { failed: usize, total: usize },
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Io { .. } | CliError::Unbalanced { .. } | CliError::ChecksFailed { .. } => 1,
        }
    }
}
