use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// The wireless-status utility could not produce a snapshot.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("failed to invoke `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// `output` is the utility's stderr, or its stdout when stderr is empty.
    #[error("`{program}` exited with {status}{}", with_separator(.output))]
    ExitStatus {
        program: String,
        status: ExitStatus,
        output: String,
    },
}

fn with_separator(output: &str) -> String {
    if output.is_empty() {
        String::new()
    } else {
        format!(": {}", output)
    }
}

/// The sample log could not be grown.
#[derive(Debug, Error)]
pub enum AppendError {
    #[error("failed to open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write log file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to sync log file {}: {source}", .path.display())]
    Sync {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),

    #[error(transparent)]
    Append(#[from] AppendError),
}
