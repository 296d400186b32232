use std::path::Path;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

const LOG_FILE_PREFIX: &str = "wifilog";
const MAX_LOG_FILES: usize = 7;

/// Stable tags prefixed to diagnostic messages so they can be grepped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidArgument = 1001,
    LogSetupFailed = 1002,
    AcquisitionFailed = 2001,
    AppendFailed = 2002,
    ViewerFailed = 3001,
    SignalHandlerFailed = 3002,
}

pub fn error_code(code: ErrorCode) -> String {
    format!("[E{}]", code as u16)
}

/// Install the global subscriber. Diagnostics go to a daily-rotated file in
/// `log_dir` when given, stderr otherwise. `RUST_LOG` overrides the level.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .compact();

    match log_dir {
        Some(dir) => {
            // Create log directory if it doesn't exist
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .filename_suffix("log")
                .max_log_files(MAX_LOG_FILES)
                .build(dir)
                .context("Failed to create file appender")?;

            builder
                .with_writer(appender)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        None => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_tagged() {
        assert_eq!(error_code(ErrorCode::InvalidArgument), "[E1001]");
        assert_eq!(error_code(ErrorCode::AcquisitionFailed), "[E2001]");
        assert_eq!(error_code(ErrorCode::SignalHandlerFailed), "[E3002]");
    }
}
