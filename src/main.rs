mod appender;
mod error;
mod extract;
mod logging;
mod monitor;
mod sample;
mod schema;
mod snapshot;
mod utils;

use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use anyhow::{Context, Result};
use log::{info, error};
use logging::ErrorCode;
use monitor::{AcquireErrorPolicy, Monitor, MonitorConfig};
use snapshot::CommandSource;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seconds between samples
    #[arg(long, default_value = "60", value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,

    /// Output log file
    #[arg(long, default_value = "wifi_log.txt")]
    out: PathBuf,

    /// Print each sample to the console
    #[arg(long)]
    print: bool,

    /// Open the output file in a text viewer at startup
    #[arg(long = "open-notepad")]
    open_notepad: bool,

    /// Program used by --open-notepad
    #[arg(long, default_value = utils::DEFAULT_VIEWER)]
    viewer: String,

    /// What to do when the status utility can't be run
    #[arg(long, value_enum, default_value = "fail")]
    on_acquire_error: AcquireErrorPolicy,

    /// Write diagnostics to daily-rotated files in this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::setup_logging(cli.log_dir.as_deref())
        .with_context(|| format!("{} Failed to set up logging",
            logging::error_code(ErrorCode::LogSetupFailed)))?;

    let output = utils::resolve_output_path(&cli.out)?;
    info!("Wi-Fi logger writing to {}", output.display());

    if cli.open_notepad {
        utils::open_viewer(&cli.viewer, &output);
    }

    let shutdown = utils::shutdown_channel()?;

    let config = MonitorConfig {
        interval: Duration::from_secs(cli.interval),
        output,
        print: cli.print,
        on_acquire_error: cli.on_acquire_error,
    };
    let source = CommandSource::netsh();
    info!("Reading interface state from {}", source.program());
    let mut monitor = Monitor::new(config, source);

    if let Err(e) = monitor.run(&shutdown) {
        let code = match &e {
            error::MonitorError::Acquisition(_) => ErrorCode::AcquisitionFailed,
            error::MonitorError::Append(_) => ErrorCode::AppendFailed,
        };
        error!("{} Monitor stopped: {}", logging::error_code(code), e);
        return Err(e).with_context(|| format!("{} Monitor stopped",
            logging::error_code(code)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["wifilog"]).unwrap();
        assert_eq!(cli.interval, 60);
        assert_eq!(cli.out, PathBuf::from("wifi_log.txt"));
        assert!(!cli.print);
        assert!(!cli.open_notepad);
        assert_eq!(cli.viewer, utils::DEFAULT_VIEWER);
        assert_eq!(cli.on_acquire_error, AcquireErrorPolicy::Fail);
        assert!(cli.log_dir.is_none());
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "wifilog", "--interval", "5", "--out", "logs/wifi.txt", "--print",
            "--open-notepad", "--on-acquire-error", "skip", "--log-dir", "/tmp/wifilog",
        ])
        .unwrap();
        assert_eq!(cli.interval, 5);
        assert_eq!(cli.out, PathBuf::from("logs/wifi.txt"));
        assert!(cli.print);
        assert!(cli.open_notepad);
        assert_eq!(cli.on_acquire_error, AcquireErrorPolicy::Skip);
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/wifilog")));
    }

    #[test]
    fn rejects_zero_interval() {
        assert!(Cli::try_parse_from(["wifilog", "--interval", "0"]).is_err());
        assert!(Cli::try_parse_from(["wifilog", "--interval", "abc"]).is_err());
    }
}
