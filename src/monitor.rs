use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, TryRecvError};
use std::time::Duration;
use chrono::Local;
use clap::ValueEnum;
use log::{debug, info, warn};
use crate::appender;
use crate::error::MonitorError;
use crate::extract::extract;
use crate::logging::{self, ErrorCode};
use crate::sample::Sample;
use crate::schema::normalize;
use crate::snapshot::SnapshotSource;

/// What to do when the status utility can't be run.
#[derive(Clone, Copy, ValueEnum, Debug, PartialEq, Eq)]
pub enum AcquireErrorPolicy {
    /// Stop the monitor and exit with an error
    Fail,
    /// Log the error and try again after the next interval
    Skip,
}

pub struct MonitorConfig {
    pub interval: Duration,
    pub output: PathBuf,
    pub print: bool,
    pub on_acquire_error: AcquireErrorPolicy,
}

pub struct Monitor<S> {
    config: MonitorConfig,
    source: S,
    echo: Box<dyn Write>,
}

impl<S: SnapshotSource> Monitor<S> {
    /// Printed samples go to stdout.
    pub fn new(config: MonitorConfig, source: S) -> Self {
        Self { config, source, echo: Box::new(io::stdout()) }
    }

    #[cfg(test)]
    pub fn with_echo(mut self, echo: impl Write + 'static) -> Self {
        self.echo = Box::new(echo);
        self
    }

    /// Sample until `shutdown` fires (or its sender goes away).
    ///
    /// Shutdown is observed while waiting between cycles and after a failed
    /// acquisition, so a cycle that has started always finishes its append.
    pub fn run(&mut self, shutdown: &Receiver<()>) -> Result<(), MonitorError> {
        info!("Sampling every {}s into {}",
            self.config.interval.as_secs(), self.config.output.display());

        loop {
            match self.run_cycle() {
                Ok(sample) => {
                    if self.config.print {
                        if let Err(e) = writeln!(self.echo, "{}", sample) {
                            warn!("Failed to print sample: {}", e);
                        }
                    }
                }
                Err(MonitorError::Acquisition(e)) => {
                    // A terminal Ctrl+C also reaches the utility, so its
                    // failure is expected when shutdown is pending.
                    if shutdown_pending(shutdown) {
                        info!("Shutdown requested during sampling ({}), stopping monitor", e);
                        return Ok(());
                    }
                    if self.config.on_acquire_error == AcquireErrorPolicy::Fail {
                        return Err(MonitorError::Acquisition(e));
                    }
                    warn!("{} Skipping sample: {}",
                        logging::error_code(ErrorCode::AcquisitionFailed), e);
                }
                Err(e) => return Err(e),
            }

            match shutdown.recv_timeout(self.config.interval) {
                Err(RecvTimeoutError::Timeout) => continue,
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    info!("Shutdown requested, stopping monitor");
                    return Ok(());
                }
            }
        }
    }

    /// One acquire -> extract -> normalize -> build -> append pass.
    pub fn run_cycle(&mut self) -> Result<Sample, MonitorError> {
        let raw = self.source.acquire()?;
        let fields = extract(&raw);
        let normalized = normalize(&fields, self.source.schema());
        let sample = Sample::build(normalized, Local::now().naive_local());

        appender::append(&self.config.output, &sample)?;
        debug!("Appended sample: {}", sample);

        Ok(sample)
    }
}

fn shutdown_pending(shutdown: &Receiver<()>) -> bool {
    match shutdown.try_recv() {
        Ok(()) | Err(TryRecvError::Disconnected) => true,
        Err(TryRecvError::Empty) => false,
    }
}
