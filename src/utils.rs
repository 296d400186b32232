use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver};
use crate::logging;
use crate::logging::ErrorCode;

#[cfg(target_os = "windows")]
pub const DEFAULT_VIEWER: &str = "notepad.exe";
#[cfg(target_os = "macos")]
pub const DEFAULT_VIEWER: &str = "open";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const DEFAULT_VIEWER: &str = "xdg-open";

/// Resolve `path` against the current directory so later working-directory
/// changes can't redirect the log.
pub fn resolve_output_path(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .with_context(|| format!("{} Failed to resolve output path {}",
            logging::error_code(ErrorCode::InvalidArgument), path.display()))
}

/// Launch `viewer` on `path` without waiting for it. A missing viewer is
/// only logged.
pub fn open_viewer(viewer: &str, path: &Path) {
    let spawned = Command::new(viewer)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match spawned {
        Ok(child) => info!("Opened {} in {} (pid {})", path.display(), viewer, child.id()),
        Err(e) => warn!("{} Failed to launch viewer {}: {}",
            logging::error_code(ErrorCode::ViewerFailed), viewer, e),
    }
}

/// Channel that receives a message on Ctrl+C / SIGTERM.
pub fn shutdown_channel() -> Result<Receiver<()>> {
    let (tx, rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = tx.send(());
    })
    .with_context(|| format!("{} Failed to install signal handler",
        logging::error_code(ErrorCode::SignalHandlerFailed)))?;
    Ok(rx)
}
