use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use crate::error::AppendError;
use crate::sample::Sample;

/// Append `sample` as one line to `path`, creating the file if needed.
///
/// Existing content is never truncated. The line is synced to disk before
/// returning.
pub fn append(path: &Path, sample: &Sample) -> Result<(), AppendError> {
    let line = format!("{}\n", sample);

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|source| AppendError::Open { path: path.to_path_buf(), source })?;

    file.write_all(line.as_bytes())
        .map_err(|source| AppendError::Write { path: path.to_path_buf(), source })?;

    file.sync_all()
        .map_err(|source| AppendError::Sync { path: path.to_path_buf(), source })?;

    Ok(())
}
