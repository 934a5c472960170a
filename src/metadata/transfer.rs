//! Tag transfer between files via exiftool.

use std::path::Path;
use std::process::Command;

use crate::config::ToolSettings;
use crate::tools::{is_executable, is_ready, run_command};

use super::types::{MetadataError, MetadataResult};

/// Copy all metadata tags from `source` into `destination` in place.
///
/// A quiet no-op when no usable transfer tool is configured. Otherwise both
/// files must exist; the tool's own output is not parsed, and its exit
/// status is only logged.
pub fn transfer_exif_data(
    settings: &ToolSettings,
    source: &Path,
    destination: &Path,
) -> MetadataResult<()> {
    let exiftool = match settings.exiftool_path.as_deref() {
        Some(path) if is_executable(path) => path,
        _ => {
            tracing::debug!("no usable exiftool configured, skipping tag transfer");
            return Ok(());
        }
    };

    if !is_ready(settings) {
        return Err(MetadataError::NotReady);
    }
    if !source.exists() {
        return Err(MetadataError::FileNotFound(source.to_path_buf()));
    }
    if !destination.exists() {
        return Err(MetadataError::FileNotFound(destination.to_path_buf()));
    }

    let output = run_command(
        Command::new(exiftool)
            .arg("-overwrite_original")
            .arg("-tagsFromFile")
            .arg(source)
            .arg(destination),
    )
    .map_err(|e| MetadataError::spawn("exiftool", e))?;

    if !output.success {
        tracing::warn!(
            exit_code = ?output.exit_code,
            stderr = output.stderr_summary(),
            "tag transfer command exited nonzero"
        );
    }

    Ok(())
}
