//! Preview catalog building via the enumeration command.

use std::path::Path;
use std::process::Command;

use crate::config::ToolSettings;
use crate::tools::{is_ready, run_command};

use super::parser::parse_preview_line;
use super::types::{PreviewCatalog, PreviewError, PreviewResult};

/// Enumerate the embedded previews of a RAW file.
///
/// Runs the enumeration command (`exiv2 -pp pr <file>`) and parses every
/// non-empty stdout line. Catalog order is exactly tool output order; no
/// filtering, sorting, or deduplication. A single malformed line fails the
/// whole call - a partial catalog is never returned.
pub fn list_previews(settings: &ToolSettings, raw: &Path) -> PreviewResult<PreviewCatalog> {
    if !is_ready(settings) {
        return Err(PreviewError::NotReady);
    }
    if !raw.exists() {
        return Err(PreviewError::FileNotFound(raw.to_path_buf()));
    }

    // is_ready already established the path is set and executable
    let exiv2 = settings.exiv2_path.as_deref().ok_or(PreviewError::NotReady)?;

    let output = run_command(Command::new(exiv2).arg("-pp").arg("pr").arg(raw))
        .map_err(|e| PreviewError::spawn("exiv2", e))?;

    if !output.success {
        // The tool reports no previews for some files via a nonzero exit
        // with empty stdout; an empty catalog is the right answer then.
        tracing::debug!(
            exit_code = ?output.exit_code,
            stderr = output.stderr_summary(),
            "enumeration command exited nonzero"
        );
    }

    parse_catalog_lines(&output.stdout)
}

/// Fold enumeration stdout into a catalog, failing on the first bad line.
pub(crate) fn parse_catalog_lines(stdout: &str) -> PreviewResult<PreviewCatalog> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_preview_line)
        .collect()
}
