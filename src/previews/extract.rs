//! Preview selection and extraction.
//!
//! The extraction tool writes `<stem>-preview<ordinal>.<ext>` into the
//! scratch directory and gives no reliable machine-readable success signal;
//! the existence of that file afterwards is the success indicator. The file
//! is then relocated to the caller's destination with overwrite protection:
//! re-extracting over an old scratch file is a quiet no-op, but clobbering a
//! caller-owned destination is a hard error.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::ToolSettings;
use crate::rawfile::is_raw_file;
use crate::tools::{is_ready, run_command};

use super::catalog::list_previews;
use super::types::{PreviewError, PreviewResult};

/// Translate an optional 1-based ordinal into a catalog position.
///
/// An omitted ordinal selects the last entry. Returns `None` when the
/// ordinal is zero or past the end of the catalog.
pub fn resolve_position(catalog_len: usize, ordinal: Option<usize>) -> Option<usize> {
    let ordinal = ordinal.unwrap_or(catalog_len);
    if ordinal == 0 || ordinal > catalog_len {
        return None;
    }
    Some(ordinal - 1)
}

/// Map a preview MIME type to an output file extension.
///
/// Unknown types fall back to `jpg`; previews are overwhelmingly JPEG and
/// the enumeration tool reports little else.
pub fn extension_from_type(mime_type: &str) -> &'static str {
    match mime_type.to_ascii_lowercase().as_str() {
        "image/tiff" | "image/tif" => "tif",
        _ => "jpg",
    }
}

/// Extract one embedded preview into `dest_dir`.
///
/// The preview is chosen by 1-based `ordinal`, defaulting to the last entry
/// of the catalog. The destination file is named after `dest_base_name` (or
/// the RAW file's stem) plus the extension derived from the preview's MIME
/// type.
///
/// Three distinct outcomes:
/// - `Ok(Some(path))` - the preview was extracted and relocated to `path`.
/// - `Ok(None)` - the scratch file from an earlier extraction is still
///   present and `overwrite` is false; nothing was done.
/// - `Err(_)` - a precondition or the extraction itself failed, including
///   [`PreviewError::AlreadyExists`] when the destination is taken.
pub fn extract_preview(
    settings: &ToolSettings,
    raw: &Path,
    dest_dir: &Path,
    dest_base_name: Option<&str>,
    ordinal: Option<usize>,
    overwrite: bool,
) -> PreviewResult<Option<PathBuf>> {
    if !is_ready(settings) {
        return Err(PreviewError::NotReady);
    }
    if !raw.exists() {
        return Err(PreviewError::FileNotFound(raw.to_path_buf()));
    }
    if !is_raw_file(raw) {
        return Err(PreviewError::NotRawFile(raw.to_path_buf()));
    }

    let catalog = list_previews(settings, raw)?;
    let ordinal = ordinal.unwrap_or(catalog.len());
    let descriptor = resolve_position(catalog.len(), Some(ordinal))
        .map(|position| &catalog[position])
        .filter(|descriptor| !descriptor.mime_type.is_empty())
        .ok_or(PreviewError::PreviewNotFound { ordinal })?;

    let extension = extension_from_type(&descriptor.mime_type);
    let stem = raw
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| PreviewError::FileNotFound(raw.to_path_buf()))?;

    let scratch_file = settings
        .scratch_dir
        .join(format!("{stem}-preview{ordinal}.{extension}"));
    let dest_name = dest_base_name.unwrap_or(&stem);
    let dest_path = dest_dir.join(format!("{dest_name}.{extension}"));

    // An old scratch file means this preview was already extracted and
    // never promoted; without overwrite that is a successful idle outcome,
    // not an error, and the tool is not invoked again.
    if scratch_file.exists() && !overwrite {
        tracing::debug!(scratch = %scratch_file.display(), "scratch file present, skipping");
        return Ok(None);
    }

    run_extraction(settings, raw, ordinal, &scratch_file)?;

    promote_scratch_file(&scratch_file, &dest_path, overwrite).map(Some)
}

/// Invoke the extraction command and verify it produced the expected file.
fn run_extraction(
    settings: &ToolSettings,
    raw: &Path,
    ordinal: usize,
    scratch_file: &Path,
) -> PreviewResult<()> {
    let exiv2 = settings.exiv2_path.as_deref().ok_or(PreviewError::NotReady)?;

    let output = run_command(
        Command::new(exiv2)
            .arg(format!("-ep{ordinal}"))
            .arg("-l")
            .arg(&settings.scratch_dir)
            .arg("ex")
            .arg(raw),
    )
    .map_err(|e| PreviewError::spawn("exiv2", e))?;

    if !scratch_file.exists() {
        return Err(PreviewError::extraction_failed(format!(
            "expected {} after extracting preview {} of {} (exit code {:?}, stderr: {})",
            scratch_file.display(),
            ordinal,
            raw.display(),
            output.exit_code,
            output.stderr_summary(),
        )));
    }

    if !output.success {
        // The file is there, so the extraction worked in every way that
        // matters; the status is still worth surfacing.
        tracing::warn!(
            exit_code = ?output.exit_code,
            scratch = %scratch_file.display(),
            "extraction command exited nonzero but produced its output file"
        );
    }

    tracing::info!(
        raw = %raw.display(),
        ordinal,
        scratch = %scratch_file.display(),
        "extracted preview"
    );

    Ok(())
}

/// Relocate a freshly extracted scratch file to its final destination.
///
/// A copy-then-delete rather than a rename, so the destination may live on
/// a different filesystem than the scratch directory. When the destination
/// is already taken and `overwrite` is false, the scratch file is removed
/// before the error is raised so no stale extraction lingers.
fn promote_scratch_file(
    scratch_file: &Path,
    dest_path: &Path,
    overwrite: bool,
) -> PreviewResult<PathBuf> {
    if dest_path.exists() && !overwrite {
        fs::remove_file(scratch_file)
            .map_err(|e| PreviewError::io("removing scratch file", e))?;
        return Err(PreviewError::AlreadyExists(dest_path.to_path_buf()));
    }

    fs::copy(scratch_file, dest_path)
        .map_err(|e| PreviewError::io("copying preview to destination", e))?;
    fs::remove_file(scratch_file).map_err(|e| PreviewError::io("removing scratch file", e))?;

    Ok(dest_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_ordinal_selects_last_entry() {
        assert_eq!(resolve_position(3, None), Some(2));
        assert_eq!(resolve_position(1, None), Some(0));
    }

    #[test]
    fn explicit_ordinal_is_one_based() {
        assert_eq!(resolve_position(3, Some(1)), Some(0));
        assert_eq!(resolve_position(3, Some(3)), Some(2));
    }

    #[test]
    fn out_of_range_ordinals_resolve_to_none() {
        assert_eq!(resolve_position(3, Some(0)), None);
        assert_eq!(resolve_position(3, Some(4)), None);
        assert_eq!(resolve_position(0, None), None);
        assert_eq!(resolve_position(0, Some(1)), None);
    }

    #[test]
    fn extension_mapping() {
        assert_eq!(extension_from_type("image/jpeg"), "jpg");
        assert_eq!(extension_from_type("image/jpg"), "jpg");
        assert_eq!(extension_from_type("image/tiff"), "tif");
        assert_eq!(extension_from_type("image/tif"), "tif");
        assert_eq!(extension_from_type("IMAGE/TIFF"), "tif");
        // unrecognized types fall back to jpg
        assert_eq!(extension_from_type("image/png"), "jpg");
        assert_eq!(extension_from_type(""), "jpg");
    }

    #[test]
    fn promotion_moves_scratch_to_destination() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = dir.path().join("shot-preview2.jpg");
        let dest = dir.path().join("shot.jpg");
        fs::write(&scratch, b"jpeg bytes").unwrap();

        let result = promote_scratch_file(&scratch, &dest, false).unwrap();
        assert_eq!(result, dest);
        assert!(!scratch.exists());
        assert_eq!(fs::read(&dest).unwrap(), b"jpeg bytes");
    }

    #[test]
    fn destination_collision_cleans_up_scratch_file() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = dir.path().join("shot-preview2.jpg");
        let dest = dir.path().join("shot.jpg");
        fs::write(&scratch, b"fresh").unwrap();
        fs::write(&dest, b"existing").unwrap();

        let err = promote_scratch_file(&scratch, &dest, false).unwrap_err();
        assert!(matches!(err, PreviewError::AlreadyExists(_)));
        // no leftover scratch file, and the destination is untouched
        assert!(!scratch.exists());
        assert_eq!(fs::read(&dest).unwrap(), b"existing");
    }

    #[test]
    fn overwrite_replaces_existing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = dir.path().join("shot-preview1.jpg");
        let dest = dir.path().join("shot.jpg");
        fs::write(&scratch, b"new").unwrap();
        fs::write(&dest, b"old").unwrap();

        promote_scratch_file(&scratch, &dest, true).unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"new");
        assert!(!scratch.exists());
    }

    #[cfg(unix)]
    #[test]
    fn non_raw_input_is_rejected_before_any_tool_runs() {
        let dir = tempfile::tempdir().unwrap();
        let jpeg = dir.path().join("photo.jpg");
        fs::write(&jpeg, b"not raw").unwrap();

        // settings with no exiv2 would fail readiness first, so point at a
        // real executable to get past the precondition
        let settings = ToolSettings {
            scratch_dir: dir.path().to_path_buf(),
            exiv2_path: Some(PathBuf::from("/bin/sh")),
            exiftool_path: None,
        };

        let err = extract_preview(&settings, &jpeg, dir.path(), None, None, false).unwrap_err();
        assert!(matches!(err, PreviewError::NotRawFile(_)));
    }
}
