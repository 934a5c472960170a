//! The `Extractor` facade over explicit tool settings.

use std::path::{Path, PathBuf};

use crate::config::ToolSettings;
use crate::metadata::{self, MetadataMap, MetadataResult, TagMode};
use crate::previews::{self, PreviewCatalog, PreviewResult};
use crate::rawfile;
use crate::tools;

/// Extracts embedded previews and metadata from camera RAW files by driving
/// the configured external tools.
///
/// Every method is a single synchronous call that blocks on at most one
/// child process plus filesystem I/O. The scratch directory is shared
/// mutable state with no locking: callers running concurrent extractions
/// must serialize per RAW file or use distinct scratch directories.
#[derive(Debug, Clone)]
pub struct Extractor {
    settings: ToolSettings,
}

impl Extractor {
    /// Create an extractor over the given settings.
    pub fn new(settings: ToolSettings) -> Self {
        Self { settings }
    }

    /// Create an extractor with tools discovered from `PATH` and the OS
    /// temp directory as scratch space.
    pub fn discover() -> Self {
        Self::new(ToolSettings::discover())
    }

    /// The settings this extractor operates on.
    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    /// Whether a path has a recognized RAW extension.
    pub fn is_raw_file(&self, path: &Path) -> bool {
        rawfile::is_raw_file(path)
    }

    /// Whether the scratch directory and tool paths currently pass
    /// validation. Recomputed from the filesystem on every call.
    pub fn is_ready(&self) -> bool {
        tools::is_ready(&self.settings)
    }

    /// Enumerate the embedded previews of a RAW file, in tool output order.
    pub fn list_previews(&self, raw: &Path) -> PreviewResult<PreviewCatalog> {
        previews::list_previews(&self.settings, raw)
    }

    /// Extract one embedded preview into `dest_dir`.
    ///
    /// See [`previews::extract_preview`] for the selection policy and the
    /// three-way outcome (`Ok(Some(path))` / `Ok(None)` / `Err`).
    pub fn extract_preview(
        &self,
        raw: &Path,
        dest_dir: &Path,
        dest_base_name: Option<&str>,
        ordinal: Option<usize>,
        overwrite: bool,
    ) -> PreviewResult<Option<PathBuf>> {
        previews::extract_preview(&self.settings, raw, dest_dir, dest_base_name, ordinal, overwrite)
    }

    /// List the metadata tags of a file as an ordered, last-write-wins map.
    pub fn list_exif_data(&self, raw: &Path, mode: TagMode) -> MetadataResult<MetadataMap> {
        metadata::list_exif_data(&self.settings, raw, mode)
    }

    /// Copy all metadata tags from `source` into `destination` in place.
    /// A no-op when no transfer tool is configured.
    pub fn transfer_exif_data(&self, source: &Path, destination: &Path) -> MetadataResult<()> {
        metadata::transfer_exif_data(&self.settings, source, destination)
    }

    /// Map a preview MIME type to an output file extension.
    pub fn extension_from_type(&self, mime_type: &str) -> &'static str {
        previews::extension_from_type(mime_type)
    }
}
