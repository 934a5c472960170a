//! Tag listing and output-line folding.

use std::path::Path;
use std::process::Command;

use crate::config::ToolSettings;
use crate::tools::{is_ready, run_command};

use super::types::{MetadataError, MetadataMap, MetadataResult, TagMode};

/// List the metadata tags of a file as an ordered map.
///
/// Runs the tag-listing command (`exiv2 -Pkv pr <file>`, or `-Pkt` for
/// translated values) and folds its stdout lines left to right into a
/// [`MetadataMap`]; on a duplicate key, the last line wins.
pub fn list_exif_data(
    settings: &ToolSettings,
    raw: &Path,
    mode: TagMode,
) -> MetadataResult<MetadataMap> {
    if !is_ready(settings) {
        return Err(MetadataError::NotReady);
    }
    if !raw.exists() {
        return Err(MetadataError::FileNotFound(raw.to_path_buf()));
    }

    let exiv2 = settings.exiv2_path.as_deref().ok_or(MetadataError::NotReady)?;

    let output = run_command(Command::new(exiv2).arg(mode.flag()).arg("pr").arg(raw))
        .map_err(|e| MetadataError::spawn("exiv2", e))?;

    Ok(parse_tag_lines(output.stdout.lines()))
}

/// Fold `KEY value...` lines into an ordered map.
///
/// Each line splits at the first space: the left part is the key, the
/// remainder is trimmed and stored as the value. A line with no space is a
/// key with no value, not a parse error. Empty lines are skipped.
pub fn parse_tag_lines<'a>(lines: impl Iterator<Item = &'a str>) -> MetadataMap {
    let mut map = MetadataMap::new();
    for line in lines.filter(|line| !line.trim().is_empty()) {
        match line.split_once(' ') {
            Some((key, rest)) => map.insert(key, Some(rest.trim().to_string())),
            None => map.insert(line, None),
        }
    }
    map
}
