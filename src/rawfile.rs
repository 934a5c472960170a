//! RAW file recognition by extension.
//!
//! This is a name-based heuristic over a fixed set of vendor extensions,
//! not content inspection.

use std::path::Path;

/// Vendor RAW extensions that are known to carry embedded previews.
pub const RAW_EXTENSIONS: &[&str] = &[
    "ari", "arw", "bay", "crw", "cr2", "cap", "dcs", "dcr", "dng", "drf", "eip", "erf", "fff",
    "iiq", "k25", "kdc", "mdc", "mef", "mos", "mrw", "nef", "nrw", "obm", "orf", "pef", "ptx",
    "pxn", "r3d", "raf", "raw", "rwl", "rw2", "rwz", "sr2", "srf", "srw", "x3f",
];

/// Check whether a path has a recognized RAW extension (case-insensitive).
pub fn is_raw_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            RAW_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
