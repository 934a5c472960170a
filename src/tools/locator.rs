//! Tool path resolution and the readiness predicate.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ToolSettings;

/// Search the `PATH` environment for an executable with the given name.
pub fn find_in_path(binary: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    env::split_paths(&path_var)
        .map(|dir| dir.join(binary))
        .find(|candidate| is_executable(candidate))
}

/// Check that a path exists and is executable by the current user.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Readiness predicate over the settings plus live filesystem checks.
///
/// Ready means: the scratch directory exists and is writable, the exiv2
/// binary is present and executable, and the exiftool binary - when one is
/// configured - is present and executable too. Nothing is cached; callers
/// get the current state of the filesystem on every call.
pub fn is_ready(settings: &ToolSettings) -> bool {
    if !scratch_dir_usable(&settings.scratch_dir) {
        return false;
    }

    let exiv2_ok = settings
        .exiv2_path
        .as_deref()
        .map(is_executable)
        .unwrap_or(false);
    if !exiv2_ok {
        return false;
    }

    match settings.exiftool_path.as_deref() {
        Some(path) => is_executable(path),
        None => true,
    }
}

fn scratch_dir_usable(dir: &Path) -> bool {
    fs::metadata(dir)
        .map(|m| m.is_dir() && !m.permissions().readonly())
        .unwrap_or(false)
}
