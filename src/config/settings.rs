//! Tool settings with TOML persistence.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tools::find_in_path;

/// Errors that can occur during settings load/save.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Read(#[from] io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("settings file not found: {0}")]
    NotFound(PathBuf),
}

/// Result type for settings operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Paths the extractor needs: the two external tools and a writable scratch
/// directory where the extraction tool deposits its output before the file
/// is relocated to the caller's destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Writable staging directory for freshly extracted previews.
    #[serde(default = "default_scratch_dir")]
    pub scratch_dir: PathBuf,

    /// Path to the exiv2 binary (enumeration, extraction, tag listing).
    #[serde(default)]
    pub exiv2_path: Option<PathBuf>,

    /// Path to the exiftool binary (tag transfer). Optional; tag transfer
    /// degrades to a no-op without it.
    #[serde(default)]
    pub exiftool_path: Option<PathBuf>,
}

fn default_scratch_dir() -> PathBuf {
    env::temp_dir()
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            scratch_dir: default_scratch_dir(),
            exiv2_path: None,
            exiftool_path: None,
        }
    }
}

impl ToolSettings {
    /// Build settings by searching `PATH` for the conventional binary names.
    ///
    /// Leaves a tool path as `None` when the binary is not on `PATH`;
    /// readiness checks will then fail for operations that need it.
    pub fn discover() -> Self {
        Self {
            scratch_dir: default_scratch_dir(),
            exiv2_path: find_in_path("exiv2"),
            exiftool_path: find_in_path("exiftool"),
        }
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save settings to a TOML file atomically (write to a temp file in the
    /// same directory, then rename over the target).
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        let tmp = path.with_extension("toml.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_temp_dir() {
        let settings = ToolSettings::default();
        assert_eq!(settings.scratch_dir, env::temp_dir());
        assert!(settings.exiv2_path.is_none());
        assert!(settings.exiftool_path.is_none());
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let settings = ToolSettings {
            scratch_dir: PathBuf::from("/var/scratch"),
            exiv2_path: Some(PathBuf::from("/usr/bin/exiv2")),
            exiftool_path: None,
        };
        settings.save(&path).unwrap();

        let loaded = ToolSettings::load(&path).unwrap();
        assert_eq!(loaded.scratch_dir, PathBuf::from("/var/scratch"));
        assert_eq!(loaded.exiv2_path, Some(PathBuf::from("/usr/bin/exiv2")));
        assert!(loaded.exiftool_path.is_none());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: ToolSettings = toml::from_str("").unwrap();
        assert_eq!(settings.scratch_dir, env::temp_dir());
        assert!(settings.exiv2_path.is_none());
    }

    #[test]
    fn load_of_missing_file_is_not_found() {
        let err = ToolSettings::load(Path::new("/nonexistent/settings.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
