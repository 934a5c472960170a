//! Metadata types and error definitions.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which output mode the tag-listing command should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TagMode {
    /// Raw tag values.
    #[default]
    Raw,
    /// Human-readable translated values.
    Translated,
}

impl TagMode {
    /// The exiv2 print flag for this mode. Only the flag differs; the
    /// output shape and parsing are identical.
    pub fn flag(self) -> &'static str {
        match self {
            TagMode::Raw => "-Pkv",
            TagMode::Translated => "-Pkt",
        }
    }
}

/// An ordered tag-key to value mapping.
///
/// Preserves first-insertion order; inserting an existing key overwrites its
/// value in place (last write wins). A value of `None` records a key whose
/// source line carried no payload. Keys are expected unique per tool
/// invocation, so lookups are a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataMap {
    entries: Vec<(String, Option<String>)>,
}

impl MetadataMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key with its value. An existing key keeps its position and
    /// takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a key. The outer `Option` distinguishes a missing key from a
    /// present key with no value.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

/// Error type for metadata operations.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// Scratch directory or tool paths failed validation.
    #[error("not ready: scratch directory or tool paths failed validation")]
    NotReady,

    /// A required input path does not exist.
    #[error("file does not exist: {0}")]
    FileNotFound(PathBuf),

    /// Failed to spawn an external tool.
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },
}

impl MetadataError {
    /// Create a spawn error for a tool that could not be run.
    pub fn spawn(tool: impl Into<String>, source: io::Error) -> Self {
        Self::Spawn {
            tool: tool.into(),
            source,
        }
    }
}

/// Result type for metadata operations.
pub type MetadataResult<T> = Result<T, MetadataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_preserved() {
        let mut map = MetadataMap::new();
        map.insert("Make", Some("Canon".to_string()));
        map.insert("Model", Some("EOS".to_string()));
        map.insert("ISO", None);

        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["Make", "Model", "ISO"]);
    }

    #[test]
    fn duplicate_key_overwrites_in_place() {
        let mut map = MetadataMap::new();
        map.insert("Make", Some("Canon".to_string()));
        map.insert("Model", Some("EOS".to_string()));
        map.insert("Make", Some("Nikon".to_string()));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("Make"), Some(Some("Nikon")));
        // position of the overwritten key is unchanged
        assert_eq!(map.iter().next().map(|(k, _)| k), Some("Make"));
    }

    #[test]
    fn missing_key_differs_from_valueless_key() {
        let mut map = MetadataMap::new();
        map.insert("ISO", None);

        assert_eq!(map.get("ISO"), Some(None));
        assert_eq!(map.get("Aperture"), None);
        assert!(map.contains_key("ISO"));
        assert!(!map.contains_key("Aperture"));
    }

    #[test]
    fn tag_mode_flags() {
        assert_eq!(TagMode::Raw.flag(), "-Pkv");
        assert_eq!(TagMode::Translated.flag(), "-Pkt");
        assert_eq!(TagMode::default(), TagMode::Raw);
    }
}
