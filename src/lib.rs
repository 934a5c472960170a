//! rawgrab - embedded preview and metadata extraction from camera RAW files.
//!
//! This crate does not decode RAW sensor data itself. It drives two external
//! command-line tools (exiv2 for preview enumeration, preview extraction, and
//! tag listing; exiftool for tag transfer), parses their text output into
//! typed records, and relocates the produced files without clobbering
//! anything the caller owns.
//!
//! The main entry point is [`Extractor`], a thin facade over explicit
//! [`ToolSettings`]. Every operation is a single synchronous call.

pub mod config;
pub mod extractor;
pub mod logging;
pub mod metadata;
pub mod previews;
pub mod rawfile;
pub mod tools;

pub use config::ToolSettings;
pub use extractor::Extractor;
pub use metadata::{MetadataError, MetadataMap, MetadataResult, TagMode};
pub use previews::{
    extension_from_type, PreviewCatalog, PreviewDescriptor, PreviewError, PreviewResult,
};
pub use rawfile::is_raw_file;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
