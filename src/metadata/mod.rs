//! Tag listing and tag transfer.
//!
//! Tag listing parses the tag tool's `KEY value...` output lines into an
//! ordered [`MetadataMap`]; tag transfer copies all tags from one file into
//! another via exiftool, fire-and-forget.

mod parser;
mod transfer;
mod types;

pub use parser::{list_exif_data, parse_tag_lines};
pub use transfer::transfer_exif_data;
pub use types::{MetadataError, MetadataMap, MetadataResult, TagMode};
