//! Embedded preview enumeration, selection, and extraction.
//!
//! A RAW file embeds one or more fully-decoded preview images. The
//! enumeration tool reports them one per line; [`list_previews`] turns that
//! output into an ordered [`PreviewCatalog`], and [`extract_preview`] picks
//! one by 1-based ordinal (defaulting to the last, conventionally the
//! largest), extracts it into the scratch directory, and relocates it to the
//! caller's destination with overwrite protection.

mod catalog;
mod extract;
mod parser;
mod types;

pub use catalog::list_previews;
pub use extract::{extension_from_type, extract_preview, resolve_position};
pub use parser::parse_preview_line;
pub use types::{PreviewCatalog, PreviewDescriptor, PreviewError, PreviewResult};
