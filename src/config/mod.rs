//! Configuration for the external tools.
//!
//! Tool paths and the scratch directory live in an explicit [`ToolSettings`]
//! value that callers construct (or discover from `PATH`) and hand to the
//! [`Extractor`](crate::Extractor) - there is no process-wide lookup.
//! Settings round-trip through TOML with atomic writes.

mod settings;

pub use settings::{ConfigError, ConfigResult, ToolSettings};
