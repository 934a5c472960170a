//! Preview types and error definitions.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One embedded preview image, as reported by the enumeration tool.
///
/// Constructed by parsing a single line of tool output; immutable after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewDescriptor {
    /// Tool-reported ordinal. Not necessarily contiguous or 1-based from
    /// the caller's perspective.
    pub index: u32,
    /// MIME type of the encoded preview, e.g. `image/jpeg`.
    pub mime_type: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Encoded size within the source file, in bytes.
    pub size_bytes: u64,
}

/// Ordered previews for one RAW file, in tool output order.
///
/// The order is assumed, not guaranteed, to run from smallest to largest.
/// Rebuilt on every call; never cached.
pub type PreviewCatalog = Vec<PreviewDescriptor>;

/// Error type for preview operations.
#[derive(Error, Debug)]
pub enum PreviewError {
    /// Scratch directory or tool paths failed validation.
    #[error("not ready: scratch directory or tool paths failed validation")]
    NotReady,

    /// A required input path does not exist.
    #[error("file does not exist: {0}")]
    FileNotFound(PathBuf),

    /// Extension is not in the recognized RAW set.
    #[error("not a RAW file: {0}")]
    NotRawFile(PathBuf),

    /// Requested ordinal has no corresponding catalog entry.
    #[error("preview {ordinal} does not exist")]
    PreviewNotFound { ordinal: usize },

    /// The extraction tool ran but produced no output file.
    #[error("extraction produced no output file: {message}")]
    ExtractionFailed { message: String },

    /// Destination already exists and overwrite was not requested.
    #[error("preview already exists: {0}")]
    AlreadyExists(PathBuf),

    /// An enumeration output line did not match the expected shape.
    #[error("failed to parse preview line {line:?}: {message}")]
    Parse { line: String, message: String },

    /// Failed to spawn an external tool.
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// File I/O error with operation context.
    #[error("I/O error in {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: io::Error,
    },
}

impl PreviewError {
    /// Create a parse error for a rejected output line.
    pub fn parse(line: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            line: line.into(),
            message: message.into(),
        }
    }

    /// Create an extraction failed error.
    pub fn extraction_failed(message: impl Into<String>) -> Self {
        Self::ExtractionFailed {
            message: message.into(),
        }
    }

    /// Create a spawn error for a tool that could not be run.
    pub fn spawn(tool: impl Into<String>, source: io::Error) -> Self {
        Self::Spawn {
            tool: tool.into(),
            source,
        }
    }

    /// Create an I/O error with operation context.
    pub fn io(operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Result type for preview operations.
pub type PreviewResult<T> = Result<T, PreviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_context() {
        let err = PreviewError::PreviewNotFound { ordinal: 4 };
        assert!(err.to_string().contains("preview 4"));

        let err = PreviewError::parse("garbage", "missing prefix");
        let msg = err.to_string();
        assert!(msg.contains("garbage"));
        assert!(msg.contains("missing prefix"));
    }
}
