//! Parsing of one enumeration output line.
//!
//! The enumeration tool prints one line per embedded preview:
//!
//! ```text
//! Preview 2: image/jpeg, 5760x3840 pixels, 2887329 bytes
//! ```
//!
//! A line that deviates from this shape is rejected outright; the catalog
//! builder turns any rejection into a failure of the whole enumeration, so a
//! returned catalog always mirrors the tool's output exactly.

use super::types::{PreviewDescriptor, PreviewError, PreviewResult};

/// Parse a single `Preview N: <mime>, WxH pixels, S bytes` line.
pub fn parse_preview_line(line: &str) -> PreviewResult<PreviewDescriptor> {
    let fail = |message: &str| PreviewError::parse(line, message);

    let rest = line
        .strip_prefix("Preview ")
        .ok_or_else(|| fail("missing 'Preview ' prefix"))?;

    let (index, rest) = rest
        .split_once(": ")
        .ok_or_else(|| fail("missing ': ' after index"))?;
    let index: u32 = index
        .parse()
        .map_err(|_| fail("index is not a non-negative integer"))?;

    let (mime_type, rest) = rest
        .split_once(", ")
        .ok_or_else(|| fail("missing ', ' after MIME type"))?;
    let subtype = mime_type
        .strip_prefix("image/")
        .ok_or_else(|| fail("MIME type is not image/<subtype>"))?;
    if subtype.is_empty() || !subtype.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(fail("MIME subtype must be lowercase ascii letters"));
    }

    let (dimensions, rest) = rest
        .split_once(" pixels, ")
        .ok_or_else(|| fail("missing ' pixels, ' after dimensions"))?;
    let (width, height) = dimensions
        .split_once('x')
        .ok_or_else(|| fail("dimensions are not <width>x<height>"))?;
    let width: u32 = width.parse().map_err(|_| fail("width is not an integer"))?;
    let height: u32 = height
        .parse()
        .map_err(|_| fail("height is not an integer"))?;

    let size_bytes: u64 = rest
        .strip_suffix(" bytes")
        .ok_or_else(|| fail("missing ' bytes' suffix"))?
        .parse()
        .map_err(|_| fail("size is not an integer"))?;

    Ok(PreviewDescriptor {
        index,
        mime_type: mime_type.to_string(),
        width,
        height,
        size_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_line() {
        let desc =
            parse_preview_line("Preview 1: image/jpeg, 1600x1200 pixels, 204800 bytes").unwrap();
        assert_eq!(desc.index, 1);
        assert_eq!(desc.mime_type, "image/jpeg");
        assert_eq!(desc.width, 1600);
        assert_eq!(desc.height, 1200);
        assert_eq!(desc.size_bytes, 204800);
    }

    #[test]
    fn parses_tiff_preview() {
        let desc =
            parse_preview_line("Preview 3: image/tiff, 160x120 pixels, 57600 bytes").unwrap();
        assert_eq!(desc.index, 3);
        assert_eq!(desc.mime_type, "image/tiff");
    }

    #[test]
    fn rejects_missing_prefix() {
        let err = parse_preview_line("Thumbnail 1: image/jpeg, 1x1 pixels, 1 bytes").unwrap_err();
        assert!(matches!(err, PreviewError::Parse { .. }));
    }

    #[test]
    fn rejects_non_image_mime_type() {
        assert!(parse_preview_line("Preview 1: video/mp4, 1x1 pixels, 1 bytes").is_err());
        assert!(parse_preview_line("Preview 1: image/JPEG, 1x1 pixels, 1 bytes").is_err());
        assert!(parse_preview_line("Preview 1: image/, 1x1 pixels, 1 bytes").is_err());
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(parse_preview_line("Preview x: image/jpeg, 1x1 pixels, 1 bytes").is_err());
        assert!(parse_preview_line("Preview 1: image/jpeg, axb pixels, 1 bytes").is_err());
        assert!(parse_preview_line("Preview 1: image/jpeg, 1x1 pixels, many bytes").is_err());
    }

    #[test]
    fn rejects_truncated_line() {
        assert!(parse_preview_line("Preview 1: image/jpeg, 1600x1200 pixels").is_err());
        assert!(parse_preview_line("").is_err());
    }
}
