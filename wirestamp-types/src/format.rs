//! Textual forms accepted and produced by [`crate::Timestamp`].
//!
//! Decoding is an ordered list of `(name, parser)` pairs. The first parser
//! that accepts the text wins; later entries exist for historical producers
//! and are only consulted when earlier ones fail.

use crate::error::{Error, FormatAttempt, MalformedReason, Result};
use chrono::{DateTime, FixedOffset, ParseResult};

/// strftime pattern of the canonical wire form. Applied to UTC values only.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// strftime pattern of the human-readable form. Applied to UTC values only.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z UTC";

/// A named parser in the decode chain.
#[derive(Debug, Clone, Copy)]
pub struct DecodeFormat {
    /// Short identifier used in diagnostics.
    pub name: &'static str,
    /// Parses the whole input or fails.
    pub parse: fn(&str) -> ParseResult<DateTime<FixedOffset>>,
}

/// RFC 3339, with optional fractional seconds and either `Z` or `+hh:mm`.
///
/// Covers our own canonical output and `Date.prototype.toISOString()`.
pub const RFC3339: DecodeFormat = DecodeFormat {
    name: "rfc3339",
    parse: DateTime::<FixedOffset>::parse_from_rfc3339,
};

/// ISO 8601 with a colon-less numeric offset (`2018-11-18T09:04:23-0800`),
/// as emitted by `strftime("%FT%T%z")` in scripting languages.
pub const ISO8601_BASIC_OFFSET: DecodeFormat = DecodeFormat {
    name: "iso8601-basic-offset",
    parse: parse_iso8601_basic_offset,
};

/// The accepted formats, in priority order.
pub const DECODE_FORMATS: &[DecodeFormat] = &[RFC3339, ISO8601_BASIC_OFFSET];

fn parse_iso8601_basic_offset(text: &str) -> ParseResult<DateTime<FixedOffset>> {
    DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z")
}

/// A successfully decoded instant and the format that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The instant, with the offset it was written in.
    pub instant: DateTime<FixedOffset>,
    /// Name of the winning [`DecodeFormat`].
    pub format: &'static str,
}

/// Runs `text` through `formats` in order.
///
/// The empty string is rejected before any format is tried. When nothing
/// matches, the error lists every attempt so upstream producers can be
/// diagnosed.
pub fn decode_with(formats: &[DecodeFormat], text: &str) -> Result<Decoded> {
    if text.is_empty() {
        return Err(Error::MalformedInput {
            input: String::new(),
            reason: MalformedReason::Empty,
        });
    }

    let mut attempts = Vec::with_capacity(formats.len());
    for format in formats {
        match (format.parse)(text) {
            Ok(instant) => {
                return Ok(Decoded {
                    instant,
                    format: format.name,
                });
            }
            Err(error) => attempts.push(FormatAttempt {
                format: format.name,
                error,
            }),
        }
    }

    Err(Error::MalformedInput {
        input: text.to_string(),
        reason: MalformedReason::NoMatchingFormat(attempts),
    })
}
