//! Error types for the timestamp codec.

use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while encoding or decoding a [`crate::Timestamp`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input text is not an accepted date-time representation.
    #[error("malformed input {input:?}: {reason}")]
    MalformedInput {
        /// The offending text, exactly as received.
        input: String,
        /// Why it was rejected.
        reason: MalformedReason,
    },

    /// An unset timestamp has no wire representation.
    #[error("cannot encode an unset timestamp")]
    Unset,

    /// The UTC year does not fit the four-digit wire form.
    #[error("cannot encode {instant}: year outside 0000-9999")]
    OutOfRange {
        /// The rejected instant, in UTC.
        instant: DateTime<Utc>,
    },
}

impl Error {
    /// Returns true if this is a decode rejection.
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}

/// Cause attached to [`Error::MalformedInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The payload was the empty string.
    Empty,
    /// Every format in the chain rejected the payload, in chain order.
    NoMatchingFormat(Vec<FormatAttempt>),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty date time"),
            Self::NoMatchingFormat(attempts) => {
                f.write_str("matched no accepted format (")?;
                for (i, attempt) in attempts.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{attempt}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// One failed format in the decode chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatAttempt {
    /// Name of the format that was tried.
    pub format: &'static str,
    /// The parser's complaint.
    pub error: chrono::ParseError,
}

impl fmt::Display for FormatAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.format, self.error)
    }
}
