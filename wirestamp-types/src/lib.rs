//! Core time type for wirestamp.
//!
//! This crate defines a single value type, [`Timestamp`], whose JSON form is
//! shared by producers written in several languages (browser JavaScript,
//! scripting-language services, other backends):
//! - Encoding always emits `YYYY-MM-DDTHH:MM:SSZ` (UTC, whole seconds)
//! - Decoding walks an ordered chain of accepted formats ([`DECODE_FORMATS`])
//! - Empty or unrecognised input fails with [`Error::MalformedInput`], never a
//!   silent default
//!
//! The zero value is an explicit variant ([`Timestamp::Unset`]) rather than a
//! magic date, so it cannot be mistaken for the Unix epoch.

mod error;
mod format;
mod timestamp;

pub use error::{Error, FormatAttempt, MalformedReason, Result};
pub use format::{
    CANONICAL_FORMAT, DECODE_FORMATS, DISPLAY_FORMAT, DecodeFormat, Decoded,
    ISO8601_BASIC_OFFSET, RFC3339, decode_with,
};
pub use timestamp::Timestamp;
