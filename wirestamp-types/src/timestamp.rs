//! The [`Timestamp`] value type and its serde codec.

use crate::error::{Error, Result};
use crate::format::{CANONICAL_FORMAT, DECODE_FORMATS, DISPLAY_FORMAT, decode_with};
use chrono::{DateTime, Datelike, FixedOffset, SubsecRound, TimeDelta, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Years that `%Y` renders as exactly four unsigned digits.
const WIRE_YEARS: RangeInclusive<i32> = 0..=9999;

/// A point in time that serializes identically across every producer.
///
/// Comparison, ordering and hashing act on the UTC instant: the same moment
/// lifted with two different offsets is equal. [`Timestamp::Unset`] orders
/// before every set instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Timestamp {
    /// The zero value: no instant was ever assigned.
    #[default]
    Unset,
    /// A real instant, kept in the offset it was created or parsed with.
    Set(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Creates a timestamp at the current time, in UTC, truncated to whole
    /// seconds so it survives an encode/decode round trip unchanged.
    #[must_use]
    pub fn now() -> Self {
        Self::Set(Utc::now().trunc_subsecs(0).fixed_offset())
    }

    /// Wraps an existing instant without converting it to UTC.
    ///
    /// Normalisation happens when the value is encoded or displayed.
    #[must_use]
    pub fn lift<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Self::Set(instant.fixed_offset())
    }

    /// Returns the zero value.
    #[must_use]
    pub const fn unset() -> Self {
        Self::Unset
    }

    /// Returns true if no instant was ever assigned.
    ///
    /// The Unix epoch is a real instant and is not zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the instant with its original offset.
    #[must_use]
    pub const fn instant(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Unset => None,
            Self::Set(instant) => Some(*instant),
        }
    }

    /// Returns the instant converted to UTC.
    #[must_use]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        self.instant().map(|instant| instant.with_timezone(&Utc))
    }

    /// Signed duration `self - other`, or `None` if either side is unset.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Option<TimeDelta> {
        Some(self.instant()?.signed_duration_since(other.instant()?))
    }

    /// Renders the canonical wire text (`YYYY-MM-DDTHH:MM:SSZ`, UTC).
    ///
    /// Fractional seconds are dropped. Unset timestamps have no wire form,
    /// nor do instants whose UTC year falls outside `0..=9999`.
    pub fn encode(&self) -> Result<String> {
        let utc = self.to_utc().ok_or(Error::Unset)?;
        if !WIRE_YEARS.contains(&utc.year()) {
            return Err(Error::OutOfRange { instant: utc });
        }
        Ok(utc.format(CANONICAL_FORMAT).to_string())
    }

    /// Parses wire text through [`DECODE_FORMATS`].
    ///
    /// `text` is the unquoted payload. The empty string is an error, not the
    /// zero value.
    pub fn decode(text: &str) -> Result<Self> {
        decode_with(DECODE_FORMATS, text).map(|decoded| Self::Set(decoded.instant))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(instant: DateTime<Tz>) -> Self {
        Self::lift(instant)
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

/// Log form, e.g. `2018-12-14 20:36:58 +0000 UTC`. Always UTC.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_utc() {
            Some(utc) => write!(f, "{}", utc.format(DISPLAY_FORMAT)),
            None => f.write_str("<unset>"),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = self.encode().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an RFC 3339 or ISO 8601 date-time string")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Timestamp, E>
    where
        E: de::Error,
    {
        Timestamp::decode(v).map_err(E::custom)
    }
}
