use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use wirestamp_types::{Error, MalformedReason, Timestamp};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

#[derive(Debug, Serialize, Deserialize)]
struct Wrapper {
    #[serde(rename = "time")]
    when: Timestamp,
}

// ── Construction ─────────────────────────────────────────────────

#[test]
fn now_is_set_and_whole_seconds() {
    let ts = Timestamp::now();
    assert!(!ts.is_zero());
    let instant = ts.instant().unwrap();
    assert_eq!(instant.timestamp_subsec_nanos(), 0);
    assert_eq!(instant.offset().local_minus_utc(), 0);
}

#[test]
fn now_differs_from_a_later_instant() {
    let ts = Timestamp::now();
    let later = Timestamp::lift(Utc::now() + TimeDelta::seconds(1));
    assert_ne!(ts.difference(&later), Some(TimeDelta::zero()));
    assert_eq!(ts.difference(&ts), Some(TimeDelta::zero()));
}

#[test]
fn lift_keeps_original_offset() {
    let pst = FixedOffset::west_opt(8 * 3600).unwrap();
    let local = pst.with_ymd_and_hms(2018, 11, 18, 9, 4, 23).unwrap();
    let ts = Timestamp::lift(local);
    assert_eq!(ts.instant().unwrap().offset(), &pst);
    assert_eq!(ts.to_utc(), Some(utc(2018, 11, 18, 17, 4, 23)));
}

#[test]
fn from_datetime_is_lift() {
    let instant = utc(2020, 2, 29, 12, 0, 0);
    assert_eq!(Timestamp::from(instant), Timestamp::lift(instant));
}

// ── Zero value ───────────────────────────────────────────────────

#[test]
fn default_is_unset() {
    assert_eq!(Timestamp::default(), Timestamp::Unset);
    assert!(Timestamp::default().is_zero());
    assert!(Timestamp::unset().is_zero());
}

#[test]
fn epoch_is_not_zero() {
    let epoch = Timestamp::lift(DateTime::<Utc>::from_timestamp(0, 0).unwrap());
    assert!(!epoch.is_zero());
    assert_ne!(epoch, Timestamp::unset());
}

#[test]
fn unset_has_no_instant() {
    let ts = Timestamp::unset();
    assert_eq!(ts.instant(), None);
    assert_eq!(ts.to_utc(), None);
    assert_eq!(ts.difference(&Timestamp::now()), None);
    assert_eq!(Timestamp::now().difference(&ts), None);
}

// ── Comparison ───────────────────────────────────────────────────

#[test]
fn equality_ignores_offset() {
    let a = Timestamp::decode("2018-11-18T09:04:23-08:00").unwrap();
    let b = Timestamp::lift(utc(2018, 11, 18, 17, 4, 23));
    assert_eq!(a, b);
}

#[test]
fn equality_is_exact() {
    let a = Timestamp::decode("2018-12-14T20:36:58.789Z").unwrap();
    let b = Timestamp::decode("2018-12-14T20:36:58Z").unwrap();
    assert_ne!(a, b);
    assert_eq!(a.difference(&b), Some(TimeDelta::milliseconds(789)));
}

#[test]
fn ordering_by_instant_with_unset_first() {
    let early = Timestamp::lift(utc(2001, 1, 1, 0, 0, 0));
    let late = Timestamp::lift(utc(2002, 1, 1, 0, 0, 0));
    assert!(early < late);
    assert!(Timestamp::unset() < early);
    assert_eq!(late.difference(&early).unwrap().num_days(), 365);
    assert_eq!(early.difference(&late).unwrap().num_days(), -365);
}

#[test]
fn hash_consistent_with_eq_across_offsets() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Timestamp::decode("2018-11-18T09:04:23-08:00").unwrap());
    set.insert(Timestamp::decode("2018-11-18T17:04:23Z").unwrap());
    assert_eq!(set.len(), 1);
}

// ── Encode ───────────────────────────────────────────────────────

#[test]
fn encode_is_canonical_utc() {
    let ts = Timestamp::decode("2018-11-18T09:04:23-08:00").unwrap();
    assert_eq!(ts.encode().unwrap(), "2018-11-18T17:04:23Z");
}

#[test]
fn encode_drops_fractional_seconds() {
    let ts = Timestamp::decode("2018-12-14T20:36:58.789Z").unwrap();
    assert_eq!(ts.encode().unwrap(), "2018-12-14T20:36:58Z");
}

#[test]
fn encode_unset_is_an_error() {
    assert_eq!(Timestamp::unset().encode(), Err(Error::Unset));
}

#[test]
fn encode_rejects_five_digit_year() {
    let instant = utc(10000, 1, 1, 0, 0, 0);
    let ts = Timestamp::lift(instant);
    assert_eq!(ts.encode(), Err(Error::OutOfRange { instant }));
    let err = serde_json::to_string(&ts).unwrap_err();
    assert!(err.to_string().contains("year outside 0000-9999"), "got {err}");
}

#[test]
fn encode_rejects_negative_year() {
    let instant = utc(-1, 12, 31, 23, 59, 59);
    assert_eq!(
        Timestamp::lift(instant).encode(),
        Err(Error::OutOfRange { instant })
    );
}

#[test]
fn encode_range_is_judged_in_utc() {
    // Local year 9999, UTC year 10000.
    let west = FixedOffset::west_opt(3600).unwrap();
    let local = west.with_ymd_and_hms(9999, 12, 31, 23, 30, 0).unwrap();
    assert!(matches!(
        Timestamp::lift(local).encode(),
        Err(Error::OutOfRange { .. })
    ));
}

#[test]
fn boundary_years_roundtrip() {
    for instant in [utc(0, 1, 1, 0, 0, 0), utc(9999, 12, 31, 23, 59, 59)] {
        let ts = Timestamp::lift(instant);
        let text = ts.encode().unwrap();
        assert_eq!(text.len(), 20, "got {text}");
        assert_eq!(Timestamp::decode(&text).unwrap(), ts);
    }
}

#[test]
fn serialize_unset_fails() {
    let err = serde_json::to_string(&Timestamp::unset()).unwrap_err();
    assert!(err.to_string().contains("cannot encode an unset timestamp"));
}

#[test]
fn serialize_optional_unset_as_null() {
    let value: Option<Timestamp> = None;
    assert_eq!(serde_json::to_string(&value).unwrap(), "null");
}

#[test]
fn serialize_is_quoted_canonical() {
    let ts = Timestamp::lift(utc(2018, 11, 27, 0, 54, 53));
    assert_eq!(serde_json::to_string(&ts).unwrap(), r#""2018-11-27T00:54:53Z""#);
}

// ── Decode ───────────────────────────────────────────────────────

#[test]
fn json_roundtrip_of_now() {
    let t1 = Timestamp::now();
    let json = serde_json::to_string(&t1).unwrap();
    let t2: Timestamp = serde_json::from_str(&json).unwrap();
    assert_eq!(t1, t2);
}

#[test]
fn decode_zulu() {
    let ts: Timestamp = serde_json::from_str(r#""2018-11-27T00:54:53Z""#).unwrap();
    assert!(!ts.is_zero());
    assert_eq!(ts.to_utc(), Some(utc(2018, 11, 27, 0, 54, 53)));
}

#[test]
fn decode_javascript_iso_string() {
    // (new Date).toISOString() in Chrome and Firefox
    let wrap: Wrapper = serde_json::from_str(r#"{"time": "2018-12-14T20:36:58.789Z"}"#).unwrap();
    assert_eq!(wrap.when.to_string(), "2018-12-14 20:36:58 +0000 UTC");
}

#[test]
fn decode_numeric_offset() {
    let ts: Timestamp = serde_json::from_str(r#""2018-11-18T09:04:23-08:00""#).unwrap();
    assert_eq!(ts, Timestamp::decode("2018-11-18T17:04:23Z").unwrap());
    assert_eq!(ts.instant().unwrap().offset().local_minus_utc(), -8 * 3600);
}

#[test]
fn decode_colonless_offset() {
    let ts = Timestamp::decode("2018-11-18T09:04:23-0800").unwrap();
    assert_eq!(ts.encode().unwrap(), "2018-11-18T17:04:23Z");
}

#[test]
fn decode_empty_is_malformed() {
    let err = Timestamp::decode("").unwrap_err();
    assert_eq!(
        err,
        Error::MalformedInput {
            input: String::new(),
            reason: MalformedReason::Empty,
        }
    );
    assert!(err.to_string().contains("empty date time"));
}

#[test]
fn deserialize_empty_mentions_empty_date_time() {
    let err = serde_json::from_str::<Timestamp>(r#""""#).unwrap_err();
    assert!(err.to_string().contains("empty date time"), "got {err}");
}

#[test]
fn decode_garbage_is_malformed() {
    let err = Timestamp::decode("not-a-date").unwrap_err();
    assert!(err.is_malformed_input());
    let msg = err.to_string();
    assert!(msg.contains("not-a-date"), "got {msg}");
    assert!(msg.contains("rfc3339"), "got {msg}");
    assert!(msg.contains("iso8601-basic-offset"), "got {msg}");
}

#[test]
fn decode_without_offset_is_malformed() {
    let err = Timestamp::decode("2018-11-18T09:04:23").unwrap_err();
    assert!(err.is_malformed_input());
}

#[test]
fn deserialize_garbage_fails_instead_of_defaulting() {
    let result = serde_json::from_str::<Wrapper>(r#"{"time": "yesterday"}"#);
    assert!(result.is_err());
}

#[test]
fn deserialize_non_string_fails() {
    assert!(serde_json::from_str::<Timestamp>("1543280093").is_err());
}

#[test]
fn from_str_matches_decode() {
    let parsed: Timestamp = "2018-11-27T00:54:53Z".parse().unwrap();
    assert_eq!(parsed, Timestamp::decode("2018-11-27T00:54:53Z").unwrap());
    assert!("".parse::<Timestamp>().is_err());
}

// ── Display ──────────────────────────────────────────────────────

#[test]
fn display_normalises_to_utc() {
    let ts = Timestamp::decode("2018-11-18T09:04:23-08:00").unwrap();
    assert_eq!(ts.to_string(), "2018-11-18 17:04:23 +0000 UTC");
}

#[test]
fn display_unset() {
    assert_eq!(Timestamp::unset().to_string(), "<unset>");
}
