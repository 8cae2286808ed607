use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use log::debug;

use crate::parser::{FuzzyDateParser, TokenDateParser};

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Current wall-clock time as fractional epoch seconds.
pub fn now_timestamp() -> f64 {
    let now = Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_nanos()) / NANOS_PER_SEC
}

/// Closed range `[low, high]` of acceptable epoch timestamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimestampRange {
    pub low: f64,
    pub high: f64,
}

impl TimestampRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// `[0, now]`, with `now` read when this is called.
    pub fn until_now() -> Self {
        Self::new(0.0, now_timestamp())
    }

    pub fn contains(&self, ts: f64) -> bool {
        self.low <= ts && ts <= self.high
    }
}

/// Validate against `[0, now]`.
pub fn validate(candidate: f64) -> Option<f64> {
    validate_in(candidate, TimestampRange::until_now())
}

/// `Some(candidate)` when it is a finite number inside `range`.
pub fn validate_in(candidate: f64, range: TimestampRange) -> Option<f64> {
    (candidate.is_finite() && range.contains(candidate)).then_some(candidate)
}

/// Epoch seconds for a wall-clock time read in the local time zone.
///
/// Ambiguous times (DST fold) take the earlier instant. Times that do not
/// exist locally (DST gap) are read as UTC.
pub fn local_timestamp(dt: NaiveDateTime) -> f64 {
    let instant = Local
        .from_local_datetime(&dt)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| dt.and_utc());

    instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) / NANOS_PER_SEC
}

/// Date embedded in `text`, as validated epoch seconds.
pub fn extract_from_text(text: &str) -> Option<f64> {
    extract_with(&TokenDateParser, text)
}

/// First reading from `parser` that passes `validate`.
pub fn extract_with<P: FuzzyDateParser + ?Sized>(parser: &P, text: &str) -> Option<f64> {
    let range = TimestampRange::until_now();

    parser.parse_all(text).into_iter().find_map(|parsed| {
        let valid = validate_in(local_timestamp(parsed), range);
        if valid.is_none() {
            debug!("[extract] {:?}: {parsed} is out of range, dropped", text);
        }
        valid
    })
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
