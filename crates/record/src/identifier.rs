use std::fmt;

use serde::Serialize;
use uuid::{NoContext, Timestamp, Uuid};

/// Time-ordered unique identifier (UUIDv7) seeded from an epoch timestamp.
///
/// Identifiers sort by their millisecond timestamp first; the tail is random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(Uuid);

/// Largest millisecond timestamp a UUIDv7 can carry (48 bits, year 10889).
pub const MAX_TIMESTAMP_MILLIS: u64 = (1 << 48) - 1;

impl Identifier {
    /// Timestamps are clamped to what the identifier can encode: negative and
    /// non-finite inputs become the epoch, anything past
    /// `MAX_TIMESTAMP_MILLIS` becomes that maximum. Precision is milliseconds.
    pub fn from_timestamp(ts: f64) -> Self {
        let millis = if ts.is_finite() {
            (ts * 1000.0).clamp(0.0, MAX_TIMESTAMP_MILLIS as f64) as u64
        } else {
            0
        };
        let nanos = (millis % 1000) as u32 * 1_000_000;

        Self(Uuid::new_v7(Timestamp::from_unix(NoContext, millis / 1000, nanos)))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Milliseconds since the epoch encoded in the identifier.
    pub fn timestamp_millis(&self) -> Option<u64> {
        let (secs, nanos) = self.0.get_timestamp()?.to_unix();
        Some(secs * 1000 + u64::from(nanos) / 1_000_000)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}
