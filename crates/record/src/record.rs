use std::{collections::BTreeMap, path::Path};

use log::{debug, warn};
use samedia_fs::{FilenameInfo, OsStatProvider, OsStats, PathInfo, PathResolver, StatProvider};
use samedia_runtime::METADATA_PLACEHOLDER;
use samedia_time::{
    FuzzyDateParser, TimeLabel, TimestampCandidates, TokenDateParser, extract_with, now_timestamp,
    select_canonical,
};
use serde::Serialize;

use crate::{error::RecordError, identifier::Identifier};

/// The reconciled floor timestamp and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanonicalTimestamp {
    pub label: TimeLabel,
    pub value: f64,
}

/// Everything known about one input path.
///
/// Stats, candidates and the canonical timestamp are only filled in for
/// regular files; check `path().kind()` first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRecord {
    path: PathInfo,
    os_stats: Option<OsStats>,
    timestamps: Option<TimestampCandidates>,
    canonical_timestamp: Option<CanonicalTimestamp>,
    metadata: BTreeMap<String, String>,
}

impl FileRecord {
    /// Build against the real filesystem with the default date parser.
    pub fn build(raw: &str) -> Result<Self, RecordError> {
        Self::build_with(raw, &OsStatProvider, &TokenDateParser)
    }

    pub fn build_with<S, P>(raw: &str, provider: &S, parser: &P) -> Result<Self, RecordError>
    where
        S: StatProvider + ?Sized,
        P: FuzzyDateParser + ?Sized,
    {
        let path = PathResolver::new(provider).resolve(raw);

        let mut record = FileRecord {
            path,
            os_stats: None,
            timestamps: None,
            canonical_timestamp: None,
            metadata: placeholder_metadata(),
        };

        let Some(filename) = record.path.filename() else {
            debug!("[record] {:?} is {:?}, no stats", raw, record.path.kind());
            return Ok(record);
        };

        let stats = provider.stat(Path::new(raw)).map_err(|source| {
            warn!("[record] {:?} vanished before stat: {source}", raw);
            RecordError::Stat {
                path: raw.to_owned(),
                source,
            }
        })?;

        let candidates = collect_candidates(&stats, filename, parser, now_timestamp());
        let (label, value) = select_canonical(&candidates)?;

        record.os_stats = Some(stats);
        record.timestamps = Some(candidates);
        record.canonical_timestamp = Some(CanonicalTimestamp { label, value });

        Ok(record)
    }

    pub fn path(&self) -> &PathInfo {
        &self.path
    }

    pub fn os_stats(&self) -> Option<&OsStats> {
        self.os_stats.as_ref()
    }

    pub fn timestamps(&self) -> Option<&TimestampCandidates> {
        self.timestamps.as_ref()
    }

    pub fn canonical_timestamp(&self) -> Option<CanonicalTimestamp> {
        self.canonical_timestamp
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// A fresh time-ordered identifier seeded from the canonical timestamp.
    pub fn identifier(&self) -> Option<Identifier> {
        self.canonical_timestamp
            .map(|c| Identifier::from_timestamp(c.value))
    }
}

fn placeholder_metadata() -> BTreeMap<String, String> {
    let (key, value) = METADATA_PLACEHOLDER;
    BTreeMap::from([(key.to_owned(), value.to_owned())])
}

/// Candidates in population order: stat times after the epoch, a date found
/// in the file stem, then `process_time`.
pub fn collect_candidates<P: FuzzyDateParser + ?Sized>(
    stats: &OsStats,
    filename: &FilenameInfo,
    parser: &P,
    process_time: f64,
) -> TimestampCandidates {
    let mut out = TimestampCandidates::new();

    let stat_times = [
        (TimeLabel::Atime, stats.atime_ns, stats.atime()),
        (TimeLabel::Ctime, stats.ctime_ns, stats.ctime()),
        (TimeLabel::Mtime, stats.mtime_ns, stats.mtime()),
    ];
    for (label, raw, secs) in stat_times {
        if raw > 0 {
            out.insert(label, secs);
        } else if raw < 0 {
            debug!("[record] {:?}: {label:?} is before the epoch, dropped", filename.basename());
        }
    }

    if let Some(ts) = extract_with(parser, filename.stem()) {
        out.insert(TimeLabel::NameTime, ts);
    }

    out.insert(TimeLabel::ProcessTime, process_time);

    debug!(
        "[record] {:?}: {} timestamp candidates",
        filename.basename(),
        out.len()
    );
    out
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
