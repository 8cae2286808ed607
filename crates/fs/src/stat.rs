use std::{
    fs::{self, Metadata},
    io,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use log::trace;
use serde::Serialize;

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Result of the existence and type checks on a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathProbe {
    pub exists: bool,
    pub is_dir: bool,
    pub is_file: bool,
}

impl PathProbe {
    pub const MISSING: Self = Self {
        exists: false,
        is_dir: false,
        is_file: false,
    };

    fn from_metadata(meta: &Metadata) -> Self {
        Self {
            exists: true,
            is_dir: meta.is_dir(),
            is_file: meta.is_file(),
        }
    }
}

/// Filesystem capability used by path resolution and record building.
pub trait StatProvider {
    /// Existence and type of `path`. Never fails: any error reads as missing.
    fn probe(&self, path: &Path) -> PathProbe;

    /// One snapshot of the stat attributes of `path`.
    fn stat(&self, path: &Path) -> io::Result<OsStats>;
}

impl<T: StatProvider + ?Sized> StatProvider for &T {
    fn probe(&self, path: &Path) -> PathProbe {
        (**self).probe(path)
    }

    fn stat(&self, path: &Path) -> io::Result<OsStats> {
        (**self).stat(path)
    }
}

/// `StatProvider` backed by `std::fs`. Symlinks are followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsStatProvider;

impl StatProvider for OsStatProvider {
    fn probe(&self, path: &Path) -> PathProbe {
        match fs::metadata(path) {
            Ok(meta) => PathProbe::from_metadata(&meta),
            Err(e) => {
                trace!("[stat] probe {:?}: {e}", path);
                PathProbe::MISSING
            }
        }
    }

    fn stat(&self, path: &Path) -> io::Result<OsStats> {
        let meta = fs::metadata(path)?;
        Ok(OsStats::from_metadata(&meta))
    }
}

/// Unix-only stat fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnixAttrs {
    pub mode: u32,
    pub ino: u64,
    pub dev: u64,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
}

/// Raw stat attributes. Times are nanoseconds since the Unix epoch, 0 when
/// the platform does not report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OsStats {
    pub size: u64,
    pub atime_ns: i64,
    pub ctime_ns: i64,
    pub mtime_ns: i64,
    pub unix: Option<UnixAttrs>,
}

impl OsStats {
    #[cfg(unix)]
    pub fn from_metadata(meta: &Metadata) -> Self {
        use std::os::unix::fs::MetadataExt;

        Self {
            size: meta.size(),
            atime_ns: to_nanos(meta.atime(), meta.atime_nsec()),
            ctime_ns: to_nanos(meta.ctime(), meta.ctime_nsec()),
            mtime_ns: to_nanos(meta.mtime(), meta.mtime_nsec()),
            unix: Some(UnixAttrs {
                mode: meta.mode(),
                ino: meta.ino(),
                dev: meta.dev(),
                nlink: meta.nlink(),
                uid: meta.uid(),
                gid: meta.gid(),
            }),
        }
    }

    // Without a status-change time, creation time stands in for ctime.
    #[cfg(not(unix))]
    pub fn from_metadata(meta: &Metadata) -> Self {
        Self {
            size: meta.len(),
            atime_ns: system_time_nanos(meta.accessed().ok()),
            ctime_ns: system_time_nanos(meta.created().ok()),
            mtime_ns: system_time_nanos(meta.modified().ok()),
            unix: None,
        }
    }

    pub fn atime(&self) -> f64 {
        nanos_to_secs(self.atime_ns)
    }

    pub fn ctime(&self) -> f64 {
        nanos_to_secs(self.ctime_ns)
    }

    pub fn mtime(&self) -> f64 {
        nanos_to_secs(self.mtime_ns)
    }
}

#[cfg(unix)]
fn to_nanos(secs: i64, nsec: i64) -> i64 {
    secs.saturating_mul(1_000_000_000).saturating_add(nsec)
}

/// Nanoseconds since the epoch; `None` and pre-epoch times map to 0.
#[cfg_attr(unix, allow(dead_code))]
pub(crate) fn system_time_nanos(t: Option<SystemTime>) -> i64 {
    t.and_then(|tt| tt.duration_since(UNIX_EPOCH).ok())
        .map(|d| i64::try_from(d.as_nanos()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

pub(crate) fn nanos_to_secs(ns: i64) -> f64 {
    ns as f64 / NANOS_PER_SEC
}

#[cfg(test)]
#[path = "stat_tests.rs"]
mod tests;
