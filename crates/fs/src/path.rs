use std::path::{Path, is_separator};

use log::debug;
use serde::Serialize;

use crate::{
    filename::FilenameInfo,
    stat::{OsStatProvider, PathProbe, StatProvider},
};

/// What a raw path turned out to be. Every outcome of resolution is one of
/// these; none of them is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathKind {
    Directory,
    File,
    InvalidPath,
    NotAFile,
    EmptyFilename,
}

impl PathKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PathKind::Directory => "directory",
            PathKind::File => "file",
            PathKind::InvalidPath => "invalid-path",
            PathKind::NotAFile => "not-a-file",
            PathKind::EmptyFilename => "empty-filename",
        }
    }
}

/// First matching rule wins: missing, directory, not a regular file,
/// empty name, file.
pub fn classify(probe: PathProbe, name: &str) -> PathKind {
    match probe {
        PathProbe { exists: false, .. } => PathKind::InvalidPath,
        PathProbe { is_dir: true, .. } => PathKind::Directory,
        PathProbe { is_file: false, .. } => PathKind::NotAFile,
        _ if name.is_empty() => PathKind::EmptyFilename,
        _ => PathKind::File,
    }
}

/// Split `raw` at its last separator into (folder, name).
///
/// Trailing separators are trimmed from the folder unless it is made only
/// of separators (`"/a"` -> `("/", "a")`).
pub fn split_path(raw: &str) -> (&str, &str) {
    let Some(idx) = raw.rfind(is_separator) else {
        return ("", raw);
    };

    // Separators are ASCII, so idx + 1 is a char boundary.
    let (head, name) = raw.split_at(idx + 1);

    let trimmed = head.trim_end_matches(is_separator);
    let folder = if trimmed.is_empty() { head } else { trimmed };

    (folder, name)
}

/// A raw path with its classification. `filename` is set exactly when
/// `kind` is `File`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathInfo {
    raw_path: String,
    kind: PathKind,
    folder: Option<String>,
    filename: Option<FilenameInfo>,
}

impl PathInfo {
    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.raw_path)
    }

    pub fn kind(&self) -> PathKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind == PathKind::File
    }

    pub fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }

    pub fn filename(&self) -> Option<&FilenameInfo> {
        self.filename.as_ref()
    }
}

/// Classifies raw paths through a `StatProvider`.
#[derive(Debug, Clone, Default)]
pub struct PathResolver<P = OsStatProvider> {
    provider: P,
}

impl<P: StatProvider> PathResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn resolve(&self, raw: &str) -> PathInfo {
        let probe = self.provider.probe(Path::new(raw));
        let (folder, name) = split_path(raw);
        let kind = classify(probe, name);

        debug!("[resolve] {:?} -> {}", raw, kind.as_str());

        let (folder, filename) = match kind {
            PathKind::InvalidPath | PathKind::NotAFile => (None, None),
            PathKind::Directory => (Some(raw.to_owned()), None),
            PathKind::EmptyFilename => (Some(folder.to_owned()), None),
            PathKind::File => (Some(folder.to_owned()), Some(FilenameInfo::analyze(name))),
        };

        PathInfo {
            raw_path: raw.to_owned(),
            kind,
            folder,
            filename,
        }
    }
}

/// Resolve `raw` against the real filesystem.
pub fn resolve(raw: &str) -> PathInfo {
    PathResolver::new(OsStatProvider).resolve(raw)
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
