use serde::Serialize;

use crate::config::guess_mime_type;

/// A file name split into stem, extension and MIME guess.
///
/// Derived fields are always recomputed together from `basename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilenameInfo {
    basename: String,
    stem: String,
    /// Includes the leading dot, empty when there is none.
    extension: String,
    mime_type: Option<&'static str>,
}

impl FilenameInfo {
    pub fn analyze(basename: impl Into<String>) -> Self {
        let basename = basename.into();
        let (stem, extension) = split_extension(&basename);
        let mime_type = guess_mime_type(extension);

        Self {
            stem: stem.to_owned(),
            extension: extension.to_owned(),
            mime_type,
            basename,
        }
    }

    /// Replace the basename and re-derive everything else.
    pub fn set_basename(&mut self, basename: impl Into<String>) {
        *self = Self::analyze(basename);
    }

    pub fn basename(&self) -> &str {
        &self.basename
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn mime_type(&self) -> Option<&'static str> {
        self.mime_type
    }
}

/// Split on the last dot. Leading dots belong to the stem, so ".bashrc"
/// and "..." have no extension.
fn split_extension(name: &str) -> (&str, &str) {
    let Some(dot) = name.rfind('.') else {
        return (name, "");
    };

    if name[..dot].bytes().all(|b| b == b'.') {
        return (name, "");
    }

    name.split_at(dot)
}

#[cfg(test)]
#[path = "filename_tests.rs"]
mod tests;
