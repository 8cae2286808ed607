mod config;
mod filename;
mod path;
mod stat;

pub use config::{MIME_TYPES, guess_mime_type};
pub use filename::FilenameInfo;
pub use path::{PathInfo, PathKind, PathResolver, classify, resolve, split_path};
pub use stat::{OsStatProvider, OsStats, PathProbe, StatProvider, UnixAttrs};
