mod error;
mod identifier;
mod record;

pub use error::RecordError;
pub use identifier::{Identifier, MAX_TIMESTAMP_MILLIS};
pub use record::{CanonicalTimestamp, FileRecord, collect_candidates};
