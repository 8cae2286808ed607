mod candidates;
mod extract;
mod lexer;
mod parser;
mod reconcile;

pub use candidates::{TimeLabel, TimestampCandidates};
pub use extract::{
    TimestampRange, extract_from_text, extract_with, local_timestamp, now_timestamp, validate,
    validate_in,
};
pub use parser::{FuzzyDateParser, TokenDateParser};
pub use reconcile::{ReconcileError, select_canonical};
