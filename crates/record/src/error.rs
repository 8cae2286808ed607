use std::{error::Error, fmt, io};

use samedia_time::ReconcileError;

#[derive(Debug)]
pub enum RecordError {
    /// The path classified as a file but could not be stat'ed afterwards.
    Stat { path: String, source: io::Error },
    Reconcile(ReconcileError),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Stat { path, source } => write!(f, "failed to stat {path:?}: {source}"),
            RecordError::Reconcile(e) => write!(f, "timestamp reconciliation failed: {e}"),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RecordError::Stat { source, .. } => Some(source),
            RecordError::Reconcile(e) => Some(e),
        }
    }
}

impl From<ReconcileError> for RecordError {
    fn from(e: ReconcileError) -> Self {
        RecordError::Reconcile(e)
    }
}
