use std::{error::Error, fmt};

use log::debug;

use crate::candidates::{TimeLabel, TimestampCandidates};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileError {
    /// No candidates at all. Callers always add `processTime`, so this is a
    /// bug on their side.
    EmptyCandidateSet,
}

impl fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileError::EmptyCandidateSet => f.write_str("no timestamp candidates to reconcile"),
        }
    }
}

impl Error for ReconcileError {}

/// Pick the smallest candidate. Ties go to the first inserted label, and a
/// NaN never wins over a number.
pub fn select_canonical(
    candidates: &TimestampCandidates,
) -> Result<(TimeLabel, f64), ReconcileError> {
    let mut best: Option<(TimeLabel, f64)> = None;

    for (label, value) in candidates.iter() {
        best = match best {
            Some((_, current)) if value < current || (current.is_nan() && !value.is_nan()) => {
                Some((label, value))
            }
            Some(kept) => Some(kept),
            None => Some((label, value)),
        };
    }

    let picked = best.ok_or(ReconcileError::EmptyCandidateSet)?;
    debug!("[reconcile] floor is {} = {}", picked.0.as_str(), picked.1);
    Ok(picked)
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
