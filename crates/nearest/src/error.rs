//! Error types for the nearest-birthday search.

use dugout_calendar::CalendarError;
use thiserror::Error;

/// Errors produced by the nearest-birthday search.
#[derive(Debug, Error)]
pub enum NearestError {
    /// A match's recorded birth year cannot host its calendar day, such
    /// as a February 29 record born in a non-leap year.
    #[error("invalid birthdate in records: {0}")]
    Calendar(#[from] CalendarError),

    /// The dataset holds fewer records than the search was asked to
    /// return, so expansion could never finish.
    #[error("dataset holds {available} records, fewer than the {min_count} requested")]
    InsufficientRecords { available: usize, min_count: usize },

    /// A search for zero matches is meaningless.
    #[error("min_count must be at least 1")]
    ZeroMinCount,
}
