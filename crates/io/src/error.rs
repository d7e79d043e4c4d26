//! Error types for dugout-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the dugout-io crate.
///
/// Covers missing files, CSV decoding failures, calendar conversion
/// issues, bucket-shape mismatches, and accumulated record validation
/// problems.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required per-day CSV file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error from the CSV reader.
    #[error("csv error in {}: {reason}", path.display())]
    Csv {
        /// Path to the file being read.
        path: PathBuf,
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps an error originating from the dugout-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },

    /// Returned when a bucket set does not hold exactly 366 days.
    #[error("expected 366 day buckets, got {got}")]
    BucketCount {
        /// Number of buckets that was provided.
        got: usize,
    },

    /// Returned when one or more record validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

impl From<dugout_calendar::CalendarError> for IoError {
    fn from(e: dugout_calendar::CalendarError) -> Self {
        IoError::Calendar {
            reason: e.to_string(),
        }
    }
}
