//! Error types for ranking.

use thiserror::Error;

/// Errors produced while ranking a day series.
#[derive(Debug, Error)]
pub enum RankError {
    /// The series does not cover every calendar day.
    #[error("series must hold {expected} values, got {got}")]
    SeriesLength { expected: usize, got: usize },

    /// The requested cut is empty or larger than the series.
    #[error("top_n must be between 1 and {len}, got {top_n}")]
    InvalidTopN { top_n: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings_carry_the_numbers() {
        let err = RankError::SeriesLength {
            expected: 366,
            got: 12,
        };
        assert_eq!(err.to_string(), "series must hold 366 values, got 12");

        let err = RankError::InvalidTopN { top_n: 0, len: 366 };
        assert_eq!(err.to_string(), "top_n must be between 1 and 366, got 0");
    }
}
