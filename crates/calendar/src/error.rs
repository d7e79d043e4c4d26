//! Error types for the dugout-calendar crate.

/// Error type for all fallible operations in the dugout-calendar crate.
///
/// Covers validation failures for day-of-year values, month numbers,
/// day-within-month values (year-aware for February 29), and date-string
/// parsing. Invalid dates are rejected here, at the boundary, before any
/// arithmetic runs on them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a day-of-year value is outside the valid range 1..=366.
    #[error("invalid day of year: {doy} (must be 1..=366)")]
    InvalidDoy {
        /// The invalid day-of-year value that was provided.
        doy: u16,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month (accounting for the year when February is involved).
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a date string is not of the form `YYYY-MM-DD`.
    #[error("invalid date string: '{input}' (expected YYYY-MM-DD)")]
    InvalidFormat {
        /// The unparseable input.
        input: String,
    },
}
