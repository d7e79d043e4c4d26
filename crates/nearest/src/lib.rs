//! # dugout-nearest
//!
//! Finds the players whose birthdays fall nearest to a target date.
//!
//! The search starts at the target's calendar day and expands outward
//! one day at a time, alternating between the next and previous day, so
//! matches come out ordered by distance without a global sort. Stepping
//! real [`Date`](dugout_calendar::Date) cursors rather than raw
//! day-of-year slots keeps the expansion leap-aware: February 29 is
//! visited exactly when a cursor's year admits it.

mod error;
mod search;

pub use error::NearestError;
pub use search::{ANCHOR_DAYS, NearestMatch, find_nearest};
