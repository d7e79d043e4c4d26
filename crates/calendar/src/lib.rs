//! # dugout-calendar
//!
//! Date arithmetic for the 366-slot birthday calendar.
//!
//! Birthday buckets are keyed by calendar day independent of year, so the
//! bucket calendar always reserves a February 29 slot: [`Doy`] runs 1..=366
//! over the fixed month-length table [31, 29, 31, 30, 31, 30, 31, 31, 30,
//! 31, 30, 31]. [`Date`] adds year context and applies the simplified leap
//! rule `year % 4 == 0` when stepping across the February boundary (the
//! Gregorian century exception is deliberately omitted; it does not matter
//! for the 1830–2024 birth-year domain).
//!
//! ## Quick Start
//!
//! ```ignore
//! use dugout_calendar::{Date, Doy, days_between};
//!
//! // Day-of-year conversions over the fixed 366-day table
//! let doy = Doy::from_month_day(2, 29).unwrap(); // Feb 29 → DOY 60
//! assert_eq!(doy.get(), 60);
//!
//! // Year-aware stepping skips Feb 29 in non-leap years
//! let d = Date::new(2021, 2, 28).unwrap();
//! assert_eq!(d.next().month_day(), (3, 1));
//!
//! // Signed day distance
//! let a = Date::new(1990, 3, 1).unwrap();
//! let b = Date::new(1990, 2, 27).unwrap();
//! assert_eq!(days_between(a, b), 2);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | Day-of-year newtype over the fixed 366-day table |
//! | `date` | Leap-aware date with year context |
//! | `error` | Error types |

mod date;
mod doy;
mod error;

pub use date::{Date, days_between, is_leap_year};
pub use doy::{Doy, MONTH_NAMES};
pub use error::CalendarError;
