//! Leap-aware date with year context.

use std::fmt;
use std::str::FromStr;

use crate::doy::{DAYS_PER_MONTH, Doy};
use crate::error::CalendarError;

/// Returns `true` under the simplified leap rule `year % 4 == 0`.
///
/// The Gregorian century exception (1900, 2100, ...) is deliberately
/// omitted to match the source data's behavior over the 1830–2024
/// birth-year domain.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0
}

/// A calendar date with year context.
///
/// Unlike [`Doy`], which always admits February 29, `Date` validates the
/// day against the actual year: `Date::new(2021, 2, 29)` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl Date {
    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the
    /// given month and year (February 29 requires a leap year).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = if month == 2 && !is_leap_year(year) {
            28
        } else {
            DAYS_PER_MONTH[month as usize]
        };
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Returns the bucket-calendar day-of-year for this date.
    ///
    /// This cannot fail: every valid `Date` maps into the fixed 366-day
    /// table (February 29 only exists on leap years, and the table always
    /// has its slot).
    pub fn doy(self) -> Doy {
        Doy::from_month_day(self.month, self.day)
            .expect("Date always holds a (month, day) valid in the bucket calendar")
    }

    /// Returns the next calendar date.
    ///
    /// In a non-leap year February 28 is treated as month-end, so the
    /// result skips February 29 and lands on March 1. December 31 wraps
    /// to January 1 of the following year.
    pub fn next(self) -> Self {
        if self.month == 2 && self.day == 28 && !is_leap_year(self.year) {
            return Self {
                year: self.year,
                month: 3,
                day: 1,
            };
        }
        if self.day < DAYS_PER_MONTH[self.month as usize] {
            Self {
                year: self.year,
                month: self.month,
                day: self.day + 1,
            }
        } else if self.month < 12 {
            Self {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }

    /// Returns the previous calendar date.
    ///
    /// In a non-leap year March 1 steps back to February 28, skipping
    /// February 29. January 1 wraps to December 31 of the previous year.
    pub fn prev(self) -> Self {
        if self.month == 3 && self.day == 1 && !is_leap_year(self.year) {
            return Self {
                year: self.year,
                month: 2,
                day: 28,
            };
        }
        if self.day > 1 {
            Self {
                year: self.year,
                month: self.month,
                day: self.day - 1,
            }
        } else if self.month > 1 {
            // The non-leap March 1 case was handled above, so stepping
            // into February here always lands on the 29th of a leap year.
            Self {
                year: self.year,
                month: self.month - 1,
                day: DAYS_PER_MONTH[(self.month - 1) as usize],
            }
        } else {
            Self {
                year: self.year - 1,
                month: 12,
                day: 31,
            }
        }
    }

    /// Returns the date `n` days earlier.
    ///
    /// Steps day by day so the leap handling stays identical to
    /// [`prev`](Self::prev); callers only ever rewind a bounded span
    /// (the 18-year nearest-search anchor).
    pub fn minus_days(self, n: u32) -> Self {
        let mut d = self;
        for _ in 0..n {
            d = d.prev();
        }
        d
    }

    /// Day number of this date counted from year 0, under the simplified
    /// leap rule. Used for signed day distances.
    fn ordinal(self) -> i64 {
        let y = i64::from(self.year);
        // Leap years in 0..year (year 0 counts as leap under y % 4 == 0).
        let leaps_before = (y + 3).div_euclid(4);
        let mut doy = i64::from(self.doy().get());
        if self.month > 2 && !is_leap_year(self.year) {
            doy -= 1;
        }
        365 * y + leaps_before + doy - 1
    }
}

/// Signed number of days from `b` to `a` (positive when `a` is later).
pub fn days_between(a: Date, b: Date) -> i64 {
    a.ordinal() - b.ordinal()
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = CalendarError;

    /// Parses a `YYYY-MM-DD` date string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidFormat {
            input: s.to_string(),
        };
        let mut parts = s.splitn(3, '-');
        let year: i32 = parts.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
        let month: u8 = parts.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
        let day: u8 = parts.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
        Self::new(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = Date::new(1990, 6, 15).unwrap();
        assert_eq!(date.year(), 1990);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
        assert_eq!(date.month_day(), (6, 15));
    }

    #[test]
    fn new_feb_29_leap_year() {
        let date = Date::new(2020, 2, 29).unwrap();
        assert_eq!(date.doy().get(), 60);
    }

    #[test]
    fn new_feb_29_non_leap_rejected() {
        assert_eq!(
            Date::new(2021, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            Date::new(2000, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn next_within_month() {
        let d = Date::new(2000, 1, 15).unwrap();
        assert_eq!(d.next(), Date::new(2000, 1, 16).unwrap());
    }

    #[test]
    fn next_feb_28_non_leap_skips_29th() {
        let d = Date::new(2021, 2, 28).unwrap();
        assert_eq!(d.next(), Date::new(2021, 3, 1).unwrap());
    }

    #[test]
    fn next_feb_28_leap_hits_29th() {
        let d = Date::new(2020, 2, 28).unwrap();
        assert_eq!(d.next(), Date::new(2020, 2, 29).unwrap());
        assert_eq!(d.next().next(), Date::new(2020, 3, 1).unwrap());
    }

    #[test]
    fn next_dec_31_year_wrap() {
        let d = Date::new(1999, 12, 31).unwrap();
        assert_eq!(d.next(), Date::new(2000, 1, 1).unwrap());
    }

    #[test]
    fn prev_mar_1_non_leap_skips_29th() {
        let d = Date::new(2021, 3, 1).unwrap();
        assert_eq!(d.prev(), Date::new(2021, 2, 28).unwrap());
    }

    #[test]
    fn prev_mar_1_leap_hits_29th() {
        let d = Date::new(2020, 3, 1).unwrap();
        assert_eq!(d.prev(), Date::new(2020, 2, 29).unwrap());
    }

    #[test]
    fn prev_jan_1_year_wrap() {
        let d = Date::new(2000, 1, 1).unwrap();
        assert_eq!(d.prev(), Date::new(1999, 12, 31).unwrap());
    }

    #[test]
    fn next_prev_inverse_across_a_leap_cycle() {
        // Walk four full years (one leap cycle) forward, then back.
        let start = Date::new(2019, 7, 1).unwrap();
        let mut d = start;
        let steps = 365 * 4 + 1;
        for _ in 0..steps {
            d = d.next();
        }
        for _ in 0..steps {
            d = d.prev();
        }
        assert_eq!(d, start);
    }

    #[test]
    fn minus_days_rewinds() {
        let d = Date::new(2021, 3, 2).unwrap();
        assert_eq!(d.minus_days(2), Date::new(2021, 2, 28).unwrap());
    }

    #[test]
    fn days_between_same_date_is_zero() {
        let d = Date::new(1975, 8, 9).unwrap();
        assert_eq!(days_between(d, d), 0);
    }

    #[test]
    fn days_between_adjacent() {
        let a = Date::new(2021, 3, 1).unwrap();
        let b = Date::new(2021, 2, 28).unwrap();
        assert_eq!(days_between(a, b), 1);
        assert_eq!(days_between(b, a), -1);
    }

    #[test]
    fn days_between_across_leap_day() {
        let a = Date::new(2020, 3, 1).unwrap();
        let b = Date::new(2020, 2, 28).unwrap();
        assert_eq!(days_between(a, b), 2);
    }

    #[test]
    fn days_between_full_years() {
        let a = Date::new(2021, 1, 1).unwrap();
        let b = Date::new(2020, 1, 1).unwrap();
        assert_eq!(days_between(a, b), 366); // 2020 is leap
        let c = Date::new(2022, 1, 1).unwrap();
        assert_eq!(days_between(c, a), 365);
    }

    #[test]
    fn display_format() {
        let d = Date::new(1990, 6, 5).unwrap();
        assert_eq!(d.to_string(), "1990-06-05");
    }

    #[test]
    fn parse_roundtrip() {
        let d: Date = "1990-06-05".parse().unwrap();
        assert_eq!(d, Date::new(1990, 6, 5).unwrap());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "not-a-date".parse::<Date>().unwrap_err(),
            CalendarError::InvalidFormat { .. }
        ));
        assert!("1990-06".parse::<Date>().is_err());
    }

    #[test]
    fn ord_orders_chronologically() {
        let early = Date::new(1950, 12, 31).unwrap();
        let late = Date::new(1951, 1, 1).unwrap();
        assert!(early < late);
    }
}
