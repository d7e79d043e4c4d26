//! Day-of-year newtype over the fixed 366-day bucket calendar.

use crate::error::CalendarError;

/// Day-of-year in the fixed 366-day bucket calendar (1..=366).
///
/// February always has 29 days here: the birthday buckets reserve a leap
/// slot regardless of year, so February 29 is a valid bucket key even
/// though it is empty in non-leap contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

/// Number of days in each month of the bucket calendar
/// (index 0 unused, index 1 = January, ..., index 12 = December).
/// February is fixed at 29.
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts (index 0 unused, index 1 =
/// January starts at DOY 1, ...). Cumulative sum of [`DAYS_PER_MONTH`].
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 61, 92, 122, 153, 183, 214, 245, 275, 306, 336];

/// Month names matching the per-day CSV directory layout.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Doy {
    /// Creates a new `Doy` from a day-of-year value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is not in 1..=366.
    pub fn new(doy: u16) -> Result<Self, CalendarError> {
        if !(1..=366).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy });
        }
        Ok(Self(doy))
    }

    /// Creates a new `Doy` from a 0-based index (0..=365).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `index` is 366 or larger.
    pub fn from_index(index: usize) -> Result<Self, CalendarError> {
        let doy = u16::try_from(index.saturating_add(1)).unwrap_or(u16::MAX);
        Self::new(doy)
    }

    /// Creates a new `Doy` from a (month, day) pair in the bucket calendar.
    ///
    /// February 29 is always valid here; year-aware validation lives in
    /// [`Date::new`](crate::Date::new).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the
    /// given month.
    pub fn from_month_day(month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = DAYS_PER_MONTH[month as usize];
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        let doy = MONTH_START_DOY[month as usize] + day as u16 - 1;
        Ok(Self(doy))
    }

    /// Returns the inner day-of-year value (1..=366).
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the 0-based index suitable for array indexing (0..=365).
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Returns the `(month, day)` pair, walking the cumulative month
    /// lengths of the bucket calendar.
    pub fn month_day(self) -> (u8, u8) {
        let mut remaining = self.0;
        for month in 1..=12u8 {
            let len = u16::from(DAYS_PER_MONTH[month as usize]);
            if remaining <= len {
                return (month, remaining as u8);
            }
            remaining -= len;
        }
        unreachable!("doy in 1..=366 always resolves within December")
    }

    /// Returns the month (1..=12) for this day-of-year.
    pub fn month(self) -> u8 {
        self.month_day().0
    }

    /// Returns the day within the month (1..=31) for this day-of-year.
    pub fn day(self) -> u8 {
        self.month_day().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        assert_eq!(Doy::new(1).unwrap().get(), 1);
        assert_eq!(Doy::new(366).unwrap().get(), 366);
    }

    #[test]
    fn new_invalid_zero() {
        assert_eq!(
            Doy::new(0).unwrap_err(),
            CalendarError::InvalidDoy { doy: 0 }
        );
    }

    #[test]
    fn new_invalid_367() {
        assert_eq!(
            Doy::new(367).unwrap_err(),
            CalendarError::InvalidDoy { doy: 367 }
        );
    }

    #[test]
    fn from_index_valid() {
        assert_eq!(Doy::from_index(0).unwrap().get(), 1);
        assert_eq!(Doy::from_index(365).unwrap().get(), 366);
    }

    #[test]
    fn from_index_invalid() {
        assert!(Doy::from_index(366).is_err());
    }

    #[test]
    fn from_month_day_valid() {
        // Jan 1 = doy 1
        assert_eq!(Doy::from_month_day(1, 1).unwrap().get(), 1);
        // Feb 29 = doy 60 (leap slot always present)
        assert_eq!(Doy::from_month_day(2, 29).unwrap().get(), 60);
        // Mar 1 = doy 61
        assert_eq!(Doy::from_month_day(3, 1).unwrap().get(), 61);
        // Dec 31 = doy 366
        assert_eq!(Doy::from_month_day(12, 31).unwrap().get(), 366);
    }

    #[test]
    fn from_month_day_invalid_month() {
        assert_eq!(
            Doy::from_month_day(0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            Doy::from_month_day(13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn from_month_day_feb_30() {
        assert_eq!(
            Doy::from_month_day(2, 30).unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: 2,
                max_day: 29,
            }
        );
    }

    #[test]
    fn from_month_day_invalid_day_zero() {
        assert_eq!(
            Doy::from_month_day(6, 0).unwrap_err(),
            CalendarError::InvalidDay {
                day: 0,
                month: 6,
                max_day: 30,
            }
        );
    }

    #[test]
    fn roundtrip_all_366() {
        for d in 1..=366u16 {
            let doy = Doy::new(d).unwrap();
            let (m, day) = doy.month_day();
            let back = Doy::from_month_day(m, day).unwrap();
            assert_eq!(doy, back, "roundtrip failed for doy {d}: ({m}, {day})");
        }
    }

    #[test]
    fn accessors() {
        let doy = Doy::new(60).unwrap(); // Feb 29
        assert_eq!(doy.get(), 60);
        assert_eq!(doy.index(), 59);
        assert_eq!(doy.month(), 2);
        assert_eq!(doy.day(), 29);
    }

    #[test]
    fn table_integrity_days_per_month() {
        let total: u16 = DAYS_PER_MONTH[1..=12].iter().copied().map(u16::from).sum();
        assert_eq!(total, 366);
    }

    #[test]
    fn table_integrity_month_start() {
        for m in 1..12usize {
            assert_eq!(
                MONTH_START_DOY[m] + DAYS_PER_MONTH[m] as u16,
                MONTH_START_DOY[m + 1],
                "MONTH_START_DOY mismatch at month {m}"
            );
        }
    }

    #[test]
    fn copy_and_ord() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Doy>();
        assert!(Doy::new(1).unwrap() < Doy::new(366).unwrap());
    }
}
