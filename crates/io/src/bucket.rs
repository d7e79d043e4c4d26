//! Per-calendar-day record buckets.

use dugout_calendar::Doy;

use crate::error::IoError;
use crate::record::PlayerRecord;

/// Number of calendar-day buckets (February 29 always has a slot).
pub const NUM_DAYS: usize = 366;

/// All player records grouped by birth calendar day.
///
/// One bucket per day-of-year in year order, 366 in total; the February
/// 29 bucket is always present and simply empty when the dataset has no
/// leap-day births. Constructed once at session start and borrowed
/// immutably by every query — there is no hidden cache and no interior
/// mutability, so a `DayBuckets` can be shared freely across threads if
/// a server context ever needs it.
#[derive(Debug, Clone)]
pub struct DayBuckets {
    days: Vec<Vec<PlayerRecord>>,
}

impl DayBuckets {
    /// Creates `DayBuckets` from exactly 366 per-day record vectors in
    /// year order (index 0 = January 1).
    ///
    /// # Errors
    ///
    /// Returns [`IoError::BucketCount`] if `days` does not hold exactly
    /// 366 entries.
    pub fn new(days: Vec<Vec<PlayerRecord>>) -> Result<Self, IoError> {
        if days.len() != NUM_DAYS {
            return Err(IoError::BucketCount { got: days.len() });
        }
        Ok(Self { days })
    }

    /// Returns the records for one calendar day.
    pub fn day(&self, doy: Doy) -> &[PlayerRecord] {
        &self.days[doy.index()]
    }

    /// Iterates the buckets in year order together with their day-of-year.
    pub fn iter_days(&self) -> impl Iterator<Item = (Doy, &[PlayerRecord])> {
        self.days.iter().enumerate().map(|(i, records)| {
            let doy = Doy::from_index(i).expect("bucket index is always < 366");
            (doy, records.as_slice())
        })
    }

    /// Total number of player records across all days.
    pub fn total_records(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_days() -> Vec<Vec<PlayerRecord>> {
        vec![Vec::new(); NUM_DAYS]
    }

    #[test]
    fn new_requires_366_days() {
        assert!(DayBuckets::new(empty_days()).is_ok());

        let err = DayBuckets::new(vec![Vec::new(); 365]).unwrap_err();
        assert!(matches!(err, IoError::BucketCount { got: 365 }));
    }

    #[test]
    fn day_lookup_by_doy() {
        let mut days = empty_days();
        let feb29 = Doy::from_month_day(2, 29).unwrap();
        days[feb29.index()].push(PlayerRecord {
            name: "Leap Day Guy".to_string(),
            born: 1976,
            ..PlayerRecord::default()
        });

        let buckets = DayBuckets::new(days).unwrap();
        assert_eq!(buckets.day(feb29).len(), 1);
        assert_eq!(buckets.day(feb29)[0].name, "Leap Day Guy");
        assert!(buckets.day(Doy::from_month_day(3, 1).unwrap()).is_empty());
    }

    #[test]
    fn iter_days_covers_all_366_in_order() {
        let buckets = DayBuckets::new(empty_days()).unwrap();
        let doys: Vec<u16> = buckets.iter_days().map(|(doy, _)| doy.get()).collect();
        assert_eq!(doys.len(), NUM_DAYS);
        assert_eq!(doys[0], 1);
        assert_eq!(doys[365], 366);
    }

    #[test]
    fn total_records_sums_all_buckets() {
        let mut days = empty_days();
        days[0].push(PlayerRecord::default());
        days[100].push(PlayerRecord::default());
        days[100].push(PlayerRecord::default());

        let buckets = DayBuckets::new(days).unwrap();
        assert_eq!(buckets.total_records(), 3);
    }
}
