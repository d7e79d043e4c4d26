//! Alternating-cursor expansion around a target birthday.

use dugout_calendar::{Date, days_between};
use dugout_io::{DayBuckets, PlayerRecord};
use tracing::debug;

use crate::error::NearestError;

/// Minimum age of a tracked player, in days (eighteen years plus the
/// leap days a span that long always contains).
pub const ANCHOR_DAYS: u32 = 365 * 18 + 4;

/// One player found near the target date.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestMatch {
    pub name: String,
    pub war: f64,
    pub birthdate: Date,
    /// Signed day distance from the target date; negative means the
    /// birthday falls before it.
    pub days_from_target: i64,
}

/// Finds at least `min_count` players with birthdays nearest to `target`,
/// cut back to exactly `min_count` in distance order.
///
/// `today` is passed in rather than read from a clock. When the target
/// lies within eighteen years of `today`, no tracked player can have
/// been born near it, so the lookup anchors [`ANCHOR_DAYS`] earlier and
/// expands toward the past only. The anchor prunes the search space;
/// reported distances are always measured from `target` itself.
///
/// Matches on the origin day itself require the birth year to equal the
/// origin's year; expanded days contribute every record in their bucket
/// regardless of birth year, at the signed distance of the expansion
/// cursor from the target. Same-distance ties order future-side first.
///
/// # Errors
///
/// [`NearestError::ZeroMinCount`] for `min_count == 0`,
/// [`NearestError::InsufficientRecords`] when the dataset is smaller
/// than `min_count`, and [`NearestError::Calendar`] if a matched record
/// carries a birth year that cannot host its calendar day.
pub fn find_nearest(
    buckets: &DayBuckets,
    target: Date,
    min_count: usize,
    today: Date,
) -> Result<Vec<NearestMatch>, NearestError> {
    if min_count == 0 {
        return Err(NearestError::ZeroMinCount);
    }
    let available = buckets.total_records();
    if available < min_count {
        return Err(NearestError::InsufficientRecords {
            available,
            min_count,
        });
    }

    let too_recent = days_between(today, target) < i64::from(ANCHOR_DAYS);
    let origin = if too_recent {
        target.minus_days(ANCHOR_DAYS)
    } else {
        target
    };
    debug!(%target, %origin, anchored = too_recent, "nearest search");

    let mut matches = Vec::new();
    let origin_distance = days_between(origin, target);
    for record in buckets.day(origin.doy()) {
        if record.born == origin.year() {
            matches.push(to_match(record, origin, origin_distance)?);
        }
    }

    let mut next_cursor = origin;
    let mut prev_cursor = origin;
    while matches.len() < min_count {
        if !too_recent {
            next_cursor = next_cursor.next();
            collect_day(buckets, next_cursor, target, &mut matches)?;
            if matches.len() >= min_count {
                break;
            }
        }
        prev_cursor = prev_cursor.prev();
        collect_day(buckets, prev_cursor, target, &mut matches)?;
    }

    matches.truncate(min_count);
    Ok(matches)
}

fn collect_day(
    buckets: &DayBuckets,
    cursor: Date,
    target: Date,
    matches: &mut Vec<NearestMatch>,
) -> Result<(), NearestError> {
    let distance = days_between(cursor, target);
    for record in buckets.day(cursor.doy()) {
        matches.push(to_match(record, cursor, distance)?);
    }
    Ok(())
}

fn to_match(record: &PlayerRecord, day: Date, distance: i64) -> Result<NearestMatch, NearestError> {
    let birthdate = Date::new(record.born, day.month(), day.day())?;
    Ok(NearestMatch {
        name: record.name.clone(),
        war: record.war,
        birthdate,
        days_from_target: distance,
    })
}
