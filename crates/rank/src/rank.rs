//! Top-N ranking of a 366-day series.

use std::cmp::Ordering;

use dugout_aggregate::Stat;
use dugout_calendar::Doy;
use dugout_innings::thirds_to_outs;
use dugout_io::{DayBuckets, NUM_DAYS, PlayerRecord};

use crate::error::RankError;

/// Sort direction for a ranking.
///
/// Inverting the direction for lower-is-better statistics (ERA, WHIP)
/// is the caller's job, driven by [`Stat::lower_is_better`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// One ranked calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDay {
    pub doy: Doy,
    pub value: f64,
}

/// A player's contribution to a ranked day, with `value` already in
/// display form (innings pitched rendered in outs notation).
#[derive(Debug, Clone, PartialEq)]
pub struct Contributor {
    pub name: String,
    pub value: f64,
}

/// One ranked calendar day together with its top contributors.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub doy: Doy,
    pub value: f64,
    pub contributors: Vec<Contributor>,
}

/// How many contributing players a ranked day lists.
const CONTRIBUTORS_PER_DAY: usize = 3;

/// Ranks the series and returns the `top_n` days in `direction` order.
///
/// The series is sorted on a copy; each sorted value is then resolved
/// back to the first *unused* day index holding it. A cursor advances
/// monotonically through every run of duplicate values, so a value that
/// occurs on several days yields each of those days once.
///
/// # Errors
///
/// [`RankError::SeriesLength`] unless the series holds exactly one value
/// per calendar day, and [`RankError::InvalidTopN`] when `top_n` is zero
/// or exceeds the series length.
pub fn rank(series: &[f64], direction: Direction, top_n: usize) -> Result<Vec<RankedDay>, RankError> {
    if series.len() != NUM_DAYS {
        return Err(RankError::SeriesLength {
            expected: NUM_DAYS,
            got: series.len(),
        });
    }
    if top_n == 0 || top_n > series.len() {
        return Err(RankError::InvalidTopN {
            top_n,
            len: series.len(),
        });
    }

    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| nan_safe_cmp(*a, *b, direction));

    let mut ranked = Vec::with_capacity(top_n);
    let mut cursor = 0usize;
    let mut prev_bits: Option<u64> = None;
    for &value in sorted.iter().take(top_n) {
        let bits = value.to_bits();
        let start = match prev_bits {
            Some(p) if p == bits => cursor + 1,
            _ => 0,
        };
        let offset = series[start..]
            .iter()
            .position(|v| v.to_bits() == bits)
            .expect("sorted values always exist in the source series");
        cursor = start + offset;
        prev_bits = Some(bits);

        let doy = Doy::from_index(cursor).expect("series index is always < 366");
        ranked.push(RankedDay { doy, value });
    }
    Ok(ranked)
}

/// Ranks the series and attaches each day's top contributing players.
///
/// Contributors are the day's records sorted descending by `stat`, cut
/// to three, with innings-pitched values rendered in outs notation. The
/// head-count statistics have no per-record value, so their entries
/// carry no contributors.
pub fn rank_with_contributors(
    buckets: &DayBuckets,
    series: &[f64],
    stat: Stat,
    direction: Direction,
    top_n: usize,
) -> Result<Vec<RankedEntry>, RankError> {
    let ranked = rank(series, direction, top_n)?;
    Ok(ranked
        .into_iter()
        .map(|day| {
            let contributors = if stat.is_count() {
                Vec::new()
            } else {
                top_contributors(buckets.day(day.doy), stat)
            };
            RankedEntry {
                doy: day.doy,
                value: day.value,
                contributors,
            }
        })
        .collect())
}

fn nan_safe_cmp(a: f64, b: f64, direction: Direction) -> Ordering {
    let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
    match direction {
        Direction::Ascending => ord,
        Direction::Descending => ord.reverse(),
    }
}

fn top_contributors(records: &[PlayerRecord], stat: Stat) -> Vec<Contributor> {
    let mut sorted: Vec<&PlayerRecord> = records.iter().collect();
    sorted.sort_by(|a, b| nan_safe_cmp(stat.value(a), stat.value(b), Direction::Descending));
    sorted
        .into_iter()
        .take(CONTRIBUTORS_PER_DAY)
        .map(|record| {
            let raw = stat.value(record);
            let value = if stat.is_innings() {
                thirds_to_outs(raw)
            } else {
                raw
            };
            Contributor {
                name: record.name.clone(),
                value,
            }
        })
        .collect()
}
