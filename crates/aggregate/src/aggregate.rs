//! Per-day and per-series aggregation.

use std::fmt;

use dugout_innings::thirds_to_outs;
use dugout_io::{DayBuckets, PlayerRecord};

use crate::error::AggregateError;
use crate::stat::{AveragePolicy, Stat, TotalPolicy, Weight};

/// Whether a statistic is combined as a total or as an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Total,
    Average,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Total => f.write_str("total"),
            Mode::Average => f.write_str("average"),
        }
    }
}

/// Aggregates one statistic over a single day's player records.
///
/// `war_min` is the threshold for [`Stat::PlayersOverWar`]; the other
/// statistics ignore it. Totals of innings pitched are rendered in outs
/// notation, everything else is returned as-is.
///
/// # Errors
///
/// [`AggregateError::UnsupportedMode`] when the statistic does not
/// combine under `mode`, [`AggregateError::EmptyDay`] when an average is
/// requested over no records, and [`AggregateError::ZeroWeight`] when a
/// weighted average's denominator sums to zero.
pub fn aggregate_day(
    records: &[PlayerRecord],
    stat: Stat,
    mode: Mode,
    war_min: f64,
) -> Result<f64, AggregateError> {
    match mode {
        Mode::Total => total(records, stat, war_min),
        Mode::Average => average(records, stat),
    }
}

/// Aggregates one statistic over every day of the calendar, returning
/// one value per day slot in day-of-year order.
///
/// Days with no records contribute zero to a total series (an empty sum
/// or count is zero). An average series fails on the first empty day,
/// tagged with the month and day that produced the failure, as does any
/// statistic that does not combine under `mode`.
pub fn aggregate_series(
    buckets: &DayBuckets,
    stat: Stat,
    mode: Mode,
    war_min: f64,
) -> Result<Vec<f64>, AggregateError> {
    let mut series = Vec::with_capacity(dugout_io::NUM_DAYS);
    for (doy, records) in buckets.iter_days() {
        let value = aggregate_day(records, stat, mode, war_min).map_err(|source| {
            let (month, day) = doy.month_day();
            AggregateError::AtDay {
                month,
                day,
                source: Box::new(source),
            }
        })?;
        series.push(value);
    }
    Ok(series)
}

fn total(records: &[PlayerRecord], stat: Stat, war_min: f64) -> Result<f64, AggregateError> {
    let policy = stat
        .total_policy()
        .ok_or(AggregateError::UnsupportedMode {
            stat,
            mode: Mode::Total,
        })?;
    let value = match policy {
        TotalPolicy::Count => records.len() as f64,
        TotalPolicy::CountOverWar => records.iter().filter(|r| r.war > war_min).count() as f64,
        TotalPolicy::Sum => records.iter().map(|r| stat.value(r)).sum(),
        TotalPolicy::InningsSum => {
            let thirds: f64 = records.iter().map(|r| r.ip).sum();
            thirds_to_outs(thirds)
        }
    };
    Ok(value)
}

fn average(records: &[PlayerRecord], stat: Stat) -> Result<f64, AggregateError> {
    let policy = stat
        .average_policy()
        .ok_or(AggregateError::UnsupportedMode {
            stat,
            mode: Mode::Average,
        })?;
    if records.is_empty() {
        return Err(AggregateError::EmptyDay { stat });
    }
    match policy {
        AveragePolicy::HitsPerAtBat => {
            let hits: f64 = records.iter().map(|r| f64::from(r.h)).sum();
            let at_bats: f64 = records.iter().map(|r| f64::from(r.ab)).sum();
            if at_bats == 0.0 {
                return Err(AggregateError::ZeroWeight { stat });
            }
            Ok(hits / at_bats)
        }
        AveragePolicy::WeightedBy(weight) => {
            let weight_of = |r: &PlayerRecord| match weight {
                Weight::AtBats => f64::from(r.ab),
                Weight::PlateAppearances => f64::from(r.ab + r.bb),
                Weight::InningsPitched => r.ip,
            };
            let numerator: f64 = records.iter().map(|r| stat.value(r) * weight_of(r)).sum();
            let denominator: f64 = records.iter().map(weight_of).sum();
            if denominator == 0.0 {
                return Err(AggregateError::ZeroWeight { stat });
            }
            Ok(numerator / denominator)
        }
        AveragePolicy::Mean => {
            let sum: f64 = records.iter().map(|r| stat.value(r)).sum();
            Ok(sum / records.len() as f64)
        }
    }
}
