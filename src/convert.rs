//! Conversions from CLI strings into library-layer types.

use anyhow::{Context, Result};
use chrono::Datelike;

use dugout_aggregate::{Mode, Stat};
use dugout_calendar::{Date, Doy};

/// Parses a statistic name from the command line.
pub fn parse_stat(s: &str) -> Result<Stat> {
    Ok(s.parse()?)
}

/// Picks the aggregation mode from the `--total`/`--average` flags,
/// defaulting to whichever mode the statistic supports (totals for
/// counting statistics, averages for rates).
pub fn resolve_mode(stat: Stat, total: bool, average: bool) -> Mode {
    if total {
        Mode::Total
    } else if average {
        Mode::Average
    } else if stat.total_policy().is_some() {
        Mode::Total
    } else {
        Mode::Average
    }
}

/// Parses an `MM-DD` string into a bucket-calendar day.
pub fn parse_month_day(s: &str) -> Result<Doy> {
    let (m, d) = s
        .split_once('-')
        .with_context(|| format!("expected MM-DD, got '{s}'"))?;
    let month: u8 = m
        .parse()
        .with_context(|| format!("invalid month in '{s}'"))?;
    let day: u8 = d.parse().with_context(|| format!("invalid day in '{s}'"))?;
    Ok(Doy::from_month_day(month, day)?)
}

/// Parses a `YYYY-MM-DD` string into a [`Date`].
pub fn parse_date(s: &str) -> Result<Date> {
    Ok(s.parse()?)
}

/// Returns the override date if given, otherwise today per the system
/// clock. The only wall-clock read in the program.
pub fn today_or(override_date: Option<&str>) -> Result<Date> {
    if let Some(s) = override_date {
        return parse_date(s);
    }
    let now = chrono::Local::now().date_naive();
    Ok(Date::new(now.year(), now.month() as u8, now.day() as u8)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_day_parses_leap_slot() {
        let doy = parse_month_day("02-29").unwrap();
        assert_eq!(doy.get(), 60);
    }

    #[test]
    fn month_day_rejects_garbage() {
        assert!(parse_month_day("0229").is_err());
        assert!(parse_month_day("13-01").is_err());
        assert!(parse_month_day("02-30").is_err());
    }

    #[test]
    fn mode_defaults_follow_the_statistic() {
        assert_eq!(resolve_mode(Stat::HomeRuns, false, false), Mode::Total);
        assert_eq!(resolve_mode(Stat::Era, false, false), Mode::Average);
        assert_eq!(resolve_mode(Stat::HomeRuns, false, true), Mode::Average);
    }

    #[test]
    fn today_override_wins_over_the_clock() {
        let d = today_or(Some("1999-12-31")).unwrap();
        assert_eq!(d, Date::new(1999, 12, 31).unwrap());
    }
}
