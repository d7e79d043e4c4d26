//! Series command: aggregate one statistic across all 366 calendar days.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use dugout_aggregate::aggregate_series;
use dugout_calendar::Doy;
use dugout_io::load_buckets;

use crate::cli::SeriesArgs;
use crate::config;
use crate::convert;

/// One day of an aggregated series, as emitted in JSON output.
#[derive(Serialize)]
struct SeriesPoint {
    month: u8,
    day: u8,
    value: f64,
}

/// Run the series aggregation.
pub fn run(args: SeriesArgs) -> Result<()> {
    let _cmd = info_span!("series").entered();
    let config = config::load(&args.config)?;

    let stat = convert::parse_stat(&args.stat)?;
    let mode = convert::resolve_mode(stat, args.total, args.average);

    let buckets = load_buckets(&config.io.data_dir).with_context(|| {
        format!(
            "failed to load player tables from {}",
            config.io.data_dir.display()
        )
    })?;
    let series = aggregate_series(&buckets, stat, mode, config.aggregate.war_min)
        .with_context(|| format!("failed to aggregate {mode} {stat}"))?;
    info!(%stat, %mode, "series aggregated");

    if args.json {
        let points = to_points(&series)?;
        println!("{}", serde_json::to_string_pretty(&points)?);
    } else {
        println!("{mode} {stat} by calendar day:");
        for point in to_points(&series)? {
            println!("  {:02}-{:02}  {:.3}", point.month, point.day, point.value);
        }
    }
    Ok(())
}

fn to_points(series: &[f64]) -> Result<Vec<SeriesPoint>> {
    series
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let (month, day) = Doy::from_index(index)?.month_day();
            Ok(SeriesPoint { month, day, value })
        })
        .collect()
}
