//! Rank command: list the best (or worst) calendar days for a statistic.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use dugout_aggregate::aggregate_series;
use dugout_calendar::MONTH_NAMES;
use dugout_io::load_buckets;
use dugout_rank::{Direction, rank_with_contributors};

use crate::cli::RankArgs;
use crate::config;
use crate::convert;

/// Run the day ranking.
pub fn run(args: RankArgs) -> Result<()> {
    let _cmd = info_span!("rank").entered();
    let config = config::load(&args.config)?;

    let stat = convert::parse_stat(&args.stat)?;
    let mode = convert::resolve_mode(stat, args.total, args.average);
    let top_n = args.top_n.unwrap_or(config.rank.top_n);

    // "Best" means smallest for ERA and WHIP, so the sort direction
    // flips for those before the worst-first flag is applied.
    let best_first = !args.bottom;
    let want_largest = best_first != stat.lower_is_better();
    let direction = if want_largest {
        Direction::Descending
    } else {
        Direction::Ascending
    };

    let buckets = load_buckets(&config.io.data_dir).with_context(|| {
        format!(
            "failed to load player tables from {}",
            config.io.data_dir.display()
        )
    })?;
    let series = aggregate_series(&buckets, stat, mode, config.aggregate.war_min)
        .with_context(|| format!("failed to aggregate {mode} {stat}"))?;
    let ranked = rank_with_contributors(&buckets, &series, stat, direction, top_n)
        .context("failed to rank the series")?;
    info!(%stat, %mode, top_n, "days ranked");

    let label = if best_first { "Best" } else { "Worst" };
    println!("{label} {top_n} days by {mode} {stat}:");
    for (place, entry) in ranked.iter().enumerate() {
        let (month, day) = entry.doy.month_day();
        println!(
            "{:>2}. {} {:<2}  {:.3}",
            place + 1,
            MONTH_NAMES[(month - 1) as usize],
            day,
            entry.value
        );
        for contributor in &entry.contributors {
            println!("      {:<24} {:.3}", contributor.name, contributor.value);
        }
    }
    Ok(())
}
