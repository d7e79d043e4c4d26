//! Nearest command: find the players born closest to a target date.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use dugout_io::load_buckets;
use dugout_nearest::find_nearest;

use crate::cli::NearestArgs;
use crate::config;
use crate::convert;

/// Run the nearest-birthday search.
pub fn run(args: NearestArgs) -> Result<()> {
    let _cmd = info_span!("nearest").entered();
    let config = config::load(&args.config)?;

    let target = convert::parse_date(&args.date)?;
    let today = convert::today_or(args.today.as_deref())?;
    let count = args.count.unwrap_or(config.nearest.min_count);

    let buckets = load_buckets(&config.io.data_dir).with_context(|| {
        format!(
            "failed to load player tables from {}",
            config.io.data_dir.display()
        )
    })?;
    let matches = find_nearest(&buckets, target, count, today)
        .with_context(|| format!("nearest search for {target} failed"))?;
    info!(%target, n = matches.len(), "nearest search finished");

    println!("{count} players born nearest to {target}:");
    for (place, m) in matches.iter().enumerate() {
        println!(
            "{:>2}. {:<24} born {}  WAR {:>6.1}  {:>+4} days",
            place + 1,
            m.name,
            m.birthdate,
            m.war,
            m.days_from_target
        );
    }
    Ok(())
}
