//! Day command: list every player born on one calendar day.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use dugout_aggregate::franchise_counts;
use dugout_calendar::MONTH_NAMES;
use dugout_innings::thirds_to_outs;
use dugout_io::{day_csv_path, load_day_csv};

use crate::cli::DayArgs;
use crate::config;
use crate::convert;

/// Run the day listing.
pub fn run(args: DayArgs) -> Result<()> {
    let _cmd = info_span!("day").entered();
    let config = config::load(&args.config)?;

    let doy = convert::parse_month_day(&args.date)?;
    let path = day_csv_path(&config.io.data_dir, doy);
    let records = load_day_csv(&path)
        .with_context(|| format!("failed to load day table: {}", path.display()))?;
    info!(n = records.len(), "day table loaded");

    let (month, day) = doy.month_day();
    println!(
        "{} {}: {} players",
        MONTH_NAMES[(month - 1) as usize],
        day,
        records.len()
    );
    for r in &records {
        let hof = if r.hof { "  [HOF]" } else { "" };
        println!(
            "  {:<24} born {:>4}  WAR {:>6.1}  HR {:>4}  BA {:.3}  IP {:>7.1}{}",
            r.name,
            r.born,
            r.war,
            r.hr,
            r.ba,
            thirds_to_outs(r.ip),
            hof
        );
    }

    if args.franchises {
        println!();
        println!("Franchise counts:");
        for (code, n) in franchise_counts(&records) {
            println!("  {code:<4} {n}");
        }
    }

    Ok(())
}
