use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dugout baseball birthday statistics explorer.
#[derive(Parser)]
#[command(
    name = "dugout",
    version,
    about = "Baseball birthday statistics explorer"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show every player born on one calendar day.
    Day(DayArgs),
    /// Aggregate one statistic across all 366 calendar days.
    Series(SeriesArgs),
    /// Rank calendar days by an aggregated statistic.
    Rank(RankArgs),
    /// Find the players with birthdays nearest to a date.
    Nearest(NearestArgs),
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "dugout.toml")]
    pub config: PathBuf,

    /// Calendar day as MM-DD (February 29 is valid).
    #[arg(short, long)]
    pub date: String,

    /// Also print how many of the day's players each franchise had.
    #[arg(long)]
    pub franchises: bool,
}

/// Arguments for the `series` subcommand.
#[derive(clap::Args)]
pub struct SeriesArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "dugout.toml")]
    pub config: PathBuf,

    /// Statistic to aggregate (e.g. HR, WAR, BA, ERA+, players).
    #[arg(short, long)]
    pub stat: String,

    /// Combine as a per-day total instead of an average.
    #[arg(long, conflicts_with = "average")]
    pub total: bool,

    /// Combine as a per-day average instead of a total.
    #[arg(long)]
    pub average: bool,

    /// Emit the series as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `rank` subcommand.
#[derive(clap::Args)]
pub struct RankArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "dugout.toml")]
    pub config: PathBuf,

    /// Statistic to rank by.
    #[arg(short, long)]
    pub stat: String,

    /// Combine as a per-day total instead of an average.
    #[arg(long, conflicts_with = "average")]
    pub total: bool,

    /// Combine as a per-day average instead of a total.
    #[arg(long)]
    pub average: bool,

    /// Number of days to list (overrides config).
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Rank worst-first instead of best-first.
    #[arg(long)]
    pub bottom: bool,
}

/// Arguments for the `nearest` subcommand.
#[derive(clap::Args)]
pub struct NearestArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "dugout.toml")]
    pub config: PathBuf,

    /// Target date as YYYY-MM-DD.
    #[arg(short, long)]
    pub date: String,

    /// Number of matches to return (overrides config).
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Override today's date (YYYY-MM-DD) instead of the system clock.
    #[arg(long)]
    pub today: Option<String>,
}
