//! # dugout-aggregate
//!
//! Per-day statistic aggregation: totals and weighted rate averages.
//!
//! Counting statistics sum plainly across a day's players. Rate
//! statistics do not — each record's career rate was computed over a
//! different number of opportunities, so combining them takes a weighted
//! mean (hits over at-bats for batting average, innings pitched for ERA,
//! and so on). The [`Stat`] enumeration is closed and carries each
//! statistic's combination policy as data, so there is exactly one place
//! where a statistic name is resolved and no silent fall-through for
//! unknown names.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `stat` | Closed statistic enumeration and combination policies |
//! | `aggregate` | Per-day and per-series aggregation |
//! | `franchise` | Per-day franchise player counts |
//! | `error` | Error types |

mod aggregate;
mod error;
mod franchise;
mod stat;

pub use aggregate::{Mode, aggregate_day, aggregate_series};
pub use error::AggregateError;
pub use franchise::franchise_counts;
pub use stat::{AveragePolicy, Stat, TotalPolicy, Weight};
