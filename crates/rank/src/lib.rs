//! # dugout-rank
//!
//! Ranks the 366 calendar days of an aggregated series and names the
//! players who carried each ranked day.
//!
//! Sorting a copy of the series loses the day indices, and a value that
//! appears on several days would naively resolve to the same day every
//! time. The ranking walk therefore keeps a monotonically advancing
//! cursor through each run of duplicate values, so every ranked entry
//! lands on a distinct calendar day.

mod error;
mod rank;

pub use error::RankError;
pub use rank::{Contributor, Direction, RankedDay, RankedEntry, rank, rank_with_contributors};
