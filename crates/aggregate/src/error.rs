//! Error types for aggregation.

use thiserror::Error;

use crate::aggregate::Mode;
use crate::stat::Stat;

/// Errors produced while aggregating a day or a series.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// The requested statistic name is not one the aggregator knows.
    #[error("unknown statistic '{name}'")]
    UnknownStat { name: String },

    /// The statistic does not combine under the requested mode, such as
    /// a total of batting averages.
    #[error("statistic {stat} does not support mode {mode}")]
    UnsupportedMode { stat: Stat, mode: Mode },

    /// An average was requested for a day with no player records.
    #[error("cannot average {stat} over a day with no players")]
    EmptyDay { stat: Stat },

    /// A weighted average's denominator summed to zero, as when every
    /// player on the day has zero innings pitched.
    #[error("weighted average of {stat} has zero total weight")]
    ZeroWeight { stat: Stat },

    /// A per-day failure inside a whole-series aggregation, tagged with
    /// the calendar day that produced it.
    #[error("day {month}/{day}: {source}")]
    AtDay {
        month: u8,
        day: u8,
        #[source]
        source: Box<AggregateError>,
    },
}
