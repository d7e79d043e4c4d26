//! # dugout-io
//!
//! Player record data model and the per-day CSV ingestion boundary.
//!
//! One CSV file per calendar day (366 of them, February 29 included)
//! holds the career lines of every tracked player born on that day.
//! This crate reads those files into an immutable [`DayBuckets`]
//! structure that the aggregation, ranking, and nearest-search crates
//! borrow for the lifetime of a session. Scraping the files in the first
//! place is somebody else's job; ingestion here assumes well-formed
//! inputs and skips the occasional malformed row with a warning.

mod bucket;
mod error;
mod load;
mod record;
mod validate;

pub use bucket::{DayBuckets, NUM_DAYS};
pub use error::IoError;
pub use load::{day_csv_path, load_buckets, load_day_csv};
pub use record::PlayerRecord;
