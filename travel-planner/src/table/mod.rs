//! Flattening trips into normalized stop tables.
//!
//! A trip is a nested structure of legs, each with an ordered list of
//! stops. The table view concatenates those stops and gives each a unified
//! `time`/`date`: the arrival value when there is one, the departure value
//! otherwise.

mod builder;
mod row;
mod trip_table;

pub use builder::{TimeRequirement, TripTableBuilder};
pub use row::{COLUMNS, NormalizedStopRow, coalesce};
pub use trip_table::{OutputFormat, RenderError, TripTable, render_tables};
