//! Domain error types.
//!
//! These errors describe trip data that lacks the shape needed for
//! flattening. They are distinct from API/IO errors.

use super::InvalidStationId;

/// A trip, leg or stop is missing structurally required data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MalformedDataError {
    /// A trip must have at least one leg
    #[error("trip has no legs")]
    EmptyTrip,

    /// A required field was absent or empty
    #[error("{entity} is missing required field {field}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// A station id was not a numeric code
    #[error(transparent)]
    InvalidStationId(#[from] InvalidStationId),

    /// A stop has no arrival or departure data but the caller needs a time
    #[error("stop {stop} ({name}) on leg {leg} has no arrival or departure time")]
    MissingStopTimes {
        leg: usize,
        stop: usize,
        name: String,
    },
}
