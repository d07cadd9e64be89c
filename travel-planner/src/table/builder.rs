//! Flattening trips into tables.

use tracing::debug;

use crate::domain::{MalformedDataError, Trip};

use super::row::NormalizedStopRow;
use super::trip_table::TripTable;

/// Whether every stop must carry some arrival or departure data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRequirement {
    /// Stops without times get empty `time`/`date` cells.
    #[default]
    Optional,
    /// A stop without any time or date fails the whole flatten.
    Required,
}

/// Converts a trip into a table of normalized stop rows.
///
/// Flattening is pure: it reads the trip, allocates the rows, and
/// touches nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct TripTableBuilder {
    requirement: TimeRequirement,
}

impl TripTableBuilder {
    /// A builder that tolerates stops without times.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder that rejects stops without times.
    pub fn strict() -> Self {
        Self::with_requirement(TimeRequirement::Required)
    }

    pub fn with_requirement(requirement: TimeRequirement) -> Self {
        Self { requirement }
    }

    pub fn requirement(&self) -> TimeRequirement {
        self.requirement
    }

    /// Flatten one trip: the stops of every leg, leg by leg, one row each.
    ///
    /// # Errors
    ///
    /// With [`TimeRequirement::Required`], returns
    /// [`MalformedDataError::MissingStopTimes`] for the first stop that has
    /// neither arrival nor departure data. No rows are returned in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use travel_planner::domain::{Leg, StationId, Stop, Trip};
    /// use travel_planner::table::TripTableBuilder;
    ///
    /// let a = Stop::new("Umeå C", StationId::new(740000190))
    ///     .unwrap()
    ///     .with_position(20.26621, 63.828217)
    ///     .with_departure("08:00", "2024-01-01");
    /// let b = Stop::new("Göteborg C", StationId::new(740000002))
    ///     .unwrap()
    ///     .with_position(11.973479, 57.708895)
    ///     .with_arrival("14:30", "2024-01-01");
    /// let trip = Trip::new(vec![Leg::new(vec![a, b])]).unwrap();
    ///
    /// let table = TripTableBuilder::new().flatten(&trip).unwrap();
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.rows()[0].time.as_deref(), Some("08:00"));
    /// assert_eq!(table.rows()[1].time.as_deref(), Some("14:30"));
    /// ```
    pub fn flatten(&self, trip: &Trip) -> Result<TripTable, MalformedDataError> {
        let mut rows = Vec::with_capacity(trip.stop_count());

        for (leg_idx, leg) in trip.legs().iter().enumerate() {
            for (stop_idx, stop) in leg.stops().iter().enumerate() {
                if self.requirement == TimeRequirement::Required && stop.has_no_times() {
                    return Err(MalformedDataError::MissingStopTimes {
                        leg: leg_idx,
                        stop: stop_idx,
                        name: stop.name().to_string(),
                    });
                }
                rows.push(NormalizedStopRow::from_stop(stop));
            }
        }

        debug!(legs = trip.legs().len(), rows = rows.len(), "flattened trip");
        Ok(TripTable::new(rows))
    }

    /// Flatten every trip, in order. Fails if any single trip fails.
    pub fn flatten_all(&self, trips: &[Trip]) -> Result<Vec<TripTable>, MalformedDataError> {
        trips.iter().map(|trip| self.flatten(trip)).collect()
    }
}
