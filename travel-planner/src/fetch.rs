//! The trip-fetching seam.

use std::future::Future;

use crate::domain::{StationId, Trip};
use crate::error::PlannerError;

/// Source of trips between two stations.
///
/// This abstraction allows the planner to be tested with recorded data.
/// Implementations report an unknown station as
/// [`PlannerError::Lookup`] and any fetch failure as
/// [`PlannerError::Transport`]; callers propagate both unchanged.
pub trait TripFetcher {
    /// Fetch the upcoming trips from `origin` to `destination`,
    /// earliest first. An empty list means the search found nothing.
    fn fetch(
        &self,
        origin: StationId,
        destination: StationId,
    ) -> impl Future<Output = Result<Vec<Trip>, PlannerError>>;
}
