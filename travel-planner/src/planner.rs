//! Fetch-then-flatten queries.
//!
//! Composes a [`TripFetcher`] with a [`TripTableBuilder`]. Errors from
//! either side are returned unchanged; nothing is retried and no partial
//! result is produced.

use tracing::{debug, instrument};

use crate::domain::StationId;
use crate::error::PlannerError;
use crate::fetch::TripFetcher;
use crate::table::{TripTable, TripTableBuilder};

/// Answers table queries between two stations.
#[derive(Debug, Clone)]
pub struct TravelPlanner<F> {
    fetcher: F,
    builder: TripTableBuilder,
}

impl<F: TripFetcher> TravelPlanner<F> {
    /// Create a planner with the default (lenient) table builder.
    pub fn new(fetcher: F) -> Self {
        Self::with_builder(fetcher, TripTableBuilder::new())
    }

    pub fn with_builder(fetcher: F, builder: TripTableBuilder) -> Self {
        Self { fetcher, builder }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Flatten the next trip from `origin` to `destination`.
    ///
    /// Returns `None` when the search found no trips.
    #[instrument(skip(self))]
    pub async fn next_trip_table(
        &self,
        origin: StationId,
        destination: StationId,
    ) -> Result<Option<TripTable>, PlannerError> {
        let trips = self.fetcher.fetch(origin, destination).await?;
        debug!(trips = trips.len(), "fetched trips");

        match trips.first() {
            Some(trip) => Ok(Some(self.builder.flatten(trip)?)),
            None => Ok(None),
        }
    }

    /// Flatten every trip the search returns, earliest first.
    #[instrument(skip(self))]
    pub async fn trip_tables(
        &self,
        origin: StationId,
        destination: StationId,
    ) -> Result<Vec<TripTable>, PlannerError> {
        let trips = self.fetcher.fetch(origin, destination).await?;
        debug!(trips = trips.len(), "fetched trips");
        Ok(self.builder.flatten_all(&trips)?)
    }

    /// Number of trips the search returns.
    pub async fn trip_count(
        &self,
        origin: StationId,
        destination: StationId,
    ) -> Result<usize, PlannerError> {
        Ok(self.fetcher.fetch(origin, destination).await?.len())
    }
}
