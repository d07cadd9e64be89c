//! Trip types.
//!
//! A `Trip` is one itinerary option between two stations, as returned by
//! the journey planner. Trips are built per query and never mutated.

use super::{Leg, MalformedDataError, Stop};

/// One itinerary between origin and destination.
///
/// # Invariants
///
/// - At least one leg
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    legs: Vec<Leg>,
    duration: Option<String>,
}

impl Trip {
    /// Constructs a trip from its legs, in travel order.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedDataError::EmptyTrip`] if `legs` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use travel_planner::domain::{Leg, Trip};
    ///
    /// assert!(Trip::new(vec![Leg::new(Vec::new())]).is_ok());
    /// assert!(Trip::new(Vec::new()).is_err());
    /// ```
    pub fn new(legs: Vec<Leg>) -> Result<Self, MalformedDataError> {
        if legs.is_empty() {
            return Err(MalformedDataError::EmptyTrip);
        }
        Ok(Self {
            legs,
            duration: None,
        })
    }

    /// Sets the total duration as reported upstream (e.g. "PT6H30M").
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// The legs of this trip, in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    /// Every stop of every leg, leg by leg, in travel order.
    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.legs.iter().flat_map(|leg| leg.stops().iter())
    }

    /// Total number of stops across all legs.
    pub fn stop_count(&self) -> usize {
        self.legs.iter().map(|leg| leg.stops().len()).sum()
    }
}
