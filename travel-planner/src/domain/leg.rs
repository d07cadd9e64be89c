//! Leg types.
//!
//! A `Leg` is one uninterrupted vehicle (or walking) segment of a trip.

use super::Stop;

/// One continuous segment of a trip.
///
/// Walking legs usually carry no stops; a leg with an empty stop list is
/// valid and simply contributes nothing to a flattened table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Leg {
    name: Option<String>,
    direction: Option<String>,
    dep_time: Option<String>,
    dep_date: Option<String>,
    arr_time: Option<String>,
    arr_date: Option<String>,
    stops: Vec<Stop>,
}

impl Leg {
    /// Creates a leg with the given stops, in travel order.
    pub fn new(stops: Vec<Stop>) -> Self {
        Self {
            stops,
            ..Self::default()
        }
    }

    /// Sets the service name (e.g. "Regional Tåg 7021").
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the direction text shown on the vehicle.
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    /// Sets the overall departure of this leg.
    pub fn with_departure(mut self, time: Option<String>, date: Option<String>) -> Self {
        self.dep_time = time;
        self.dep_date = date;
        self
    }

    /// Sets the overall arrival of this leg.
    pub fn with_arrival(mut self, time: Option<String>, date: Option<String>) -> Self {
        self.arr_time = time;
        self.arr_date = date;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn direction(&self) -> Option<&str> {
        self.direction.as_deref()
    }

    pub fn dep_time(&self) -> Option<&str> {
        self.dep_time.as_deref()
    }

    pub fn dep_date(&self) -> Option<&str> {
        self.dep_date.as_deref()
    }

    pub fn arr_time(&self) -> Option<&str> {
        self.arr_time.as_deref()
    }

    pub fn arr_date(&self) -> Option<&str> {
        self.arr_date.as_deref()
    }

    /// The stops of this leg, in travel order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    #[test]
    fn walking_leg_has_no_stops() {
        let leg = Leg::new(Vec::new()).with_name("Promenad");
        assert!(leg.stops().is_empty());
        assert_eq!(leg.name(), Some("Promenad"));
        assert_eq!(leg.direction(), None);
    }

    #[test]
    fn overall_times() {
        let stop = Stop::new("Sundsvall C", StationId::new(740000150))
            .unwrap()
            .with_position(17.3, 62.4);
        let leg = Leg::new(vec![stop])
            .with_direction("Stockholm Centralstation")
            .with_departure(Some("08:00:00".into()), Some("2024-01-01".into()))
            .with_arrival(Some("11:10:00".into()), None);

        assert_eq!(leg.stops().len(), 1);
        assert_eq!(leg.direction(), Some("Stockholm Centralstation"));
        assert_eq!(leg.dep_time(), Some("08:00:00"));
        assert_eq!(leg.dep_date(), Some("2024-01-01"));
        assert_eq!(leg.arr_time(), Some("11:10:00"));
        assert_eq!(leg.arr_date(), None);
    }
}
