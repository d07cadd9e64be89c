//! Stop types.
//!
//! A `Stop` is one station visit along a leg. The first stop of a leg
//! usually has only departure data and the last only arrival data;
//! intermediate stops may have both.

use super::{MalformedDataError, StationId};

/// A single station visit within a leg.
///
/// # Examples
///
/// ```
/// use travel_planner::domain::{StationId, Stop};
///
/// let stop = Stop::new("Umeå C", StationId::new(740000190))
///     .unwrap()
///     .with_position(20.26621, 63.828217)
///     .with_departure("08:00", "2024-01-01");
///
/// assert_eq!(stop.dep_time(), Some("08:00"));
/// assert_eq!(stop.arr_time(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    name: String,
    ext_id: StationId,
    lon: Option<f64>,
    lat: Option<f64>,
    arr_time: Option<String>,
    arr_date: Option<String>,
    dep_time: Option<String>,
    dep_date: Option<String>,
}

impl Stop {
    /// Creates a stop with no position and no arrival or departure data.
    ///
    /// Fails if the name is empty.
    pub fn new(name: impl Into<String>, ext_id: StationId) -> Result<Self, MalformedDataError> {
        let name = name.into();
        if name.is_empty() {
            return Err(MalformedDataError::MissingField {
                entity: "stop",
                field: "name",
            });
        }

        Ok(Self {
            name,
            ext_id,
            lon: None,
            lat: None,
            arr_time: None,
            arr_date: None,
            dep_time: None,
            dep_date: None,
        })
    }

    /// Sets the WGS84 position.
    pub fn with_position(mut self, lon: f64, lat: f64) -> Self {
        self.lon = Some(lon);
        self.lat = Some(lat);
        self
    }

    /// Sets the position from optional coordinates.
    pub fn with_coordinates(mut self, lon: Option<f64>, lat: Option<f64>) -> Self {
        self.lon = lon;
        self.lat = lat;
        self
    }

    /// Sets the arrival time and date. Empty strings count as absent.
    pub fn with_arrival(mut self, time: impl Into<String>, date: impl Into<String>) -> Self {
        self.arr_time = non_empty(time.into());
        self.arr_date = non_empty(date.into());
        self
    }

    /// Sets the departure time and date. Empty strings count as absent.
    pub fn with_departure(mut self, time: impl Into<String>, date: impl Into<String>) -> Self {
        self.dep_time = non_empty(time.into());
        self.dep_date = non_empty(date.into());
        self
    }

    /// Sets the four time/date fields from optional values.
    pub fn with_times(
        mut self,
        arr_time: Option<String>,
        arr_date: Option<String>,
        dep_time: Option<String>,
        dep_date: Option<String>,
    ) -> Self {
        self.arr_time = arr_time.and_then(non_empty);
        self.arr_date = arr_date.and_then(non_empty);
        self.dep_time = dep_time.and_then(non_empty);
        self.dep_date = dep_date.and_then(non_empty);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ext_id(&self) -> StationId {
        self.ext_id
    }

    pub fn lon(&self) -> Option<f64> {
        self.lon
    }

    pub fn lat(&self) -> Option<f64> {
        self.lat
    }

    pub fn arr_time(&self) -> Option<&str> {
        self.arr_time.as_deref()
    }

    pub fn arr_date(&self) -> Option<&str> {
        self.arr_date.as_deref()
    }

    pub fn dep_time(&self) -> Option<&str> {
        self.dep_time.as_deref()
    }

    pub fn dep_date(&self) -> Option<&str> {
        self.dep_date.as_deref()
    }

    /// Returns true if none of the four time/date fields is set.
    pub fn has_no_times(&self) -> bool {
        self.arr_time.is_none()
            && self.arr_date.is_none()
            && self.dep_time.is_none()
            && self.dep_date.is_none()
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
