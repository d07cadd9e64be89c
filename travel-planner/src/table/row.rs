//! Normalized stop rows.

use serde::Serialize;

use crate::domain::Stop;

/// Column names of a flattened trip table, in output order.
///
/// Downstream consumers select columns by these names, so both the order
/// and the spelling are fixed.
pub const COLUMNS: [&str; 10] = [
    "name", "extId", "lon", "lat", "depTime", "depDate", "arrTime", "arrDate", "time", "date",
];

/// Pick the first present, non-empty value.
///
/// Arrival data is passed as `preferred` so that it wins over departure.
///
/// ```
/// use travel_planner::table::coalesce;
///
/// assert_eq!(coalesce(Some("14:30"), Some("14:32")), Some("14:30"));
/// assert_eq!(coalesce(None, Some("08:00")), Some("08:00"));
/// assert_eq!(coalesce(Some(""), Some("08:00")), Some("08:00"));
/// assert_eq!(coalesce(None, None), None);
/// ```
pub fn coalesce<'a>(preferred: Option<&'a str>, fallback: Option<&'a str>) -> Option<&'a str> {
    preferred
        .filter(|s| !s.is_empty())
        .or(fallback.filter(|s| !s.is_empty()))
}

/// One stop of a trip, projected for display or export.
///
/// `time` and `date` hold the arrival values when present and the
/// departure values otherwise. Absent values serialize as `null` (JSON) or
/// an empty field (CSV); no field is ever omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedStopRow {
    pub name: String,
    #[serde(rename = "extId")]
    pub ext_id: String,
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    #[serde(rename = "depTime")]
    pub dep_time: Option<String>,
    #[serde(rename = "depDate")]
    pub dep_date: Option<String>,
    #[serde(rename = "arrTime")]
    pub arr_time: Option<String>,
    #[serde(rename = "arrDate")]
    pub arr_date: Option<String>,
    pub time: Option<String>,
    pub date: Option<String>,
}

impl NormalizedStopRow {
    /// Project a stop into a row.
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            name: stop.name().to_string(),
            ext_id: stop.ext_id().to_string(),
            lon: stop.lon(),
            lat: stop.lat(),
            dep_time: stop.dep_time().map(str::to_string),
            dep_date: stop.dep_date().map(str::to_string),
            arr_time: stop.arr_time().map(str::to_string),
            arr_date: stop.arr_date().map(str::to_string),
            time: coalesce(stop.arr_time(), stop.dep_time()).map(str::to_string),
            date: coalesce(stop.arr_date(), stop.dep_date()).map(str::to_string),
        }
    }

    /// Cell values as text, in [`COLUMNS`] order. Absent values are empty.
    pub fn cells(&self) -> [String; 10] {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let number = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();
        [
            self.name.clone(),
            self.ext_id.clone(),
            number(self.lon),
            number(self.lat),
            text(&self.dep_time),
            text(&self.dep_date),
            text(&self.arr_time),
            text(&self.arr_date),
            text(&self.time),
            text(&self.date),
        ]
    }
}
