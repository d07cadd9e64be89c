//! ResRobot API response DTOs.
//!
//! These types map directly to the ResRobot v2.1 `trip` JSON response.
//! They use `Option` liberally because ResRobot omits fields rather than
//! sending null values; required shape is checked during conversion.

use serde::Deserialize;

/// Response from the `trip` endpoint.
///
/// On failure ResRobot returns the same envelope with `errorCode` and
/// `errorText` set and no trips.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    /// Trip options, earliest first.
    #[serde(rename = "Trip")]
    pub trips: Option<Vec<TripDto>>,

    /// Machine-readable error code (e.g. "SVC_LOC", "API_AUTH").
    pub error_code: Option<String>,

    /// Human-readable error text.
    pub error_text: Option<String>,

    /// Server version string.
    pub server_version: Option<String>,

    /// Request id, useful when reporting issues upstream.
    pub request_id: Option<String>,
}

/// One trip option.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
    /// The legs of this trip.
    #[serde(rename = "LegList")]
    pub leg_list: Option<LegList>,

    /// Trip origin.
    #[serde(rename = "Origin")]
    pub origin: Option<LegEndpoint>,

    /// Trip destination.
    #[serde(rename = "Destination")]
    pub destination: Option<LegEndpoint>,

    /// Position in the result list.
    pub idx: Option<u32>,

    /// Upstream trip id (e.g. "C-0").
    pub trip_id: Option<String>,

    /// Total duration as an ISO-8601 duration (e.g. "PT6H30M").
    pub duration: Option<String>,

    /// Number of changes.
    pub transfer_count: Option<u32>,
}

/// Wrapper for the legs of a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct LegList {
    #[serde(rename = "Leg")]
    pub legs: Option<Vec<LegDto>>,
}

/// One leg of a trip.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDto {
    /// Where this leg starts, with overall departure time.
    #[serde(rename = "Origin")]
    pub origin: Option<LegEndpoint>,

    /// Where this leg ends, with overall arrival time.
    #[serde(rename = "Destination")]
    pub destination: Option<LegEndpoint>,

    /// Stops passed on this leg (absent for walks, or without `passlist`).
    #[serde(rename = "Stops")]
    pub stops: Option<StopList>,

    /// Service name (e.g. "Regional Tåg 7021").
    pub name: Option<String>,

    /// Direction text.
    pub direction: Option<String>,

    /// Leg type: "JNY" (vehicle journey), "WALK", "TRSF" (transfer).
    #[serde(rename = "type")]
    pub leg_type: Option<String>,

    /// Product category (e.g. "JRE", "BLT").
    pub category: Option<String>,

    /// Line or train number.
    pub number: Option<String>,
}

/// Origin or destination of a leg or trip.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegEndpoint {
    /// Station name.
    pub name: Option<String>,

    /// Numeric station id.
    pub ext_id: Option<String>,

    /// Longitude (WGS84).
    pub lon: Option<f64>,

    /// Latitude (WGS84).
    pub lat: Option<f64>,

    /// Time in "HH:MM:SS".
    pub time: Option<String>,

    /// Date in "YYYY-MM-DD".
    pub date: Option<String>,
}

/// Wrapper for the stops of a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct StopList {
    #[serde(rename = "Stop")]
    pub stops: Option<Vec<StopDto>>,
}

/// A single stop on a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopDto {
    /// Station name.
    pub name: Option<String>,

    /// Numeric station id.
    pub ext_id: Option<String>,

    /// Longitude (WGS84).
    pub lon: Option<f64>,

    /// Latitude (WGS84).
    pub lat: Option<f64>,

    /// Index along the route of the vehicle.
    pub route_idx: Option<u32>,

    /// Arrival time (absent on the first stop of a leg).
    pub arr_time: Option<String>,

    /// Arrival date.
    pub arr_date: Option<String>,

    /// Departure time (absent on the last stop of a leg).
    pub dep_time: Option<String>,

    /// Departure date.
    pub dep_date: Option<String>,

    /// Departure track/platform.
    pub dep_track: Option<String>,

    /// Arrival track/platform.
    pub arr_track: Option<String>,
}
