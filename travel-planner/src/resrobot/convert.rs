//! Conversion from ResRobot DTOs to domain types.
//!
//! Conversion fails fast: the first trip, leg or stop that lacks required
//! shape aborts the whole response with a [`MalformedDataError`]. Error
//! envelopes are classified before conversion by [`check_envelope`].

use tracing::debug;

use crate::domain::{Leg, MalformedDataError, StationId, Stop, Trip};
use crate::error::{LookupError, PlannerError};

use super::error::TransportError;
use super::types::{LegDto, StopDto, TripDto, TripResponse};

/// Error code meaning the search ran but found nothing.
const NO_RESULT: &str = "SVC_NO_RESULT";

/// Error code prefix for location problems.
const LOCATION_PREFIX: &str = "SVC_LOC";

/// Classify an error envelope, if the response carries one.
///
/// Location codes become a [`LookupError`]; `SVC_LOC_DEP` and `SVC_LOC_ARR`
/// name the origin and destination respectively. Auth and quota codes map
/// to their transport variants. `SVC_NO_RESULT` is not an error.
pub fn check_envelope(
    response: &TripResponse,
    status: u16,
    origin: StationId,
    destination: StationId,
) -> Result<(), PlannerError> {
    let Some(code) = response.error_code.as_deref() else {
        return Ok(());
    };
    let message = response.error_text.clone().unwrap_or_default();

    if code == NO_RESULT {
        debug!(%origin, %destination, "no trips found");
        return Ok(());
    }

    if code.starts_with(LOCATION_PREFIX) {
        let station = match code {
            "SVC_LOC_DEP" => Some(origin),
            "SVC_LOC_ARR" => Some(destination),
            _ => None,
        };
        return Err(LookupError { station, message }.into());
    }

    let err = match code {
        "API_AUTH" => TransportError::Unauthorized,
        "API_QUOTA" | "API_TOO_MANY" => TransportError::RateLimited,
        _ => TransportError::Api {
            status,
            code: Some(code.to_string()),
            message,
        },
    };
    Err(err.into())
}

/// Convert every trip in a response, in order.
///
/// A response with no `Trip` array yields no trips.
pub fn convert_trip_response(response: &TripResponse) -> Result<Vec<Trip>, MalformedDataError> {
    response
        .trips
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(convert_trip)
        .collect()
}

/// Convert a single trip.
pub fn convert_trip(dto: &TripDto) -> Result<Trip, MalformedDataError> {
    let legs = dto
        .leg_list
        .as_ref()
        .and_then(|list| list.legs.as_deref())
        .ok_or(MalformedDataError::MissingField {
            entity: "trip",
            field: "LegList",
        })?;

    let legs = legs.iter().map(convert_leg).collect::<Result<Vec<_>, _>>()?;

    let trip = Trip::new(legs)?;
    Ok(match &dto.duration {
        Some(duration) => trip.with_duration(duration.clone()),
        None => trip,
    })
}

/// Convert a single leg. Absent stops become an empty list.
pub fn convert_leg(dto: &LegDto) -> Result<Leg, MalformedDataError> {
    let stops = dto
        .stops
        .as_ref()
        .and_then(|list| list.stops.as_deref())
        .unwrap_or(&[])
        .iter()
        .map(convert_stop)
        .collect::<Result<Vec<_>, _>>()?;

    let mut leg = Leg::new(stops);
    if let Some(name) = &dto.name {
        leg = leg.with_name(name.clone());
    }
    if let Some(direction) = &dto.direction {
        leg = leg.with_direction(direction.clone());
    }
    if let Some(origin) = &dto.origin {
        leg = leg.with_departure(origin.time.clone(), origin.date.clone());
    }
    if let Some(destination) = &dto.destination {
        leg = leg.with_arrival(destination.time.clone(), destination.date.clone());
    }

    Ok(leg)
}

/// Convert a single stop.
///
/// Name and `extId` are required; coordinates are copied when present.
pub fn convert_stop(dto: &StopDto) -> Result<Stop, MalformedDataError> {
    let missing = |field| MalformedDataError::MissingField {
        entity: "stop",
        field,
    };

    let name = dto.name.as_deref().ok_or(missing("name"))?;
    let ext_id = dto.ext_id.as_deref().ok_or(missing("extId"))?;
    let ext_id = StationId::parse(ext_id)?;

    Ok(Stop::new(name, ext_id)?
        .with_coordinates(dto.lon, dto.lat)
        .with_times(
            dto.arr_time.clone(),
            dto.arr_date.clone(),
            dto.dep_time.clone(),
            dto.dep_date.clone(),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resrobot::types::{LegList, StopList};

    fn origin() -> StationId {
        StationId::new(740000190)
    }

    fn destination() -> StationId {
        StationId::new(740000002)
    }

    fn envelope(code: &str, text: &str) -> TripResponse {
        serde_json::from_value(serde_json::json!({
            "errorCode": code,
            "errorText": text,
        }))
        .unwrap()
    }

    fn stop_dto(name: &str, ext_id: &str) -> StopDto {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "extId": ext_id,
            "lon": 20.26621,
            "lat": 63.828217,
        }))
        .unwrap()
    }

    fn leg_dto(stops: Option<Vec<StopDto>>) -> LegDto {
        LegDto {
            origin: None,
            destination: None,
            stops: stops.map(|stops| StopList { stops: Some(stops) }),
            name: None,
            direction: None,
            leg_type: None,
            category: None,
            number: None,
        }
    }

    fn trip_dto(legs: Option<Vec<LegDto>>) -> TripDto {
        TripDto {
            leg_list: legs.map(|legs| LegList { legs: Some(legs) }),
            origin: None,
            destination: None,
            idx: None,
            trip_id: None,
            duration: None,
            transfer_count: None,
        }
    }

    #[test]
    fn envelope_without_error_is_ok() {
        let response: TripResponse = serde_json::from_str(r#"{"Trip": []}"#).unwrap();
        assert!(check_envelope(&response, 200, origin(), destination()).is_ok());
    }

    #[test]
    fn no_result_is_not_an_error() {
        let response = envelope("SVC_NO_RESULT", "No trips found");
        assert!(check_envelope(&response, 200, origin(), destination()).is_ok());
        assert!(convert_trip_response(&response).unwrap().is_empty());
    }

    #[test]
    fn location_codes_are_lookup_errors() {
        let err = check_envelope(
            &envelope("SVC_LOC", "Location missing or invalid"),
            400,
            origin(),
            destination(),
        )
        .unwrap_err();
        match err {
            PlannerError::Lookup(lookup) => {
                assert_eq!(lookup.station, None);
                assert_eq!(lookup.message, "Location missing or invalid");
            }
            other => panic!("expected lookup error, got {other:?}"),
        }

        let err = check_envelope(&envelope("SVC_LOC_DEP", "x"), 400, origin(), destination())
            .unwrap_err();
        assert!(matches!(
            err,
            PlannerError::Lookup(LookupError { station: Some(id), .. }) if id == origin()
        ));

        let err = check_envelope(&envelope("SVC_LOC_ARR", "x"), 400, origin(), destination())
            .unwrap_err();
        assert!(matches!(
            err,
            PlannerError::Lookup(LookupError { station: Some(id), .. }) if id == destination()
        ));
    }

    #[test]
    fn auth_and_quota_codes() {
        let err = check_envelope(&envelope("API_AUTH", "bad key"), 401, origin(), destination())
            .unwrap_err();
        assert!(matches!(
            err,
            PlannerError::Transport(TransportError::Unauthorized)
        ));

        let err = check_envelope(&envelope("API_QUOTA", "quota"), 429, origin(), destination())
            .unwrap_err();
        assert!(matches!(
            err,
            PlannerError::Transport(TransportError::RateLimited)
        ));
    }

    #[test]
    fn other_codes_are_api_errors() {
        let err = check_envelope(
            &envelope("SVC_DATATIME", "Date outside timetable period"),
            400,
            origin(),
            destination(),
        )
        .unwrap_err();
        match err {
            PlannerError::Transport(TransportError::Api {
                status,
                code,
                message,
            }) => {
                assert_eq!(status, 400);
                assert_eq!(code.as_deref(), Some("SVC_DATATIME"));
                assert_eq!(message, "Date outside timetable period");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn convert_stop_copies_fields() {
        let mut dto = stop_dto("Umeå Centralstation", "740000190");
        dto.dep_time = Some("08:00:00".into());
        dto.dep_date = Some("2024-01-01".into());

        let stop = convert_stop(&dto).unwrap();
        assert_eq!(stop.name(), "Umeå Centralstation");
        assert_eq!(stop.ext_id(), origin());
        assert_eq!(stop.lon(), Some(20.26621));
        assert_eq!(stop.lat(), Some(63.828217));
        assert_eq!(stop.dep_time(), Some("08:00:00"));
        assert_eq!(stop.arr_time(), None);
    }

    #[test]
    fn convert_stop_requires_ext_id() {
        let mut dto = stop_dto("Umeå Centralstation", "740000190");
        dto.ext_id = None;
        assert_eq!(
            convert_stop(&dto).unwrap_err(),
            MalformedDataError::MissingField {
                entity: "stop",
                field: "extId"
            }
        );
    }

    #[test]
    fn convert_stop_without_coordinates() {
        let dto: StopDto = serde_json::from_value(serde_json::json!({
            "name": "Stop A",
            "extId": "1",
            "depTime": "08:00",
            "depDate": "2024-01-01",
        }))
        .unwrap();

        let stop = convert_stop(&dto).unwrap();
        assert_eq!(stop.lon(), None);
        assert_eq!(stop.lat(), None);
        assert_eq!(stop.dep_time(), Some("08:00"));
    }

    #[test]
    fn convert_stop_rejects_non_numeric_id() {
        let dto = stop_dto("Umeå Centralstation", "A=1@O=Umeå");
        assert!(matches!(
            convert_stop(&dto).unwrap_err(),
            MalformedDataError::InvalidStationId(_)
        ));
    }

    #[test]
    fn absent_stops_become_empty_leg() {
        let leg = convert_leg(&leg_dto(None)).unwrap();
        assert!(leg.stops().is_empty());
    }

    #[test]
    fn leg_overall_times_come_from_endpoints() {
        let dto: LegDto = serde_json::from_value(serde_json::json!({
            "Origin": {"name": "Umeå Centralstation", "time": "08:00:00", "date": "2024-01-01"},
            "Destination": {"name": "Sundsvall Centralstation", "time": "11:10:00", "date": "2024-01-01"},
            "name": "Regional Tåg 7021",
            "direction": "Sundsvall Centralstation",
            "type": "JNY"
        }))
        .unwrap();

        let leg = convert_leg(&dto).unwrap();
        assert_eq!(leg.name(), Some("Regional Tåg 7021"));
        assert_eq!(leg.direction(), Some("Sundsvall Centralstation"));
        assert_eq!(leg.dep_time(), Some("08:00:00"));
        assert_eq!(leg.arr_time(), Some("11:10:00"));
        assert_eq!(leg.arr_date(), Some("2024-01-01"));
    }

    #[test]
    fn trip_requires_leg_list() {
        assert_eq!(
            convert_trip(&trip_dto(None)).unwrap_err(),
            MalformedDataError::MissingField {
                entity: "trip",
                field: "LegList"
            }
        );
    }

    #[test]
    fn trip_with_empty_leg_list_is_malformed() {
        assert_eq!(
            convert_trip(&trip_dto(Some(Vec::new()))).unwrap_err(),
            MalformedDataError::EmptyTrip
        );
    }

    #[test]
    fn one_bad_stop_fails_the_whole_response() {
        let mut bad = stop_dto("Nowhere", "1");
        bad.name = None;
        let response = TripResponse {
            trips: Some(vec![
                trip_dto(Some(vec![leg_dto(Some(vec![stop_dto("A", "1")]))])),
                trip_dto(Some(vec![leg_dto(Some(vec![bad]))])),
            ]),
            error_code: None,
            error_text: None,
            server_version: None,
            request_id: None,
        };

        assert!(convert_trip_response(&response).is_err());
    }

    #[test]
    fn trips_keep_response_order() {
        let mut first = trip_dto(Some(vec![leg_dto(Some(vec![stop_dto("A", "1")]))]));
        first.duration = Some("PT1H".into());
        let second = trip_dto(Some(vec![leg_dto(Some(vec![stop_dto("B", "2")]))]));

        let response = TripResponse {
            trips: Some(vec![first, second]),
            error_code: None,
            error_text: None,
            server_version: None,
            request_id: None,
        };

        let trips = convert_trip_response(&response).unwrap();
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].duration(), Some("PT1H"));
        assert_eq!(trips[0].stops().next().unwrap().name(), "A");
        assert_eq!(trips[1].stops().next().unwrap().name(), "B");
    }
}
