//! Mock trip fetcher for running without API access.
//!
//! Loads recorded ResRobot trip responses from JSON files and serves them
//! as if they were live API responses.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::{StationId, Trip};
use crate::error::{LookupError, PlannerError};
use crate::fetch::TripFetcher;

use super::convert::{check_envelope, convert_trip_response};
use super::error::TransportError;
use super::types::TripResponse;

/// Trip fetcher that serves data from JSON files.
///
/// This is useful for development and testing without a Trafiklab access key.
#[derive(Debug, Clone)]
pub struct MockTripFetcher {
    /// Recorded responses, keyed by (origin, destination).
    responses: HashMap<(StationId, StationId), TripResponse>,
}

impl MockTripFetcher {
    /// Create a new mock fetcher by loading JSON files from a directory.
    ///
    /// Expects files named `{origin}_{destination}.json`
    /// (e.g. `740000190_740000002.json`). Other files are ignored.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, TransportError> {
        let data_dir = data_dir.as_ref();
        let mut responses = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            TransportError::MockData(format!(
                "failed to read mock data directory {}: {e}",
                data_dir.display()
            ))
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| {
                TransportError::MockData(format!("failed to read directory entry: {e}"))
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let Some(key) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(parse_pair)
            else {
                debug!(path = %path.display(), "skipping file without a station pair name");
                continue;
            };

            let json = std::fs::read_to_string(&path).map_err(|e| {
                TransportError::MockData(format!("failed to read {}: {e}", path.display()))
            })?;

            let response: TripResponse = serde_json::from_str(&json).map_err(|e| {
                TransportError::MockData(format!("failed to parse {}: {e}", path.display()))
            })?;

            responses.insert(key, response);
        }

        if responses.is_empty() {
            return Err(TransportError::MockData(format!(
                "no mock trip files found in {}",
                data_dir.display()
            )));
        }

        info!(pairs = responses.len(), "loaded mock trip data");
        Ok(Self { responses })
    }

    /// Create a mock fetcher from already-parsed responses.
    pub fn from_responses(
        responses: impl IntoIterator<Item = ((StationId, StationId), TripResponse)>,
    ) -> Self {
        Self {
            responses: responses.into_iter().collect(),
        }
    }

    /// Station pairs with recorded data.
    pub fn available_pairs(&self) -> Vec<(StationId, StationId)> {
        let mut pairs: Vec<_> = self.responses.keys().copied().collect();
        pairs.sort();
        pairs
    }
}

impl TripFetcher for MockTripFetcher {
    async fn fetch(
        &self,
        origin: StationId,
        destination: StationId,
    ) -> Result<Vec<Trip>, PlannerError> {
        let response = self
            .responses
            .get(&(origin, destination))
            .ok_or_else(|| LookupError {
                station: None,
                message: format!("no recorded trips from {origin} to {destination}"),
            })?;

        check_envelope(response, 200, origin, destination)?;
        Ok(convert_trip_response(response)?)
    }
}

/// Parse a file stem like `740000190_740000002`.
fn parse_pair(stem: &str) -> Option<(StationId, StationId)> {
    let (origin, destination) = stem.split_once('_')?;
    Some((
        StationId::parse(origin).ok()?,
        StationId::parse(destination).ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UMEA_GOTEBORG: &str = r#"{
        "Trip": [{
            "LegList": {"Leg": [{
                "Stops": {"Stop": [
                    {"name": "Umeå C", "extId": "740000190", "lon": 20.26621, "lat": 63.828217, "depTime": "08:00", "depDate": "2024-01-01"},
                    {"name": "Göteborg C", "extId": "740000002", "lon": 11.973479, "lat": 57.708895, "arrTime": "14:30", "arrDate": "2024-01-01"}
                ]}
            }]}
        }]
    }"#;

    fn umea() -> StationId {
        StationId::new(740000190)
    }

    fn goteborg() -> StationId {
        StationId::new(740000002)
    }

    fn write_mock_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("740000190_740000002.json"), UMEA_GOTEBORG).unwrap();
        std::fs::write(
            dir.path().join("740000003_740000002.json"),
            r#"{"errorCode": "SVC_NO_RESULT", "errorText": "No trips found"}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("README.txt"), "not json").unwrap();
        std::fs::write(dir.path().join("notes.json"), "{}").unwrap();
        dir
    }

    #[test]
    fn parse_pair_names() {
        assert_eq!(parse_pair("740000190_740000002"), Some((umea(), goteborg())));
        assert_eq!(parse_pair("740000190"), None);
        assert_eq!(parse_pair("umea_goteborg"), None);
    }

    #[test]
    fn load_mock_data() {
        let dir = write_mock_dir();
        let fetcher = MockTripFetcher::new(dir.path()).unwrap();
        // README.txt and notes.json are skipped
        assert_eq!(
            fetcher.available_pairs(),
            vec![(StationId::new(740000003), goteborg()), (umea(), goteborg())]
        );
    }

    #[tokio::test]
    async fn fetch_recorded_pair() {
        let dir = write_mock_dir();
        let fetcher = MockTripFetcher::new(dir.path()).unwrap();

        let trips = fetcher.fetch(umea(), goteborg()).await.unwrap();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].stop_count(), 2);
    }

    #[tokio::test]
    async fn recorded_no_result_is_empty() {
        let dir = write_mock_dir();
        let fetcher = MockTripFetcher::new(dir.path()).unwrap();

        let trips = fetcher
            .fetch(StationId::new(740000003), goteborg())
            .await
            .unwrap();
        assert!(trips.is_empty());
    }

    #[tokio::test]
    async fn unknown_pair_returns_lookup_error() {
        let dir = write_mock_dir();
        let fetcher = MockTripFetcher::new(dir.path()).unwrap();

        let result = fetcher.fetch(goteborg(), umea()).await;
        assert!(matches!(result, Err(PlannerError::Lookup(_))));
    }

    #[tokio::test]
    async fn from_responses_serves_given_pairs() {
        let response: TripResponse = serde_json::from_str(UMEA_GOTEBORG).unwrap();
        let fetcher = MockTripFetcher::from_responses([((umea(), goteborg()), response)]);

        assert_eq!(fetcher.available_pairs(), vec![(umea(), goteborg())]);
        let trips = fetcher.fetch(umea(), goteborg()).await.unwrap();
        assert_eq!(trips[0].stops().next().unwrap().name(), "Umeå C");
    }

    #[test]
    fn empty_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = MockTripFetcher::new(dir.path()).unwrap_err();
        assert!(matches!(err, TransportError::MockData(_)));
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("1_2.json"), "{ not json").unwrap();
        let err = MockTripFetcher::new(dir.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
