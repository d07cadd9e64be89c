//! ResRobot HTTP client.
//!
//! Provides async access to the ResRobot v2.1 `trip` endpoint. Handles
//! authentication, error envelopes, and conversion to domain types.

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, instrument};

use crate::domain::{StationId, Trip};
use crate::error::PlannerError;
use crate::fetch::TripFetcher;

use super::convert::{check_envelope, convert_trip_response};
use super::error::TransportError;
use super::types::TripResponse;

/// Default base URL for the ResRobot API.
const DEFAULT_BASE_URL: &str = "https://api.resrobot.se/v2.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default response language.
const DEFAULT_LANG: &str = "sv";

/// Configuration for the ResRobot client.
#[derive(Debug, Clone)]
pub struct ResRobotConfig {
    /// Trafiklab access key
    pub access_key: String,
    /// Base URL for the API (defaults to production ResRobot)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Response language ("sv", "en" or "de")
    pub lang: String,
}

impl ResRobotConfig {
    /// Create a new config with the given access key.
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            lang: DEFAULT_LANG.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set response language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}

/// A trip search between two stations.
///
/// Without a date and time the search starts from now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripQuery {
    pub origin: StationId,
    pub destination: StationId,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl TripQuery {
    /// Search from `origin` to `destination`, departing now.
    pub fn new(origin: StationId, destination: StationId) -> Self {
        Self {
            origin,
            destination,
            date: None,
            time: None,
        }
    }

    /// Depart on the given date.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Depart at the given time.
    pub fn at(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Query parameters, excluding the access key.
    fn params(&self, lang: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("format", "json".to_string()),
            ("originId", self.origin.to_string()),
            ("destId", self.destination.to_string()),
            ("passlist", "true".to_string()),
            ("showPassingPoints", "true".to_string()),
            ("lang", lang.to_string()),
        ];
        if let Some(date) = self.date {
            params.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(time) = self.time {
            params.push(("time", time.format("%H:%M").to_string()));
        }
        params
    }
}

/// ResRobot API client.
///
/// Every call goes to the network; nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct ResRobotClient {
    http: reqwest::Client,
    base_url: String,
    access_key: String,
    lang: String,
    /// Departure date used by [`TripFetcher::fetch`]
    date: Option<NaiveDate>,
    /// Departure time used by [`TripFetcher::fetch`]
    time: Option<NaiveTime>,
}

impl ResRobotClient {
    /// Create a new ResRobot client with the given configuration.
    pub fn new(config: ResRobotConfig) -> Result<Self, TransportError> {
        if config.access_key.is_empty() {
            return Err(TransportError::NotConfigured(
                "ResRobot access key is empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_key: config.access_key,
            lang: config.lang,
            date: None,
            time: None,
        })
    }

    /// Make [`TripFetcher::fetch`] search from the given departure moment
    /// instead of from now.
    pub fn departing(mut self, date: Option<NaiveDate>, time: Option<NaiveTime>) -> Self {
        self.date = date;
        self.time = time;
        self
    }

    /// The query [`TripFetcher::fetch`] runs for a station pair.
    fn query_for(&self, origin: StationId, destination: StationId) -> TripQuery {
        TripQuery {
            origin,
            destination,
            date: self.date,
            time: self.time,
        }
    }

    /// Run a trip search and return the raw response.
    ///
    /// Error envelopes are classified into [`PlannerError`] kinds; a
    /// successful envelope is returned as-is, trips unconverted.
    #[instrument(skip(self), fields(origin = %query.origin, destination = %query.destination))]
    pub async fn search(&self, query: &TripQuery) -> Result<TripResponse, PlannerError> {
        let url = format!("{}/trip", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&query.params(&self.lang))
            .query(&[("accessId", self.access_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "trip search response");

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(TransportError::Unauthorized.into());
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TransportError::RateLimited.into());
        }

        let body = response.text().await?;

        // Error envelopes arrive with 4xx statuses; try them before giving up
        let parsed: Result<TripResponse, _> = serde_json::from_str(&body);

        let trip_response = match parsed {
            Ok(trip_response) => trip_response,
            Err(e) if status.is_success() => {
                return Err(TransportError::Json {
                    message: e.to_string(),
                    body: Some(body.chars().take(500).collect()),
                }
                .into());
            }
            Err(_) => {
                return Err(TransportError::Api {
                    status: status.as_u16(),
                    code: None,
                    message: body,
                }
                .into());
            }
        };

        check_envelope(
            &trip_response,
            status.as_u16(),
            query.origin,
            query.destination,
        )?;

        // Only SVC_NO_RESULT gets past check_envelope with a code set
        if !status.is_success() && trip_response.error_code.is_none() {
            return Err(TransportError::Api {
                status: status.as_u16(),
                code: None,
                message: body,
            }
            .into());
        }

        Ok(trip_response)
    }

    /// Run a trip search and convert the result to domain trips.
    pub async fn trips(&self, query: &TripQuery) -> Result<Vec<Trip>, PlannerError> {
        let response = self.search(query).await?;
        let trips = convert_trip_response(&response)?;
        debug!(trips = trips.len(), "converted trips");
        Ok(trips)
    }
}

impl TripFetcher for ResRobotClient {
    async fn fetch(
        &self,
        origin: StationId,
        destination: StationId,
    ) -> Result<Vec<Trip>, PlannerError> {
        self.trips(&self.query_for(origin, destination)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = ResRobotConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(60)
            .with_lang("en");

        assert_eq!(config.access_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.lang, "en");
    }

    #[test]
    fn config_defaults() {
        let config = ResRobotConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.lang, "sv");
    }

    #[test]
    fn client_creation() {
        assert!(ResRobotClient::new(ResRobotConfig::new("test-key")).is_ok());
    }

    #[test]
    fn empty_access_key_rejected() {
        let err = ResRobotClient::new(ResRobotConfig::new("")).unwrap_err();
        assert!(matches!(err, TransportError::NotConfigured(_)));
    }

    #[test]
    fn departing_sets_fetch_query() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let client = ResRobotClient::new(ResRobotConfig::new("test-key"))
            .unwrap()
            .departing(Some(date), None);

        let query = client.query_for(StationId::new(1), StationId::new(2));
        assert_eq!(query, TripQuery::new(StationId::new(1), StationId::new(2)).on(date));
    }

    #[test]
    fn query_params() {
        let query = TripQuery::new(StationId::new(740000190), StationId::new(740000002));
        let params = query.params("sv");

        assert!(params.contains(&("format", "json".to_string())));
        assert!(params.contains(&("originId", "740000190".to_string())));
        assert!(params.contains(&("destId", "740000002".to_string())));
        assert!(params.contains(&("passlist", "true".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "date" || *k == "time"));
    }

    #[test]
    fn query_params_with_departure() {
        let query = TripQuery::new(StationId::new(1), StationId::new(2))
            .on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .at(NaiveTime::from_hms_opt(8, 5, 0).unwrap());
        let params = query.params("en");

        assert!(params.contains(&("date", "2024-01-01".to_string())));
        assert!(params.contains(&("time", "08:05".to_string())));
        assert!(params.contains(&("lang", "en".to_string())));
    }
}
