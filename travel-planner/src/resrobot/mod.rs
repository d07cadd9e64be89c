//! ResRobot journey-planner client.
//!
//! This module provides an HTTP client for Trafiklab's ResRobot v2.1 API,
//! which plans public-transport trips across Sweden.
//!
//! Key characteristics of ResRobot:
//! - Stations are identified by numeric ids (e.g. `740000190`)
//! - Errors come back as a JSON envelope with `errorCode`/`errorText`
//! - Stops along each leg are only included when `passlist=true`

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{ResRobotClient, ResRobotConfig, TripQuery};
pub use convert::{check_envelope, convert_trip_response};
pub use error::TransportError;
pub use mock::MockTripFetcher;
pub use types::{LegDto, LegEndpoint, LegList, StopDto, StopList, TripDto, TripResponse};
