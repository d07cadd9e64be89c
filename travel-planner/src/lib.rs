//! Public-transport travel planner.
//!
//! Fetches trip options between two stations from the ResRobot journey
//! planner and flattens a trip's legs and stops into a single table,
//! ready for display or export.

pub mod domain;
pub mod error;
pub mod fetch;
pub mod planner;
pub mod resrobot;
pub mod table;

pub use error::{LookupError, PlannerError};
pub use fetch::TripFetcher;
pub use planner::TravelPlanner;
