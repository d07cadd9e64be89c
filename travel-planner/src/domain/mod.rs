//! Domain types for the travel planner.
//!
//! This module contains the typed trip model. Constructors enforce the
//! required shape up front, so code that receives these types does not
//! need to re-check it.

mod error;
mod leg;
mod station;
mod stop;
mod trip;

pub use error::MalformedDataError;
pub use leg::Leg;
pub use station::{InvalidStationId, KnownStation, StationId, resolve_station};
pub use stop::Stop;
pub use trip::Trip;
