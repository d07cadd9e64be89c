//! Top-level error types.
//!
//! Every failure surfaced to a caller is one of three kinds: the upstream
//! did not recognise a station, the fetch itself failed, or the trip data
//! lacked the shape needed for flattening.

use crate::domain::{MalformedDataError, StationId};
use crate::resrobot::TransportError;

/// The upstream system does not know a station.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe_lookup(.station.as_ref(), .message))]
pub struct LookupError {
    /// The offending station, when the upstream says which one it was
    pub station: Option<StationId>,
    /// Upstream explanation
    pub message: String,
}

fn describe_lookup(station: Option<&StationId>, message: &str) -> String {
    match station {
        Some(id) => format!("unknown station {id}: {message}"),
        None => format!("unknown station: {message}"),
    }
}

/// Any error from fetching or flattening trips.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    MalformedData(#[from] MalformedDataError),
}

impl From<reqwest::Error> for PlannerError {
    fn from(err: reqwest::Error) -> Self {
        PlannerError::Transport(TransportError::Http(err))
    }
}
