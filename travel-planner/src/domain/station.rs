//! Station identifier types.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id {input:?}: {reason}")]
pub struct InvalidStationId {
    input: String,
    reason: &'static str,
}

impl InvalidStationId {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// An opaque numeric station identifier, as assigned by the upstream
/// journey planner (e.g. `740000190` for Umeå C).
///
/// Only the shape is checked here: one or more ASCII digits. Whether the
/// station actually exists is for the upstream system to decide.
///
/// # Examples
///
/// ```
/// use travel_planner::domain::StationId;
///
/// let umea = StationId::parse("740000190").unwrap();
/// assert_eq!(umea.to_string(), "740000190");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("74000A190").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(u64);

impl StationId {
    /// Create a station id from its numeric value.
    pub const fn new(value: u64) -> Self {
        StationId(value)
    }

    /// Parse a station id from a string of ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let err = |reason| InvalidStationId {
            input: s.to_string(),
            reason,
        };

        if s.is_empty() {
            return Err(err("must not be empty"));
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err("must contain only ASCII digits"));
        }

        s.parse::<u64>()
            .map(StationId)
            .map_err(|_| err("out of range"))
    }

    /// Returns the numeric value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the matching entry of the known-station table, if any.
    pub fn known(self) -> Option<KnownStation> {
        KnownStation::from_id(self)
    }
}

impl FromStr for StationId {
    type Err = InvalidStationId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StationId::parse(s)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stations the planner knows by name.
///
/// This is a closed set fixed at compile time; anything else must be passed
/// as a raw [`StationId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownStation {
    Malmo,
    Goteborg,
    Umea,
}

/// (station, key, display name, id)
const KNOWN_STATIONS: [(KnownStation, &str, &str, StationId); 3] = [
    (KnownStation::Malmo, "malmo", "Malmö C", StationId::new(740000003)),
    (
        KnownStation::Goteborg,
        "goteborg",
        "Göteborg C",
        StationId::new(740000002),
    ),
    (KnownStation::Umea, "umea", "Umeå C", StationId::new(740000190)),
];

impl KnownStation {
    /// Every known station, in table order.
    pub const ALL: [KnownStation; 3] = [
        KnownStation::Malmo,
        KnownStation::Goteborg,
        KnownStation::Umea,
    ];

    fn entry(self) -> &'static (KnownStation, &'static str, &'static str, StationId) {
        // Every variant has exactly one row in the table.
        match self {
            KnownStation::Malmo => &KNOWN_STATIONS[0],
            KnownStation::Goteborg => &KNOWN_STATIONS[1],
            KnownStation::Umea => &KNOWN_STATIONS[2],
        }
    }

    /// The upstream station id.
    pub fn id(self) -> StationId {
        self.entry().3
    }

    /// Lowercase ASCII key, as accepted on the command line.
    pub fn key(self) -> &'static str {
        self.entry().1
    }

    /// Human-readable station name.
    pub fn name(self) -> &'static str {
        self.entry().2
    }

    /// Look up a known station by id.
    pub fn from_id(id: StationId) -> Option<Self> {
        KNOWN_STATIONS
            .iter()
            .find(|(_, _, _, known)| *known == id)
            .map(|(station, _, _, _)| *station)
    }

    /// Look up a known station by key, ignoring ASCII case.
    pub fn from_key(key: &str) -> Option<Self> {
        KNOWN_STATIONS
            .iter()
            .find(|(_, k, _, _)| k.eq_ignore_ascii_case(key))
            .map(|(station, _, _, _)| *station)
    }
}

impl From<KnownStation> for StationId {
    fn from(station: KnownStation) -> Self {
        station.id()
    }
}

impl fmt::Display for KnownStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a station argument: either a known-station key or a numeric id.
///
/// ```
/// use travel_planner::domain::{KnownStation, resolve_station};
///
/// assert_eq!(resolve_station("Umea").unwrap(), KnownStation::Umea.id());
/// assert_eq!(resolve_station("740000003").unwrap(), KnownStation::Malmo.id());
/// assert!(resolve_station("nowhere").is_err());
/// ```
pub fn resolve_station(s: &str) -> Result<StationId, InvalidStationId> {
    match KnownStation::from_key(s) {
        Some(station) => Ok(station.id()),
        None => StationId::parse(s),
    }
}
