//! Core data types and enums for timetable data.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveTime;
use geo::Point;

use crate::identifiers::*;

// ============================================================================
// Enums
// ============================================================================

/// Kind of timetabled vehicle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Train,
    Bus,
}

impl VehicleKind {
    /// Status reported when the vehicle is outside every leg of its schedule
    pub fn idle_label(&self) -> &'static str {
        match self {
            Self::Train => "halted or completed",
            Self::Bus => "not running at this time",
        }
    }

    /// Minimum number of waypoints needed before a position can be simulated.
    ///
    /// Trains with a single station are reported idle at that station,
    /// buses refuse to simulate.
    pub fn min_waypoints(&self) -> usize {
        match self {
            Self::Train => 1,
            Self::Bus => 2,
        }
    }
}

/// Placeholder values used in timetables instead of a time
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeMarker {
    /// Empty or absent field
    Blank,
    /// "starts": the origin station has no arrival/departure
    Starts,
    /// "end": the terminus has no departure
    End,
}

impl fmt::Display for TimeMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "blank"),
            Self::Starts => write!(f, "starts"),
            Self::End => write!(f, "end"),
        }
    }
}

// ============================================================================
// Data Structures
// ============================================================================

/// A time-of-day field as it appears in a timetable.
///
/// Parsing never fails: values that are not `HH:MM` are kept so the leg they
/// belong to can be skipped (and reported) when a position is estimated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduledTime {
    At(NaiveTime),
    Marker(TimeMarker),
    Malformed(Arc<str>),
}

impl ScheduledTime {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_lowercase().as_str() {
            "" => return Self::Marker(TimeMarker::Blank),
            "starts" => return Self::Marker(TimeMarker::Starts),
            "end" => return Self::Marker(TimeMarker::End),
            _ => {}
        }

        match NaiveTime::parse_from_str(trimmed, "%H:%M") {
            Ok(time) => Self::At(time),
            Err(_) => Self::Malformed(trimmed.into()),
        }
    }
}

impl Default for ScheduledTime {
    fn default() -> Self {
        Self::Marker(TimeMarker::Blank)
    }
}

impl From<NaiveTime> for ScheduledTime {
    fn from(time: NaiveTime) -> Self {
        Self::At(time)
    }
}

impl fmt::Display for ScheduledTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(time) => write!(f, "{}", time.format("%H:%M")),
            Self::Marker(TimeMarker::Blank) => Ok(()),
            Self::Marker(marker) => write!(f, "{marker}"),
            Self::Malformed(raw) => write!(f, "{raw}"),
        }
    }
}

/// A named stop on a schedule.
///
/// `time_in` is used when the waypoint ends a leg (arrival), `time_out` when
/// it starts one (departure). Buses carry a single time that fills both.
#[derive(Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub name: Arc<str>,
    /// x = longitude, y = latitude
    pub location: Point,
    pub time_in: ScheduledTime,
    pub time_out: ScheduledTime,
}

impl Waypoint {
    pub fn new(
        name: impl Into<Arc<str>>,
        lat: f64,
        lng: f64,
        time_in: ScheduledTime,
        time_out: ScheduledTime,
    ) -> Self {
        Self {
            name: name.into(),
            location: Point::new(lng, lat),
            time_in,
            time_out,
        }
    }

    /// Waypoint whose single scheduled time is both arrival and departure
    pub fn with_single_time(
        name: impl Into<Arc<str>>,
        lat: f64,
        lng: f64,
        time: ScheduledTime,
    ) -> Self {
        Self::new(name, lat, lng, time.clone(), time)
    }

    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    pub fn lng(&self) -> f64 {
        self.location.x()
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("Train not found: {0}")]
    TrainNotFound(TrainNumber),

    #[error("Bus not found: {0}")]
    BusNotFound(String),

    #[error("Not enough stops to simulate bus {plate}: {stops} stop(s)")]
    InsufficientStops { plate: NumberPlate, stops: usize },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "serde")]
    #[error("Failed to parse {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, TransitError>;

/// Why a leg cannot take part in matching. Absorbed by the leg scan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LegTimeError {
    #[error("leg time is not scheduled ({0})")]
    Unscheduled(TimeMarker),

    #[error("malformed leg time {0:?}")]
    Malformed(Arc<str>),

    #[error("leg arrives at the moment it departs")]
    ZeroDuration,
}
