//! Timetable data models, types, and traits.

pub mod schedule;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use schedule::{Leg, Schedule};
pub use traits::{ScheduleProvider, Vehicle};
pub use types::{
    LegTimeError, Result, ScheduledTime, TimeMarker, TransitError, VehicleKind, Waypoint,
};
