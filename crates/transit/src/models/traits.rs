//! Core traits for timetabled vehicles.
//!
//! These traits define the public interface for schedule data.
//! Implementations can be in-memory, database-backed, or remote.

use std::sync::Arc;

use crate::identifiers::*;
use crate::models::schedule::Schedule;
use crate::models::types::*;

// ============================================================================
// Core Entity Traits
// ============================================================================

/// A vehicle running a fixed daily schedule
pub trait Vehicle: Send + Sync {
    fn kind(&self) -> VehicleKind;

    /// Display name (e.g., "Rajdhani Express", "City Loop")
    fn name(&self) -> &str;

    /// Ordered waypoints the vehicle visits every day
    fn schedule(&self) -> &Schedule;

    /// Registration plate, for road vehicles
    fn number_plate(&self) -> Option<&NumberPlate> {
        None
    }

    /// Free-form service class (e.g., "AC Sleeper")
    fn bus_type(&self) -> Option<&str> {
        None
    }
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Read-only source of schedules
pub trait ScheduleProvider: Send + Sync {
    // ---- Lookups ----

    /// Exact match on the train number
    fn get_train(&self, number: &TrainNumber) -> Option<Arc<dyn Vehicle>>;

    /// Case-insensitive match on the number plate.
    /// When several buses share a plate, the first one loaded wins.
    fn find_bus(&self, plate: &str) -> Option<Arc<dyn Vehicle>>;

    // ---- Collections ----
    fn all_trains(&self) -> Vec<Arc<dyn Vehicle>>;
    fn all_buses(&self) -> Vec<Arc<dyn Vehicle>>;
}
