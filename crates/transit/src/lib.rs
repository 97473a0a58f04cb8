//! # livetrack-transit
//!
//! Estimates where a train or bus is right now from nothing but its daily
//! timetable.
//!
//! ## Features
//!
//! - **Timetable-only**: No live feed, positions are interpolated between scheduled stops
//! - **Dirty data tolerant**: Legs with unusable times are skipped, never fatal
//! - **Overnight legs**: Legs crossing midnight are matched on both sides of it
//! - **Injected data**: Simulators run against any [`ScheduleProvider`]
//! - **JSON loading**: Read timetable files (`serde` feature, on by default)
//!
//! ## Example
//!
//! ```
//! use livetrack_transit::prelude::*;
//! use chrono::NaiveDate;
//!
//! let bus = BusService {
//!     id: BusIdentifier::new("airport"),
//!     name: "Airport Express".into(),
//!     number_plate: NumberPlate::new("KA-01-F-1234"),
//!     bus_type: Some("AC".into()),
//!     schedule: Schedule::new(vec![
//!         Waypoint::with_single_time("Majestic", 12.0, 77.0, ScheduledTime::parse("06:00")),
//!         Waypoint::with_single_time("Airport", 13.0, 78.0, ScheduledTime::parse("07:00")),
//!     ]),
//! };
//!
//! let simulator = Simulator::new(StaticScheduleProvider::from_data(vec![], vec![bus]));
//!
//! let now = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(6, 30, 0).unwrap();
//! let estimate = simulator.estimate_bus("ka-01-f-1234", now).unwrap();
//! assert_eq!(estimate.position.progress_pct(), Some(50.0));
//! assert_eq!(estimate.position.lat(), 12.5);
//! ```

pub mod identifiers;
pub mod models;
pub mod provider;
pub mod simulation;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{schedule::*, traits::*, types::*};
    pub use crate::provider::{BusService, StaticScheduleProvider, TrainService};
    pub use crate::simulation::*;
}

pub use prelude::*;
