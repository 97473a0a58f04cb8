//! Schedule data providers.

#[cfg(feature = "serde")]
pub mod loader;
pub mod static_provider;

pub use static_provider::{BusService, StaticScheduleProvider, TrainService};
