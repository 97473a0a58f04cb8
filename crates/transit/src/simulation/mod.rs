//! Schedule simulation: which leg a vehicle is on and where along it.

pub mod estimate;
pub mod simulator;
pub mod window;

pub use estimate::{interpolate, EstimateState, LegPosition, PositionEstimate, Progress};
pub use simulator::{estimate_position, match_leg, Simulator, VehicleEstimate};
pub use window::LegWindow;
