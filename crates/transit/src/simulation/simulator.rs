//! Timetable-driven position estimates.
//!
//! A vehicle's position is a pure function of its schedule and the current
//! instant: the first leg whose time window contains the instant is the one
//! being travelled, and the position is interpolated along it. Vehicles with
//! no such leg are idle at the terminus.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, trace};

use crate::identifiers::*;
use crate::models::{schedule::*, traits::*, types::*};
use crate::simulation::estimate::*;
use crate::simulation::window::LegWindow;

/// First leg under way at `now`, together with the run that contains it.
///
/// Legs whose times cannot be normalized are skipped.
pub fn match_leg(schedule: &Schedule, now: NaiveDateTime) -> Option<(Leg<'_>, LegWindow)> {
    let service_day = now.date();

    schedule.legs().find_map(|leg| {
        match LegWindow::normalize(service_day, leg.departure(), leg.arrival()) {
            Ok(window) => window.locate(now).map(|run| (leg, run)),
            Err(err) => {
                debug!(
                    leg = leg.index,
                    from = %leg.from.name,
                    to = %leg.to.name,
                    error = %err,
                    "skipping leg"
                );
                None
            }
        }
    })
}

/// Estimate where a vehicle running `schedule` is at `now`.
///
/// Returns `None` for an empty schedule, which has no terminus to idle at.
pub fn estimate_position(
    kind: VehicleKind,
    schedule: &Schedule,
    now: NaiveDateTime,
) -> Option<PositionEstimate> {
    let Some((leg, window)) = match_leg(schedule, now) else {
        return schedule.last().map(|terminus| PositionEstimate {
            kind,
            state: EstimateState::Idle,
            location: terminus.location,
            at: now,
        });
    };

    let progress = Progress::new(window.progress_at(now));
    let location = interpolate(leg.from.location, leg.to.location, progress);
    trace!(leg = leg.index, progress = progress.fraction(), "leg matched");

    Some(PositionEstimate {
        kind,
        state: EstimateState::InTransit(LegPosition {
            leg_index: leg.index,
            from: leg.from.name.clone(),
            to: leg.to.name.clone(),
            destination: leg.to.location,
            window,
            progress,
        }),
        location,
        at: now,
    })
}

/// A position estimate together with the vehicle it describes
#[derive(Clone)]
pub struct VehicleEstimate {
    pub vehicle: Arc<dyn Vehicle>,
    pub position: PositionEstimate,
}

impl fmt::Debug for VehicleEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VehicleEstimate")
            .field("vehicle", &self.vehicle.name())
            .field("position", &self.position)
            .finish()
    }
}

/// Answers position queries against an injected schedule provider
#[derive(Clone, Debug, Default)]
pub struct Simulator<P> {
    provider: P,
}

impl<P: ScheduleProvider> Simulator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn estimate_train(
        &self,
        number: &TrainNumber,
        now: NaiveDateTime,
    ) -> Result<VehicleEstimate> {
        let vehicle = self
            .provider
            .get_train(number)
            .ok_or_else(|| TransitError::TrainNotFound(number.clone()))?;

        locate(vehicle, now)
    }

    pub fn estimate_bus(&self, plate: &str, now: NaiveDateTime) -> Result<VehicleEstimate> {
        let vehicle = self.find_bus(plate)?;

        let stops = vehicle.schedule().len();
        if stops < vehicle.kind().min_waypoints() {
            return Err(TransitError::InsufficientStops {
                plate: vehicle
                    .number_plate()
                    .cloned()
                    .unwrap_or_else(|| NumberPlate::new(plate)),
                stops,
            });
        }

        locate(vehicle, now)
    }

    /// Ordered stops of a bus, for drawing its route
    pub fn bus_stops(&self, plate: &str) -> Result<Schedule> {
        Ok(self.find_bus(plate)?.schedule().clone())
    }

    fn find_bus(&self, plate: &str) -> Result<Arc<dyn Vehicle>> {
        self.provider
            .find_bus(plate)
            .ok_or_else(|| TransitError::BusNotFound(plate.to_owned()))
    }
}

fn locate(vehicle: Arc<dyn Vehicle>, now: NaiveDateTime) -> Result<VehicleEstimate> {
    let position = estimate_position(vehicle.kind(), vehicle.schedule(), now).ok_or_else(|| {
        TransitError::InvalidData(format!("{} has no scheduled stops", vehicle.name()))
    })?;

    Ok(VehicleEstimate { vehicle, position })
}
