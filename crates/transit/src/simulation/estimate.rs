//! Results of a position query.

use std::sync::Arc;

use chrono::{NaiveDateTime, TimeDelta};
use geo::Point;

use crate::models::types::VehicleKind;
use crate::simulation::window::LegWindow;
use crate::spatial::haversine_distance;

/// Completed fraction of a leg, always within `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Progress(f64);

impl Progress {
    /// Clamps into range; NaN counts as not started
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self(0.0);
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    pub fn fraction(&self) -> f64 {
        self.0
    }

    /// Percentage rounded to one decimal place.
    ///
    /// Rounds the exact binary value, ties to even, so 1.25 % reads as 1.2.
    pub fn percent(&self) -> f64 {
        let percent = self.0 * 100.0;
        format!("{percent:.1}").parse().unwrap_or(percent)
    }
}

/// Planar interpolation between two coordinates.
///
/// Latitude and longitude are interpolated independently; no great-circle
/// correction is applied.
pub fn interpolate(from: Point, to: Point, progress: Progress) -> Point {
    let t = progress.fraction();
    if t >= 1.0 {
        return to;
    }

    Point::new(
        from.x() + (to.x() - from.x()) * t,
        from.y() + (to.y() - from.y()) * t,
    )
}

/// Where on its current leg a vehicle is
#[derive(Clone, Debug, PartialEq)]
pub struct LegPosition {
    pub leg_index: usize,
    pub from: Arc<str>,
    pub to: Arc<str>,
    pub destination: Point,
    pub window: LegWindow,
    pub progress: Progress,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EstimateState {
    InTransit(LegPosition),
    /// Not started yet, finished for the day, or between legs
    Idle,
}

/// Estimated position of a vehicle at one instant
#[derive(Clone, Debug, PartialEq)]
pub struct PositionEstimate {
    pub kind: VehicleKind,
    pub state: EstimateState,
    /// x = longitude, y = latitude
    pub location: Point,
    pub at: NaiveDateTime,
}

impl PositionEstimate {
    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    pub fn lng(&self) -> f64 {
        self.location.x()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, EstimateState::Idle)
    }

    pub fn leg(&self) -> Option<&LegPosition> {
        match &self.state {
            EstimateState::InTransit(leg) => Some(leg),
            EstimateState::Idle => None,
        }
    }

    pub fn progress_pct(&self) -> Option<f64> {
        self.leg().map(|leg| leg.progress.percent())
    }

    pub fn from_name(&self) -> Option<&str> {
        self.leg().map(|leg| &*leg.from)
    }

    pub fn to_name(&self) -> Option<&str> {
        self.leg().map(|leg| &*leg.to)
    }

    /// Status text for idle vehicles
    pub fn status(&self) -> Option<&'static str> {
        self.is_idle().then(|| self.kind.idle_label())
    }

    /// Scheduled time left on the current leg
    pub fn remaining_time(&self) -> Option<TimeDelta> {
        self.leg().map(|leg| leg.window.remaining_at(self.at))
    }

    /// Great-circle distance in meters to the end of the current leg
    pub fn remaining_distance_m(&self) -> Option<f64> {
        self.leg()
            .map(|leg| haversine_distance(self.location, leg.destination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    #[test]
    fn test_progress_clamps() {
        assert_eq!(Progress::new(-0.2).fraction(), 0.0);
        assert_eq!(Progress::new(1.7).fraction(), 1.0);
        assert_eq!(Progress::new(f64::NAN).fraction(), 0.0);
        assert_eq!(Progress::new(0.5).fraction(), 0.5);
    }

    #[test]
    fn test_progress_percent_rounding() {
        assert_eq!(Progress::new(0.75).percent(), 75.0);
        assert_eq!(Progress::new(1.0 / 3.0).percent(), 33.3);
        assert_eq!(Progress::new(0.12345).percent(), 12.3);
        assert_eq!(Progress::new(0.0).percent(), 0.0);
        assert_eq!(Progress::new(1.0).percent(), 100.0);
        assert_eq!(Progress::new(9.0 / 720.0).percent(), 1.2);
    }

    #[test]
    fn test_interpolate_endpoints_are_exact() {
        let from = Point::new(72.8194, 18.9690);
        let to = Point::new(72.8400, 21.2050);

        assert_eq!(interpolate(from, to, Progress::new(0.0)), from);
        assert_eq!(interpolate(from, to, Progress::new(1.0)), to);
    }

    #[test]
    fn test_interpolate_is_planar() {
        let from = Point::new(10.0, 50.0);
        let to = Point::new(20.0, 60.0);

        let mid = interpolate(from, to, Progress::new(0.5));
        assert_relative_eq!(mid.x(), 15.0);
        assert_relative_eq!(mid.y(), 55.0);

        let quarter = interpolate(from, to, Progress::new(0.25));
        assert_relative_eq!(quarter.x(), 12.5);
        assert_relative_eq!(quarter.y(), 52.5);
    }

    #[test]
    fn test_idle_estimate_accessors() {
        let estimate = PositionEstimate {
            kind: VehicleKind::Bus,
            state: EstimateState::Idle,
            location: Point::new(77.7, 13.2),
            at: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(3, 0, 0).unwrap(),
        };

        assert!(estimate.is_idle());
        assert_eq!(estimate.status(), Some("not running at this time"));
        assert_eq!(estimate.progress_pct(), None);
        assert_eq!(estimate.from_name(), None);
        assert_eq!(estimate.remaining_time(), None);
        assert_eq!(estimate.remaining_distance_m(), None);
        assert_eq!(estimate.lat(), 13.2);
        assert_eq!(estimate.lng(), 77.7);
    }
}
