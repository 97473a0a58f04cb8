//! Ordered waypoint sequences and the legs between them.

use std::sync::Arc;

use crate::models::types::*;

/// An immutable, ordered sequence of waypoints.
///
/// Cheap to clone; the waypoints are shared. A schedule may be empty when the
/// timetable lists no stops; queries against it fail, loading does not.
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule {
    waypoints: Arc<[Waypoint]>,
}

impl Schedule {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self {
            waypoints: waypoints.into(),
        }
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn first(&self) -> Option<&Waypoint> {
        self.waypoints.first()
    }

    /// The terminus, where idle vehicles are pinned
    pub fn last(&self) -> Option<&Waypoint> {
        self.waypoints.last()
    }

    /// Legs in schedule order (leg i runs from waypoint i to waypoint i + 1)
    pub fn legs(&self) -> impl Iterator<Item = Leg<'_>> {
        self.waypoints
            .windows(2)
            .enumerate()
            .map(|(index, pair)| Leg {
                index,
                from: &pair[0],
                to: &pair[1],
            })
    }
}

/// Two consecutive waypoints of a schedule
#[derive(Clone, Copy, Debug)]
pub struct Leg<'a> {
    pub index: usize,
    pub from: &'a Waypoint,
    pub to: &'a Waypoint,
}

impl Leg<'_> {
    pub fn departure(&self) -> &ScheduledTime {
        &self.from.time_out
    }

    pub fn arrival(&self) -> &ScheduledTime {
        &self.to.time_in
    }
}
