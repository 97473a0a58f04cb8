//! Anchoring scheduled times of day onto concrete instants.
//!
//! Schedules repeat every day, so a leg's times are placed on the date of the
//! query instant (the service day). An arrival earlier than its departure
//! belongs to the following day.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::models::types::{LegTimeError, ScheduledTime};

/// Departure and arrival instants of one leg, `departure < arrival`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegWindow {
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
}

fn resolve(time: &ScheduledTime) -> Result<NaiveTime, LegTimeError> {
    match time {
        ScheduledTime::At(time) => Ok(*time),
        ScheduledTime::Marker(marker) => Err(LegTimeError::Unscheduled(*marker)),
        ScheduledTime::Malformed(raw) => Err(LegTimeError::Malformed(raw.clone())),
    }
}

impl LegWindow {
    /// Place a leg on `service_day`, rolling the arrival over midnight when needed.
    pub fn normalize(
        service_day: NaiveDate,
        departure: &ScheduledTime,
        arrival: &ScheduledTime,
    ) -> Result<Self, LegTimeError> {
        let departure = service_day.and_time(resolve(departure)?);
        let mut arrival = service_day.and_time(resolve(arrival)?);

        if arrival < departure {
            arrival += TimeDelta::days(1);
        }
        if arrival == departure {
            return Err(LegTimeError::ZeroDuration);
        }

        Ok(Self { departure, arrival })
    }

    pub fn duration(&self) -> TimeDelta {
        self.arrival - self.departure
    }

    /// Whether the leg crosses midnight
    pub fn is_overnight(&self) -> bool {
        self.arrival.date() > self.departure.date()
    }

    /// The same leg run one service day earlier
    pub fn previous_day(&self) -> Self {
        Self {
            departure: self.departure - TimeDelta::days(1),
            arrival: self.arrival - TimeDelta::days(1),
        }
    }

    /// Inclusive on both ends
    pub fn contains(&self, now: NaiveDateTime) -> bool {
        self.departure <= now && now <= self.arrival
    }

    /// The run of this leg that is under way at `now`, if any.
    ///
    /// An overnight leg anchored on today also covers the small hours of
    /// today through its previous-day run, which is tried second.
    pub fn locate(&self, now: NaiveDateTime) -> Option<Self> {
        if self.contains(now) {
            return Some(*self);
        }

        if self.is_overnight() {
            let earlier = self.previous_day();
            if earlier.contains(now) {
                return Some(earlier);
            }
        }

        None
    }

    /// Fraction of the leg completed at `now`, clamped to `[0, 1]`.
    ///
    /// A window with no length counts as complete.
    pub fn progress_at(&self, now: NaiveDateTime) -> f64 {
        let total = self.duration().num_milliseconds();
        if total <= 0 {
            return 1.0;
        }

        let elapsed = (now - self.departure).num_milliseconds();
        (elapsed as f64 / total as f64).clamp(0.0, 1.0)
    }

    /// Time left until arrival, zero once arrived
    pub fn remaining_at(&self, now: NaiveDateTime) -> TimeDelta {
        (self.arrival - now).max(TimeDelta::zero())
    }
}
