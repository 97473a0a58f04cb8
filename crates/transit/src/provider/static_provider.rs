//! In-memory schedule provider.
//!
//! Tables are built once (usually by the JSON loader at startup) and never
//! mutated afterwards, so readers need no locking.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::identifiers::*;
use crate::models::{schedule::Schedule, traits::*, types::*};

// ============================================================================
// Concrete Implementations of Traits
// ============================================================================

#[derive(Clone, Debug)]
pub struct TrainService {
    pub number: TrainNumber,
    pub name: Arc<str>,
    pub schedule: Schedule,
}

impl Vehicle for TrainService {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Train
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}

#[derive(Clone, Debug)]
pub struct BusService {
    pub id: BusIdentifier,
    pub name: Arc<str>,
    pub number_plate: NumberPlate,
    pub bus_type: Option<Arc<str>>,
    pub schedule: Schedule,
}

impl Vehicle for BusService {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Bus
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    fn number_plate(&self) -> Option<&NumberPlate> {
        Some(&self.number_plate)
    }

    fn bus_type(&self) -> Option<&str> {
        self.bus_type.as_deref()
    }
}

// ============================================================================
// Static Provider
// ============================================================================

/// In-memory schedule provider
///
/// This type is cheap to clone since all data is stored in `Arc`s.
#[derive(Clone, Default)]
pub struct StaticScheduleProvider {
    // Core data, in load order
    trains: Vec<Arc<TrainService>>,
    buses: Vec<Arc<BusService>>,

    // Lookup maps
    train_map: HashMap<TrainNumber, Arc<TrainService>>,
    plate_index: HashMap<String, Arc<BusService>>,
}

impl StaticScheduleProvider {
    /// Create a new empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Build provider from raw data (used by the loader)
    pub fn from_data(trains: Vec<TrainService>, buses: Vec<BusService>) -> Self {
        let trains: Vec<Arc<TrainService>> = trains.into_iter().map(Arc::new).collect();
        let buses: Vec<Arc<BusService>> = buses.into_iter().map(Arc::new).collect();

        let mut train_map = HashMap::with_capacity(trains.len());
        for train in &trains {
            if train_map.insert(train.number.clone(), train.clone()).is_some() {
                warn!(train = %train.number, "duplicate train number, keeping the last one loaded");
            }
        }

        // First plate wins, same as a front-to-back scan over the buses
        let mut plate_index = HashMap::with_capacity(buses.len());
        for bus in &buses {
            let key = bus.number_plate.normalized();
            if plate_index.contains_key(&key) {
                warn!(
                    bus = %bus.id,
                    plate = %bus.number_plate,
                    "number plate already used by an earlier bus, it will never be matched"
                );
                continue;
            }
            plate_index.insert(key, bus.clone());
        }

        Self {
            trains,
            buses,
            train_map,
            plate_index,
        }
    }

    pub fn train(&self, number: &TrainNumber) -> Option<&Arc<TrainService>> {
        self.train_map.get(number)
    }

    pub fn bus(&self, plate: &str) -> Option<&Arc<BusService>> {
        self.plate_index.get(&normalize_plate(plate))
    }

    pub fn train_count(&self) -> usize {
        self.trains.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }
}

impl ScheduleProvider for StaticScheduleProvider {
    fn get_train(&self, number: &TrainNumber) -> Option<Arc<dyn Vehicle>> {
        self.train(number).map(|t| t.clone() as Arc<dyn Vehicle>)
    }

    fn find_bus(&self, plate: &str) -> Option<Arc<dyn Vehicle>> {
        self.bus(plate).map(|b| b.clone() as Arc<dyn Vehicle>)
    }

    fn all_trains(&self) -> Vec<Arc<dyn Vehicle>> {
        self.trains
            .iter()
            .map(|t| t.clone() as Arc<dyn Vehicle>)
            .collect()
    }

    fn all_buses(&self) -> Vec<Arc<dyn Vehicle>> {
        self.buses
            .iter()
            .map(|b| b.clone() as Arc<dyn Vehicle>)
            .collect()
    }
}
