//! JSON bodies served by the tracking API.

use serde::{Deserialize, Serialize};

/// Leg fields of a moving vehicle, or the status text of an idle one
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Motion {
    InTransit {
        from: String,
        to: String,
        /// Percent of the current leg completed, one decimal
        progress: f64,
    },
    Idle {
        status: String,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainStatus {
    pub train_no: String,
    pub train_name: String,
    #[serde(flatten)]
    pub motion: Motion,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusStatus {
    pub bus_name: String,
    pub number_plate: String,
    pub bus_type: Option<String>,
    #[serde(flatten)]
    pub motion: Motion,
    pub lat: f64,
    pub lng: f64,
}

/// One stop of a bus route
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StopInfo {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
