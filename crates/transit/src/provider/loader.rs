//! JSON timetable loader.
//!
//! Reads the two timetable files into a [`StaticScheduleProvider`]:
//!
//! - trains: `{ "<train no>": { "name", "stations": [{ "name", "lat", "lng", "arr", "dep" }] } }`
//! - buses: `{ "<bus id>": { "name", "number_plate", "bus_type",
//!   "stops": [{ "name", "lat", "lng", "time" }] } }`
//!
//! Object order is preserved, which matters for buses sharing a plate.
//! Records with too few stops to simulate are still loaded, so a query for
//! them fails on its own instead of taking the whole table down.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{info, warn};

use crate::identifiers::*;
use crate::models::{schedule::Schedule, types::*};
use crate::provider::static_provider::{BusService, StaticScheduleProvider, TrainService};

#[derive(Debug, Deserialize)]
struct TrainRecord {
    name: String,
    #[serde(default)]
    stations: Vec<StationRecord>,
}

#[derive(Debug, Deserialize)]
struct StationRecord {
    name: String,
    lat: f64,
    lng: f64,
    #[serde(default)]
    arr: Option<String>,
    #[serde(default)]
    dep: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BusRecord {
    name: String,
    number_plate: String,
    #[serde(default)]
    bus_type: Option<String>,
    #[serde(default)]
    stops: Vec<StopRecord>,
}

#[derive(Debug, Deserialize)]
struct StopRecord {
    name: String,
    lat: f64,
    lng: f64,
    #[serde(default)]
    time: Option<String>,
}

fn scheduled(raw: Option<&str>) -> ScheduledTime {
    raw.map(ScheduledTime::parse).unwrap_or_default()
}

/// Deserialize a JSON object into `(key, record)` pairs, keeping file order
fn parse_keyed<T: DeserializeOwned>(json: &str, what: &str) -> Result<Vec<(String, T)>> {
    let table: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(json).map_err(|source| TransitError::Json {
            context: format!("{what} table"),
            source,
        })?;

    table
        .into_iter()
        .map(|(key, value)| {
            let record = serde_json::from_value(value).map_err(|source| TransitError::Json {
                context: format!("{what} {key:?}"),
                source,
            })?;
            Ok((key, record))
        })
        .collect()
}

fn build_schedule(waypoints: Vec<Waypoint>, kind: VehicleKind, key: &str) -> Schedule {
    if waypoints.len() < kind.min_waypoints() {
        warn!(
            key,
            ?kind,
            stops = waypoints.len(),
            "too few stops to simulate, queries for it will fail"
        );
    }
    Schedule::new(waypoints)
}

/// Parse the contents of a train timetable file
pub fn parse_trains(json: &str) -> Result<Vec<TrainService>> {
    parse_keyed::<TrainRecord>(json, "train")?
        .into_iter()
        .map(|(key, record)| {
            let waypoints = record
                .stations
                .into_iter()
                .map(|station| {
                    Waypoint::new(
                        station.name,
                        station.lat,
                        station.lng,
                        scheduled(station.arr.as_deref()),
                        scheduled(station.dep.as_deref()),
                    )
                })
                .collect();

            Ok(TrainService {
                schedule: build_schedule(waypoints, VehicleKind::Train, &key),
                number: TrainNumber::new(key),
                name: record.name.into(),
            })
        })
        .collect()
}

/// Parse the contents of a bus timetable file
pub fn parse_buses(json: &str) -> Result<Vec<BusService>> {
    parse_keyed::<BusRecord>(json, "bus")?
        .into_iter()
        .map(|(key, record)| {
            let waypoints = record
                .stops
                .into_iter()
                .map(|stop| {
                    let time = scheduled(stop.time.as_deref());
                    Waypoint::with_single_time(stop.name, stop.lat, stop.lng, time)
                })
                .collect();

            Ok(BusService {
                schedule: build_schedule(waypoints, VehicleKind::Bus, &key),
                id: BusIdentifier::new(key),
                name: record.name.into(),
                number_plate: NumberPlate::new(record.number_plate),
                bus_type: record.bus_type.map(Into::into),
            })
        })
        .collect()
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| TransitError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Load both timetable files into a provider
pub fn load_provider(trains_path: &Path, buses_path: &Path) -> Result<StaticScheduleProvider> {
    let trains = parse_trains(&read(trains_path)?)?;
    info!(count = trains.len(), path = %trains_path.display(), "loaded train schedules");

    let buses = parse_buses(&read(buses_path)?)?;
    info!(count = buses.len(), path = %buses_path.display(), "loaded bus schedules");

    Ok(StaticScheduleProvider::from_data(trains, buses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Simulator;
    use chrono::NaiveDate;

    const TRAINS: &str = r#"{
        "12951": {
            "name": "Rajdhani Express",
            "stations": [
                { "name": "Mumbai Central", "lat": 18.9690, "lng": 72.8194, "arr": "Starts", "dep": "17:00" },
                { "name": "Surat", "lat": 21.2050, "lng": 72.8400, "arr": "19:30", "dep": "19:35" },
                { "name": "New Delhi", "lat": 28.6430, "lng": 77.2194, "arr": "08:30", "dep": "End" }
            ]
        },
        "00001": {
            "name": "Shuttle",
            "stations": [
                { "name": "Only", "lat": 1.0, "lng": 2.0 }
            ]
        }
    }"#;

    const BUSES: &str = r#"{
        "zeta": {
            "name": "Airport Express",
            "number_plate": "KA-01-F-1234",
            "bus_type": "AC",
            "stops": [
                { "name": "Majestic", "lat": 12.9767, "lng": 77.5713, "time": "06:00" },
                { "name": "Airport", "lat": 13.1986, "lng": 77.7066, "time": "07:15" }
            ]
        },
        "alpha": {
            "name": "Shadow",
            "number_plate": "ka-01-f-1234",
            "stops": [
                { "name": "Somewhere", "lat": 0.0, "lng": 0.0, "time": "06:00" }
            ]
        }
    }"#;

    #[test]
    fn test_parse_trains() {
        let trains = parse_trains(TRAINS).unwrap();
        assert_eq!(trains.len(), 2);

        let rajdhani = &trains[0];
        assert_eq!(rajdhani.number, TrainNumber::new("12951"));
        assert_eq!(rajdhani.schedule.len(), 3);

        let origin = rajdhani.schedule.first().unwrap();
        assert_eq!(origin.time_in, ScheduledTime::Marker(TimeMarker::Starts));
        assert_eq!(origin.time_out, ScheduledTime::parse("17:00"));
        assert_eq!(origin.lat(), 18.9690);
        assert_eq!(origin.lng(), 72.8194);

        // Missing arr/dep read as blank markers
        let shuttle = &trains[1];
        assert_eq!(
            shuttle.schedule.first().map(|w| &w.time_out),
            Some(&ScheduledTime::Marker(TimeMarker::Blank))
        );
    }

    #[test]
    fn test_parse_buses_keeps_file_order() {
        let buses = parse_buses(BUSES).unwrap();
        assert_eq!(buses[0].id, BusIdentifier::new("zeta"));
        assert_eq!(buses[1].id, BusIdentifier::new("alpha"));
        assert_eq!(buses[0].bus_type.as_deref(), Some("AC"));
        assert_eq!(buses[1].bus_type, None);

        let provider = StaticScheduleProvider::from_data(vec![], buses);
        let found = provider.bus("KA-01-F-1234").unwrap();
        assert_eq!(&*found.name, "Airport Express");
    }

    #[test]
    fn test_bus_without_stops_does_not_break_others() {
        let json = r#"{
            "good": {
                "name": "City Loop",
                "number_plate": "AB-123",
                "stops": [
                    { "name": "Depot", "lat": 0.0, "lng": 0.0, "time": "08:00" },
                    { "name": "Market", "lat": 1.0, "lng": 1.0, "time": "08:20" }
                ]
            },
            "empty": { "name": "Ghost", "number_plate": "GH-000", "stops": [] }
        }"#;
        let buses = parse_buses(json).unwrap();
        assert_eq!(buses.len(), 2);
        assert!(buses[1].schedule.is_empty());

        let simulator = Simulator::new(StaticScheduleProvider::from_data(vec![], buses));
        let now = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(8, 10, 0)
            .unwrap();

        let good = simulator.estimate_bus("ab-123", now).unwrap();
        assert_eq!(good.position.progress_pct(), Some(50.0));

        let err = simulator.estimate_bus("GH-000", now).unwrap_err();
        assert!(matches!(
            err,
            TransitError::InsufficientStops { ref plate, stops: 0 } if plate.as_str() == "GH-000"
        ));
        assert!(simulator.bus_stops("gh-000").unwrap().is_empty());
    }

    #[test]
    fn test_bad_record_reports_key() {
        let json = r#"{ "42": { "stations": [] } }"#;
        match parse_trains(json) {
            Err(TransitError::Json { context, .. }) => assert_eq!(context, "train \"42\""),
            other => panic!("expected a JSON error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = load_provider(
            Path::new("/nonexistent/trains.json"),
            Path::new("/nonexistent/buses.json"),
        );
        assert!(matches!(result, Err(TransitError::Io { .. })));
    }
}
