//! Core data records for the fleet service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FleetError, FleetResult};

/// A registered drone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    pub drone_id: String,
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    /// Accumulated flight hours
    pub flight_hours: f64,
    /// Set while the drone waits in the maintenance warehouse
    pub in_maintenance: bool,
}

impl Drone {
    pub fn new(
        drone_id: impl Into<String>,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            drone_id: drone_id.into(),
            name: name.into(),
            manufacturer: manufacturer.into(),
            model: model.into(),
            flight_hours: 0.0,
            in_maintenance: false,
        }
    }
}

/// A registered pilot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pilot {
    pub pilot_id: String,
    pub name: String,
    pub surname: String,
    /// Accumulated flight hours (whole hours)
    pub flight_hours: u32,
}

impl Pilot {
    pub fn new(
        pilot_id: impl Into<String>,
        name: impl Into<String>,
        surname: impl Into<String>,
    ) -> Self {
        Self {
            pilot_id: pilot_id.into(),
            name: name.into(),
            surname: surname.into(),
            flight_hours: 0,
        }
    }
}

/// Geographic position of a flight plan endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check the coordinates are finite and inside WGS84 bounds.
    pub fn validate(&self, field: &'static str) -> FleetResult<()> {
        if !self.lat.is_finite() || !self.lon.is_finite() {
            return Err(FleetError::validation(
                field,
                "latitude/longitude must be finite numbers",
            ));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(FleetError::validation(field, "latitude out of range"));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(FleetError::validation(field, "longitude out of range"));
        }
        Ok(())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Parses the `"lat,lon"` text form, e.g. `"40.0,-3.0"`.
impl FromStr for Position {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| FleetError::validation("position", "expected \"lat,lon\""))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| FleetError::validation("position", format!("bad latitude '{}'", lat.trim())))?;
        let lon = lon
            .trim()
            .parse::<f64>()
            .map_err(|_| FleetError::validation("position", format!("bad longitude '{}'", lon.trim())))?;
        let position = Position::new(lat, lon);
        position.validate("position")?;
        Ok(position)
    }
}

/// Request to book a drone and pilot for a flight plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub drone_id: String,
    pub pilot_id: String,
    pub start_time: DateTime<Utc>,
    /// Duration of the flight in whole hours
    pub duration_hours: u32,
    pub start_position: Position,
    pub destination_position: Position,
}

/// An accepted flight plan reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: String,
    pub drone_id: String,
    pub pilot_id: String,
    pub start_time: DateTime<Utc>,
    pub duration_hours: u32,
    pub start_position: Position,
    pub destination_position: Position,
}

impl Reservation {
    pub fn from_request(reservation_id: impl Into<String>, request: ReservationRequest) -> Self {
        Self {
            reservation_id: reservation_id.into(),
            drone_id: request.drone_id,
            pilot_id: request.pilot_id,
            start_time: request.start_time,
            duration_hours: request.duration_hours,
            start_position: request.start_position,
            destination_position: request.destination_position,
        }
    }
}

/// Counts across the facade's collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub drones: usize,
    pub pilots: usize,
    pub reservations: usize,
    pub in_maintenance: usize,
}
