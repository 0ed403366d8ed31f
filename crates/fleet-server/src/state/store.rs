//! In-memory state store wrapping the fleet facade.

use fleet_core::{
    Drone, FleetManager, FleetResult, FleetSummary, Pilot, Reservation, ReservationRequest,
};
use std::sync::{Mutex, MutexGuard};

use crate::config::Config;

/// Application state - one fleet facade shared by every request.
pub struct AppState {
    config: Config,
    fleet: Mutex<FleetManager>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_fleet(FleetManager::new(), config)
    }

    pub fn with_fleet(fleet: FleetManager, config: Config) -> Self {
        Self {
            config,
            fleet: Mutex::new(fleet),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // A panic while holding the lock leaves the lists intact; keep serving.
    fn fleet(&self) -> MutexGuard<'_, FleetManager> {
        self.fleet
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn drone_count(&self) -> usize {
        self.fleet().size()
    }

    pub fn summary(&self) -> FleetSummary {
        self.fleet().summary()
    }

    pub fn add_drone(
        &self,
        drone_id: &str,
        name: &str,
        manufacturer: &str,
        model: &str,
    ) -> FleetResult<Drone> {
        self.fleet().add_drone(drone_id, name, manufacturer, model)
    }

    pub fn add_pilot(&self, pilot_id: &str, name: &str, surname: &str) -> FleetResult<Pilot> {
        self.fleet().add_pilot(pilot_id, name, surname)
    }

    pub fn get_drone(&self, drone_id: &str) -> Option<Drone> {
        self.fleet().drone(drone_id)
    }

    pub fn get_pilot(&self, pilot_id: &str) -> Option<Pilot> {
        self.fleet().pilot(pilot_id)
    }

    pub fn set_drone_flight_hours(&self, drone_id: &str, hours: f64) -> FleetResult<Drone> {
        self.fleet().set_drone_flight_hours(drone_id, hours)
    }

    pub fn set_pilot_flight_hours(&self, pilot_id: &str, hours: u32) -> FleetResult<Pilot> {
        self.fleet().set_pilot_flight_hours(pilot_id, hours)
    }

    pub fn drones_by_flight_hours(&self) -> Vec<Drone> {
        self.fleet().drones_by_flight_hours()
    }

    pub fn pilots_by_flight_hours(&self) -> Vec<Pilot> {
        self.fleet().pilots_by_flight_hours()
    }

    pub fn store_in_maintenance(&self, drone_id: &str) -> FleetResult<Drone> {
        self.fleet().store_in_maintenance(drone_id)
    }

    pub fn repair_next(&self) -> FleetResult<Drone> {
        self.fleet().repair_next()
    }

    pub fn maintenance_queue(&self) -> Vec<Drone> {
        self.fleet().maintenance_queue()
    }

    pub fn add_reservation(&self, request: ReservationRequest) -> FleetResult<Reservation> {
        self.fleet().add_reservation(request)
    }

    pub fn get_reservations(&self) -> Vec<Reservation> {
        self.fleet().reservations()
    }

    pub fn reservations_for_pilot(&self, pilot_id: &str) -> Vec<Reservation> {
        self.fleet().reservations_for_pilot(pilot_id)
    }

    pub fn reservations_for_drone(&self, drone_id: &str) -> Vec<Reservation> {
        self.fleet().reservations_for_drone(drone_id)
    }
}
