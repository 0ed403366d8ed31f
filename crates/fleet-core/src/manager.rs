//! Fleet facade: the single owner of drones, pilots, reservations and the
//! maintenance warehouse.
//!
//! Collections are plain vectors scanned linearly; insertion order is kept
//! so that listings and tie-breaks stay deterministic. The warehouse is a
//! FIFO queue: the first drone stored is the first one repaired.

use std::collections::VecDeque;

use crate::error::{FleetError, FleetResult};
use crate::models::{Drone, FleetSummary, Pilot, Reservation, ReservationRequest};
use crate::schedule::window_end;

#[derive(Debug, Default)]
pub struct FleetManager {
    drones: Vec<Drone>,
    pilots: Vec<Pilot>,
    reservations: Vec<Reservation>,
    /// Drone ids waiting for repair, front is nearest the warehouse door
    maintenance: VecDeque<String>,
    reservation_counter: u32,
}

fn require_id(field: &'static str, value: &str) -> FleetResult<()> {
    if value.trim().is_empty() {
        tracing::warn!("Rejected empty {}", field);
        return Err(FleetError::validation(field, "must not be empty"));
    }
    Ok(())
}

impl FleetManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered drones.
    pub fn size(&self) -> usize {
        let total = self.drones.len();
        tracing::info!("size() => drones: {}", total);
        total
    }

    pub fn summary(&self) -> FleetSummary {
        tracing::info!("summary()");
        let summary = FleetSummary {
            drones: self.drones.len(),
            pilots: self.pilots.len(),
            reservations: self.reservations.len(),
            in_maintenance: self.maintenance.len(),
        };
        tracing::info!("summary() => {:?}", summary);
        summary
    }

    pub fn add_drone(
        &mut self,
        drone_id: &str,
        name: &str,
        manufacturer: &str,
        model: &str,
    ) -> FleetResult<Drone> {
        tracing::info!(
            "add_drone(id={}, name={}, manufacturer={}, model={})",
            drone_id,
            name,
            manufacturer,
            model
        );
        require_id("drone_id", drone_id)?;
        if self.find_drone(drone_id).is_some() {
            tracing::warn!("Rejected duplicate drone {}", drone_id);
            return Err(FleetError::DuplicateDrone(drone_id.to_string()));
        }

        let drone = Drone::new(drone_id, name, manufacturer, model);
        self.drones.push(drone.clone());
        tracing::info!("Drone added: {:?}", drone);
        Ok(drone)
    }

    pub fn add_pilot(&mut self, pilot_id: &str, name: &str, surname: &str) -> FleetResult<Pilot> {
        tracing::info!(
            "add_pilot(id={}, name={}, surname={})",
            pilot_id,
            name,
            surname
        );
        require_id("pilot_id", pilot_id)?;
        if self.find_pilot(pilot_id).is_some() {
            tracing::warn!("Rejected duplicate pilot {}", pilot_id);
            return Err(FleetError::DuplicatePilot(pilot_id.to_string()));
        }

        let pilot = Pilot::new(pilot_id, name, surname);
        self.pilots.push(pilot.clone());
        tracing::info!("Pilot added: {:?}", pilot);
        Ok(pilot)
    }

    fn find_drone(&self, drone_id: &str) -> Option<&Drone> {
        self.drones.iter().find(|d| d.drone_id == drone_id)
    }

    fn find_pilot(&self, pilot_id: &str) -> Option<&Pilot> {
        self.pilots.iter().find(|p| p.pilot_id == pilot_id)
    }

    pub fn drone(&self, drone_id: &str) -> Option<Drone> {
        tracing::info!("drone(id={})", drone_id);
        let found = self.find_drone(drone_id).cloned();
        if found.is_none() {
            tracing::warn!("No drone with id {}", drone_id);
        }
        found
    }

    pub fn pilot(&self, pilot_id: &str) -> Option<Pilot> {
        tracing::info!("pilot(id={})", pilot_id);
        let found = self.find_pilot(pilot_id).cloned();
        if found.is_none() {
            tracing::warn!("No pilot with id {}", pilot_id);
        }
        found
    }

    fn drone_mut(&mut self, drone_id: &str) -> FleetResult<&mut Drone> {
        self.drones
            .iter_mut()
            .find(|d| d.drone_id == drone_id)
            .ok_or_else(|| FleetError::DroneNotFound(drone_id.to_string()))
    }

    fn pilot_mut(&mut self, pilot_id: &str) -> FleetResult<&mut Pilot> {
        self.pilots
            .iter_mut()
            .find(|p| p.pilot_id == pilot_id)
            .ok_or_else(|| FleetError::PilotNotFound(pilot_id.to_string()))
    }

    pub fn set_drone_flight_hours(&mut self, drone_id: &str, hours: f64) -> FleetResult<Drone> {
        tracing::info!("set_drone_flight_hours(id={}, hours={})", drone_id, hours);
        if !hours.is_finite() || hours < 0.0 {
            tracing::warn!("Rejected flight hours {} for drone {}", hours, drone_id);
            return Err(FleetError::validation(
                "flight_hours",
                "must be a finite, non-negative number",
            ));
        }
        let drone = self
            .drone_mut(drone_id)
            .inspect_err(|err| tracing::error!("set_drone_flight_hours failed: {}", err))?;
        drone.flight_hours = hours;
        tracing::info!("Drone {} now has {} flight hours", drone_id, hours);
        Ok(drone.clone())
    }

    pub fn set_pilot_flight_hours(&mut self, pilot_id: &str, hours: u32) -> FleetResult<Pilot> {
        tracing::info!("set_pilot_flight_hours(id={}, hours={})", pilot_id, hours);
        let pilot = self
            .pilot_mut(pilot_id)
            .inspect_err(|err| tracing::error!("set_pilot_flight_hours failed: {}", err))?;
        pilot.flight_hours = hours;
        tracing::info!("Pilot {} now has {} flight hours", pilot_id, hours);
        Ok(pilot.clone())
    }

    /// Drones sorted by flight hours, most flown first. Ties keep insertion order.
    pub fn drones_by_flight_hours(&self) -> Vec<Drone> {
        tracing::info!("drones_by_flight_hours()");
        let mut drones = self.drones.clone();
        drones.sort_by(|a, b| b.flight_hours.total_cmp(&a.flight_hours));
        tracing::info!("drones_by_flight_hours() => {} drones", drones.len());
        drones
    }

    /// Pilots sorted by flight hours, most flown first. Ties keep insertion order.
    pub fn pilots_by_flight_hours(&self) -> Vec<Pilot> {
        tracing::info!("pilots_by_flight_hours()");
        let mut pilots = self.pilots.clone();
        pilots.sort_by(|a, b| b.flight_hours.cmp(&a.flight_hours));
        tracing::info!("pilots_by_flight_hours() => {} pilots", pilots.len());
        pilots
    }

    /// Move a drone into the maintenance warehouse.
    pub fn store_in_maintenance(&mut self, drone_id: &str) -> FleetResult<Drone> {
        tracing::info!("store_in_maintenance(drone={})", drone_id);
        let drone = match self.drone_mut(drone_id) {
            Ok(drone) => drone,
            Err(err) => {
                tracing::error!("No drone with id {}", drone_id);
                return Err(err);
            }
        };
        if drone.in_maintenance {
            tracing::warn!("Drone {} is already in maintenance", drone_id);
            return Err(FleetError::AlreadyInMaintenance(drone_id.to_string()));
        }

        drone.in_maintenance = true;
        let stored = drone.clone();
        self.maintenance.push_back(stored.drone_id.clone());
        tracing::info!(
            "Drone {} stored for maintenance (queue length {})",
            drone_id,
            self.maintenance.len()
        );
        Ok(stored)
    }

    /// Repair the drone closest to the warehouse door and return it to service.
    pub fn repair_next(&mut self) -> FleetResult<Drone> {
        tracing::info!("repair_next()");
        let Some(drone_id) = self.maintenance.pop_front() else {
            tracing::error!("No drones in maintenance");
            return Err(FleetError::MaintenanceQueueEmpty);
        };

        let drone = self.drone_mut(&drone_id)?;
        drone.in_maintenance = false;
        tracing::info!("Drone {} leaves maintenance", drone_id);
        Ok(drone.clone())
    }

    /// Drones currently in the warehouse, next to be repaired first.
    pub fn maintenance_queue(&self) -> Vec<Drone> {
        tracing::info!("maintenance_queue()");
        let queued: Vec<Drone> = self
            .maintenance
            .iter()
            .filter_map(|drone_id| self.find_drone(drone_id).cloned())
            .collect();
        tracing::info!("maintenance_queue() => {} drones", queued.len());
        queued
    }

    /// Book a drone and pilot for a flight plan.
    ///
    /// Fails when either is unknown, when the drone is in maintenance, or
    /// when an existing booking for the same drone or pilot overlaps the
    /// requested window.
    pub fn add_reservation(&mut self, request: ReservationRequest) -> FleetResult<Reservation> {
        tracing::info!(
            "add_reservation(drone={}, start={}, duration={}h, from={}, to={}, pilot={})",
            request.drone_id,
            request.start_time,
            request.duration_hours,
            request.start_position,
            request.destination_position,
            request.pilot_id
        );

        if request.duration_hours == 0 {
            tracing::warn!("Reservation rejected: zero duration");
            return Err(FleetError::validation(
                "duration_hours",
                "must be at least one hour",
            ));
        }
        for (field, position) in [
            ("start_position", &request.start_position),
            ("destination_position", &request.destination_position),
        ] {
            position
                .validate(field)
                .inspect_err(|err| tracing::warn!("Reservation rejected: {}", err))?;
        }
        let start = request.start_time;
        let end = window_end(start, request.duration_hours)
            .inspect_err(|err| tracing::warn!("Reservation rejected: {}", err))?;

        let drone = self.find_drone(&request.drone_id).cloned().ok_or_else(|| {
            tracing::error!("Reservation rejected: drone {} not found", request.drone_id);
            FleetError::DroneNotFound(request.drone_id.clone())
        })?;
        if self.find_pilot(&request.pilot_id).is_none() {
            tracing::error!("Reservation rejected: pilot {} not found", request.pilot_id);
            return Err(FleetError::PilotNotFound(request.pilot_id.clone()));
        }
        if drone.in_maintenance {
            tracing::error!(
                "Reservation rejected: drone {} is in maintenance",
                drone.drone_id
            );
            return Err(FleetError::DroneInMaintenance(drone.drone_id));
        }

        if let Some(existing) = self
            .reservations
            .iter()
            .find(|r| r.conflicts_with(&request.drone_id, &request.pilot_id, start, end))
        {
            tracing::error!(
                "Reservation rejected: overlaps {} ({} - {})",
                existing.reservation_id,
                existing.start_time,
                existing.end_time()
            );
            return Err(FleetError::ReservationOverlap {
                drone_id: request.drone_id,
                pilot_id: request.pilot_id,
            });
        }

        self.reservation_counter += 1;
        let reservation_id = format!("RES-{:04}", self.reservation_counter);
        let reservation = Reservation::from_request(reservation_id, request);
        self.reservations.push(reservation.clone());
        tracing::info!("Reservation added: {:?}", reservation);
        Ok(reservation)
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        tracing::info!("reservations() => {} bookings", self.reservations.len());
        self.reservations.clone()
    }

    /// Reservations assigned to a pilot, in booking order.
    pub fn reservations_for_pilot(&self, pilot_id: &str) -> Vec<Reservation> {
        tracing::info!("reservations_for_pilot(pilot={})", pilot_id);
        let found: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|r| r.pilot_id == pilot_id)
            .cloned()
            .collect();
        tracing::info!("Reservations for pilot {}: {}", pilot_id, found.len());
        found
    }

    /// Flight plans assigned to a drone, in booking order.
    pub fn reservations_for_drone(&self, drone_id: &str) -> Vec<Reservation> {
        tracing::info!("reservations_for_drone(drone={})", drone_id);
        let found: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|r| r.drone_id == drone_id)
            .cloned()
            .collect();
        tracing::info!("Reservations for drone {}: {}", drone_id, found.len());
        found
    }
}
