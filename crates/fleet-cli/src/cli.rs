use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;

use fleet_core::{Position, ReservationRequest};
use fleet_sdk::FleetClient;

#[derive(Parser, Debug)]
#[command(name = "fleetctl", author, version, about, long_about = None)]
pub struct Args {
    /// Fleet server URL
    #[arg(long, env = "FLEET_URL", default_value = "http://localhost:8080")]
    pub url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Register a new drone
    AddDrone {
        id: String,
        name: String,
        manufacturer: String,
        model: String,
    },
    /// Register a new pilot
    AddPilot {
        id: String,
        name: String,
        surname: String,
    },
    /// Drones ordered by flight hours
    Drones,
    /// Pilots ordered by flight hours
    Pilots,
    /// Set a drone's accumulated flight hours
    DroneHours { id: String, hours: f64 },
    /// Set a pilot's accumulated flight hours
    PilotHours { id: String, hours: u32 },
    /// Store a drone in the maintenance warehouse
    Store { id: String },
    /// Repair the drone nearest the warehouse door
    Repair,
    /// Drones waiting for maintenance
    Queue,
    /// Book a drone and pilot for a flight plan
    Reserve {
        #[arg(long)]
        drone: String,
        #[arg(long)]
        pilot: String,
        /// Start time (RFC 3339), e.g. 2026-03-01T10:00:00Z
        #[arg(long)]
        start: DateTime<Utc>,
        /// Duration in whole hours
        #[arg(long, default_value_t = 1)]
        hours: u32,
        /// Start position as "lat,lon"
        #[arg(long, allow_hyphen_values = true)]
        from: Position,
        /// Destination position as "lat,lon"
        #[arg(long, allow_hyphen_values = true)]
        to: Position,
    },
    /// Reservations assigned to a pilot
    PilotReservations { id: String },
    /// Flight plans assigned to a drone
    DroneReservations { id: String },
    /// Counts of drones, pilots, reservations and queued drones
    Summary,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn run(args: Args) -> Result<()> {
    let client = FleetClient::new(&args.url)?;

    match args.command {
        Command::AddDrone {
            id,
            name,
            manufacturer,
            model,
        } => print_json(&client.add_drone(&id, &name, &manufacturer, &model).await?),
        Command::AddPilot { id, name, surname } => {
            print_json(&client.add_pilot(&id, &name, &surname).await?)
        }
        Command::Drones => print_json(&client.drones_by_flight_hours().await?),
        Command::Pilots => print_json(&client.pilots_by_flight_hours().await?),
        Command::DroneHours { id, hours } => {
            print_json(&client.set_drone_flight_hours(&id, hours).await?)
        }
        Command::PilotHours { id, hours } => {
            print_json(&client.set_pilot_flight_hours(&id, hours).await?)
        }
        Command::Store { id } => print_json(&client.store_in_maintenance(&id).await?),
        Command::Repair => print_json(&client.repair_next().await?),
        Command::Queue => print_json(&client.maintenance_queue().await?),
        Command::Reserve {
            drone,
            pilot,
            start,
            hours,
            from,
            to,
        } => {
            let request = ReservationRequest {
                drone_id: drone,
                pilot_id: pilot,
                start_time: start,
                duration_hours: hours,
                start_position: from,
                destination_position: to,
            };
            print_json(&client.reserve(&request).await?)
        }
        Command::PilotReservations { id } => {
            print_json(&client.reservations_for_pilot(&id).await?)
        }
        Command::DroneReservations { id } => {
            print_json(&client.reservations_for_drone(&id).await?)
        }
        Command::Summary => print_json(&client.summary().await?),
    }
}
