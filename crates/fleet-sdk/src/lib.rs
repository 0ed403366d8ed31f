//! Fleet SDK - HTTP client for the drone fleet reservation service
//!
//! Wraps every REST endpoint with a typed async method.

pub mod client;

pub use client::FleetClient;
pub use fleet_core::{Drone, FleetSummary, Pilot, Position, Reservation, ReservationRequest};
