pub mod error;
pub mod manager;
pub mod models;
pub mod schedule;

pub use error::{FleetError, FleetResult};
pub use manager::FleetManager;
pub use models::{
    Drone, FleetSummary, Pilot, Position, Reservation, ReservationRequest,
};
