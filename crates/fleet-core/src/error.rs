//! Errors returned by the fleet facade.

use thiserror::Error;

pub type FleetResult<T> = Result<T, FleetError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetError {
    #[error("drone {0} not found")]
    DroneNotFound(String),

    #[error("pilot {0} not found")]
    PilotNotFound(String),

    #[error("drone {0} already exists")]
    DuplicateDrone(String),

    #[error("pilot {0} already exists")]
    DuplicatePilot(String),

    /// Drones sitting in the warehouse cannot be booked.
    #[error("drone {0} is in maintenance")]
    DroneInMaintenance(String),

    #[error("drone {0} is already queued for maintenance")]
    AlreadyInMaintenance(String),

    #[error("no drones in maintenance")]
    MaintenanceQueueEmpty,

    #[error("reservation overlaps an existing booking for drone {drone_id} or pilot {pilot_id}")]
    ReservationOverlap { drone_id: String, pilot_id: String },

    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

impl FleetError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Field name for validation failures, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}
