//! Time-window rules for flight plan reservations.

use chrono::{DateTime, Duration, Utc};

use crate::error::{FleetError, FleetResult};
use crate::models::Reservation;

/// End of a booking that starts at `start` and lasts `duration_hours`.
///
/// Fails when the end falls outside the representable calendar.
pub fn window_end(start: DateTime<Utc>, duration_hours: u32) -> FleetResult<DateTime<Utc>> {
    start
        .checked_add_signed(Duration::hours(i64::from(duration_hours)))
        .ok_or_else(|| FleetError::validation("duration_hours", "reservation end is out of range"))
}

impl Reservation {
    /// Stored bookings always have a representable end; anything else
    /// saturates to the latest instant.
    pub fn end_time(&self) -> DateTime<Utc> {
        window_end(self.start_time, self.duration_hours).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Half-open overlap: a booking ending exactly when another starts is fine.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start < self.end_time() && end > self.start_time
    }

    /// True when this booking shares the drone or the pilot and the windows overlap.
    pub fn conflicts_with(
        &self,
        drone_id: &str,
        pilot_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> bool {
        (self.drone_id == drone_id || self.pilot_id == pilot_id) && self.overlaps(start, end)
    }
}
