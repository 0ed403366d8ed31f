//! Sample fleet loaded into an empty service on startup.

use fleet_core::FleetResult;

use crate::state::AppState;

const DEMO_DRONE_HOURS: [f64; 4] = [20.0, 40.0, 60.0, 80.0];
const DEMO_PILOT_HOURS: [u32; 4] = [80, 60, 40, 20];

/// Populate four drones and four pilots if seeding is enabled and no drones
/// are registered yet.
///
/// Returns `true` when data was added.
pub fn seed_demo_fleet(state: &AppState) -> FleetResult<bool> {
    if !state.config().seed_demo_data {
        tracing::info!("Demo seeding disabled");
        return Ok(false);
    }
    if state.drone_count() > 0 {
        tracing::debug!("Fleet already populated, skipping demo seed");
        return Ok(false);
    }

    for (idx, hours) in DEMO_DRONE_HOURS.iter().enumerate() {
        let n = idx + 1;
        let drone_id = n.to_string();
        state.add_drone(
            &drone_id,
            &format!("Dron {n}"),
            &format!("Fabrica {n}"),
            &format!("Modelo {n}"),
        )?;
        state.set_drone_flight_hours(&drone_id, *hours)?;
    }

    for (idx, hours) in DEMO_PILOT_HOURS.iter().enumerate() {
        let n = idx + 1;
        let pilot_id = n.to_string();
        state.add_pilot(&pilot_id, &format!("Nombre {n}"), &format!("Apellidos {n}"))?;
        state.set_pilot_flight_hours(&pilot_id, *hours)?;
    }

    tracing::info!(
        "Seeded demo fleet with {} drones and {} pilots",
        DEMO_DRONE_HOURS.len(),
        DEMO_PILOT_HOURS.len()
    );
    Ok(true)
}
