//! Fleet SDK client for the REST API.

use anyhow::{Context, Result};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use fleet_core::{Drone, FleetSummary, Pilot, Reservation, ReservationRequest};

/// Client for connecting to the fleet server.
#[derive(Debug, Clone)]
pub struct FleetClient {
    base_url: Url,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct DroneHoursRequest {
    flight_hours: f64,
}

#[derive(Debug, Serialize)]
struct PilotHoursRequest {
    flight_hours: u32,
}

impl FleetClient {
    /// Create a new client for a server such as `http://localhost:8080`.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid base URL '{}'", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Base URL '{}' cannot carry a path", base_url);
        }
        Ok(Self {
            base_url,
            client: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL; each segment is percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| body["error"].as_str().map(str::to_string))
                .unwrap_or_else(|| "request failed".to_string());
            anyhow::bail!("{} ({})", message, status);
        }
        Ok(response.json().await?)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.url(segments)?;
        tracing::debug!("GET {}", url);
        Self::decode(self.client.get(url).send().await?).await
    }

    async fn post<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.url(segments)?;
        tracing::debug!("POST {}", url);
        Self::decode(self.client.post(url).send().await?).await
    }

    /// Check the server is up.
    pub async fn health(&self) -> Result<bool> {
        let response = self.client.get(self.url(&["health"])?).send().await?;
        Ok(response.status().is_success())
    }

    pub async fn summary(&self) -> Result<FleetSummary> {
        self.get(&["dron", "summary"]).await
    }

    // ========== DRONES ==========

    pub async fn add_drone(
        &self,
        drone_id: &str,
        name: &str,
        manufacturer: &str,
        model: &str,
    ) -> Result<Drone> {
        self.post(&["dron", "drons", drone_id, name, manufacturer, model])
            .await
    }

    pub async fn drone(&self, drone_id: &str) -> Result<Drone> {
        self.get(&["dron", "drons", drone_id]).await
    }

    pub async fn drones_by_flight_hours(&self) -> Result<Vec<Drone>> {
        self.get(&["dron", "drons", "ordered"]).await
    }

    pub async fn set_drone_flight_hours(&self, drone_id: &str, hours: f64) -> Result<Drone> {
        let url = self.url(&["dron", "drons", drone_id, "hours"])?;
        let response = self
            .client
            .put(url)
            .json(&DroneHoursRequest {
                flight_hours: hours,
            })
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn reservations_for_drone(&self, drone_id: &str) -> Result<Vec<Reservation>> {
        self.get(&["dron", "drons", drone_id, "reservations"]).await
    }

    // ========== PILOTS ==========

    pub async fn add_pilot(&self, pilot_id: &str, name: &str, surname: &str) -> Result<Pilot> {
        self.post(&["dron", "pilots", pilot_id, name, surname]).await
    }

    pub async fn pilot(&self, pilot_id: &str) -> Result<Pilot> {
        self.get(&["dron", "pilots", pilot_id]).await
    }

    pub async fn pilots_by_flight_hours(&self) -> Result<Vec<Pilot>> {
        self.get(&["dron", "pilots", "ordered"]).await
    }

    pub async fn set_pilot_flight_hours(&self, pilot_id: &str, hours: u32) -> Result<Pilot> {
        let url = self.url(&["dron", "pilots", pilot_id, "hours"])?;
        let response = self
            .client
            .put(url)
            .json(&PilotHoursRequest {
                flight_hours: hours,
            })
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn reservations_for_pilot(&self, pilot_id: &str) -> Result<Vec<Reservation>> {
        self.get(&["dron", "pilots", pilot_id, "reservations"]).await
    }

    // ========== MAINTENANCE ==========

    pub async fn store_in_maintenance(&self, drone_id: &str) -> Result<Drone> {
        self.post(&["dron", "drons", drone_id, "maintenance"]).await
    }

    /// Repair the drone at the front of the maintenance queue.
    pub async fn repair_next(&self) -> Result<Drone> {
        self.post(&["dron", "maintenance", "repair"]).await
    }

    pub async fn maintenance_queue(&self) -> Result<Vec<Drone>> {
        self.get(&["dron", "maintenance"]).await
    }

    // ========== RESERVATIONS ==========

    pub async fn reserve(&self, request: &ReservationRequest) -> Result<Reservation> {
        let url = self.url(&["dron", "reservations"])?;
        let response = self.client.post(url).json(request).send().await?;
        Self::decode(response).await
    }

    pub async fn reservations(&self) -> Result<Vec<Reservation>> {
        self.get(&["dron", "reservations"]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls() {
        let client = FleetClient::new("http://localhost:8080").unwrap();
        let url = client.url(&["dron", "drons", "ordered"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/dron/drons/ordered");
    }

    #[test]
    fn keeps_base_path_prefix() {
        let client = FleetClient::new("http://fleet.local/api/").unwrap();
        let url = client.url(&["dron", "summary"]).unwrap();
        assert_eq!(url.as_str(), "http://fleet.local/api/dron/summary");
    }

    #[test]
    fn encodes_path_segments() {
        let client = FleetClient::new("http://localhost:8080").unwrap();
        let url = client
            .url(&["dron", "drons", "D 1", "Dron 1", "Fab/1", "Mod"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/dron/drons/D%201/Dron%201/Fab%2F1/Mod"
        );
    }

    #[test]
    fn rejects_bad_base_url() {
        assert!(FleetClient::new("not a url").is_err());
        assert!(FleetClient::new("mailto:ops@example.com").is_err());
    }
}
