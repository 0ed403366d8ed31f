//! Server configuration from environment.

use std::env;
use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub bind_addr: IpAddr,
    /// Populate an empty fleet with sample drones and pilots on startup
    pub seed_demo_data: bool,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            bind_addr: IpAddr::from([0, 0, 0, 0]),
            seed_demo_data: true,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            server_port: lookup("FLEET_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.server_port),
            bind_addr: lookup("FLEET_BIND_ADDR")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.bind_addr),
            seed_demo_data: lookup("FLEET_SEED_DEMO")
                .map(|s| parse_flag(&s))
                .unwrap_or(defaults.seed_demo_data),
            log_format: match lookup("FLEET_LOG_FORMAT").as_deref() {
                Some(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
                _ => defaults.log_format,
            },
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
