//! Server configuration.
//!
//! Read from `METRO_*` environment variables, falling back to defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::Fare;
use crate::planner::FareConfig;

/// Error for an environment variable that is set but unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: &'static str,
}

/// Configuration for the metro server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Network data file (JSON station and line records).
    pub network_path: PathBuf,

    /// Ticket ledger file. Tickets are kept in memory when unset.
    pub ledger_path: Option<PathBuf>,

    /// Fare parameters.
    pub fares: FareConfig,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        bind_addr: SocketAddr,
        network_path: impl Into<PathBuf>,
        ledger_path: Option<PathBuf>,
        fares: FareConfig,
    ) -> Self {
        Self {
            bind_addr,
            network_path: network_path.into(),
            ledger_path,
            fares,
        }
    }

    /// Build a configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Unset or empty variables take their default value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get("METRO_BIND") {
            config.bind_addr = value.trim().parse().map_err(|_| ConfigError {
                var: "METRO_BIND",
                value,
                reason: "expected a socket address such as 127.0.0.1:3000",
            })?;
        }

        if let Some(value) = get("METRO_NETWORK") {
            config.network_path = PathBuf::from(value);
        }

        config.ledger_path = get("METRO_LEDGER").map(PathBuf::from);

        if let Some(value) = get("METRO_BASE_FARE") {
            config.fares.base_fare = parse_pence("METRO_BASE_FARE", value)?;
        }

        if let Some(value) = get("METRO_FARE_PER_STATION") {
            config.fares.fare_per_station = parse_pence("METRO_FARE_PER_STATION", value)?;
        }

        Ok(config)
    }
}

fn parse_pence(var: &'static str, value: String) -> Result<Fare, ConfigError> {
    value
        .trim()
        .parse::<u32>()
        .map(Fare::from_pence)
        .map_err(|_| ConfigError {
            var,
            value,
            reason: "expected a whole number of pence",
        })
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            network_path: PathBuf::from("data/network.json"),
            ledger_path: None,
            fares: FareConfig::default(),
        }
    }
}
