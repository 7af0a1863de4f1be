//! Network data loading.
//!
//! Reads station and line records from JSON and turns them into a
//! [`Registry`]. All stations are registered before any line, so line
//! records may appear in any order relative to the stations they use.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{LineId, NetworkError, StationId};

use super::Registry;

/// A station record as it appears in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: String,
    pub name: String,
}

/// A line record as it appears in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub colour: String,
    /// Station ids in track order.
    pub stations: Vec<String>,
}

/// The complete contents of a network data file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRecords {
    pub stations: Vec<StationRecord>,
    pub lines: Vec<LineRecord>,
}

/// Errors from loading network data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading the file failed
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid network JSON
    #[error("invalid network JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The records describe an inconsistent network
    #[error("invalid network data: {0}")]
    Network(#[from] NetworkError),
}

impl NetworkRecords {
    /// Build a registry from these records.
    pub fn into_registry(self) -> Result<Registry, NetworkError> {
        let mut builder = Registry::builder();

        for station in self.stations {
            builder.add_station(StationId::parse(station.id)?, station.name)?;
        }
        for line in self.lines {
            builder.add_line(
                LineId::parse(line.id)?,
                line.name,
                line.colour,
                line.stations.as_slice(),
            )?;
        }

        Ok(builder.build())
    }
}

/// Parse network records from a JSON string and build a registry.
pub fn parse_str(json: &str) -> Result<Registry, LoadError> {
    let records: NetworkRecords = serde_json::from_str(json)?;
    Ok(records.into_registry()?)
}

/// Load a registry from a JSON file on disk.
pub fn load_file(path: impl AsRef<Path>) -> Result<Registry, LoadError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let registry = parse_str(&contents)?;

    info!(
        path = %path.display(),
        stations = registry.station_count(),
        lines = registry.line_count(),
        "loaded network"
    );

    Ok(registry)
}
