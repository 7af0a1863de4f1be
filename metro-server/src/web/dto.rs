//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{LineIdx, StationIdx};
use crate::network::Registry;

/// Query for a trip quote.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// Origin station id
    pub origin: String,

    /// Destination station id
    pub destination: String,
}

/// Request to buy a ticket.
#[derive(Debug, Deserialize)]
pub struct TicketRequest {
    /// Origin station id
    pub origin: String,

    /// Destination station id
    pub destination: String,

    /// Optional free-text note printed on the ticket
    #[serde(default)]
    pub note: Option<String>,
}

/// A station with its line membership.
#[derive(Debug, Serialize)]
pub struct StationView {
    pub id: String,
    pub name: String,

    /// Names of the lines serving this station
    pub lines: Vec<String>,

    /// Whether riders can change lines here
    pub is_transfer: bool,
}

impl StationView {
    pub fn new(registry: &Registry, idx: StationIdx) -> Self {
        let station = registry.station(idx);
        Self {
            id: station.id().to_string(),
            name: station.name().to_string(),
            lines: registry
                .line_names(idx)
                .into_iter()
                .map(str::to_string)
                .collect(),
            is_transfer: station.is_transfer_station(),
        }
    }
}

/// Response listing every station.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<StationView>,
}

/// A line with its stations in track order.
#[derive(Debug, Serialize)]
pub struct LineView {
    pub id: String,
    pub name: String,
    pub colour: String,

    /// Station ids in track order
    pub stations: Vec<String>,
}

impl LineView {
    pub fn new(registry: &Registry, idx: LineIdx) -> Self {
        let line = registry.line(idx);
        Self {
            id: line.id().to_string(),
            name: line.name().to_string(),
            colour: line.colour().to_string(),
            stations: line
                .stations()
                .iter()
                .map(|&s| registry.station(s).id().to_string())
                .collect(),
        }
    }
}

/// Response listing every line.
#[derive(Debug, Serialize)]
pub struct LineListResponse {
    pub lines: Vec<LineView>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
