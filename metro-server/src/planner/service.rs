//! Trip quoting.
//!
//! Composes station lookup, path search, instruction generation and fare
//! calculation into a single request. The service never writes anything;
//! turning a quote into a ticket and persisting it is up to the caller.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::{Fare, StationId, StationIdx};
use crate::network::Network;

use super::bfs::{PathError, find_path};
use super::fare::FareConfig;
use super::instructions::{InstructionError, generate};

/// Error from quoting a trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    /// The id does not name a station in the network
    #[error("unknown station: {0}")]
    StationNotFound(String),

    /// Origin and destination are the same station
    #[error("origin and destination are both {0}")]
    SameStation(StationId),

    /// The two stations are in disconnected parts of the network
    #[error("no route from {origin} to {destination}")]
    NoRouteFound {
        origin: StationId,
        destination: StationId,
    },
}

/// Everything the rider needs to be told and charged for a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripQuote {
    pub origin: StationId,
    pub destination: StationId,
    /// Station ids along the route, origin first.
    pub stations: Vec<StationId>,
    pub hops: usize,
    pub price: Fare,
    pub instructions: Vec<String>,
}

/// Quotes trips against a shared, immutable network.
#[derive(Debug, Clone)]
pub struct RoutingService {
    network: Arc<Network>,
    fares: FareConfig,
}

impl RoutingService {
    /// Create a new routing service.
    pub fn new(network: Arc<Network>, fares: FareConfig) -> Self {
        Self { network, fares }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn fares(&self) -> &FareConfig {
        &self.fares
    }

    /// Quote a trip between two station ids.
    pub fn quote_trip(
        &self,
        origin_id: &str,
        destination_id: &str,
    ) -> Result<TripQuote, RoutingError> {
        let origin = self.resolve(origin_id)?;
        let destination = self.resolve(destination_id)?;

        let registry = self.network.registry();
        let origin_id = registry.station(origin).id().clone();
        let destination_id = registry.station(destination).id().clone();

        if origin == destination {
            return Err(RoutingError::SameStation(origin_id));
        }

        let route = find_path(self.network.graph(), origin, destination).map_err(|e| match e {
            PathError::NoRoute => RoutingError::NoRouteFound {
                origin: origin_id.clone(),
                destination: destination_id.clone(),
            },
            PathError::Trivial => RoutingError::SameStation(origin_id.clone()),
            PathError::UnknownStation(idx) => RoutingError::StationNotFound(idx.to_string()),
        })?;

        let instructions = generate(registry, &route).map_err(|e| match e {
            // Only a zero-hop route is too short to describe
            InstructionError::TooShort => RoutingError::SameStation(origin_id.clone()),
        })?;

        let hops = route.hop_count();
        let price = self.fares.price(hops);

        debug!(
            origin = %origin_id,
            destination = %destination_id,
            hops,
            %price,
            "quoted trip"
        );

        Ok(TripQuote {
            stations: route
                .stations()
                .iter()
                .map(|&s| registry.station(s).id().clone())
                .collect(),
            origin: origin_id,
            destination: destination_id,
            hops,
            price,
            instructions,
        })
    }

    fn resolve(&self, id: &str) -> Result<StationIdx, RoutingError> {
        self.network
            .registry()
            .resolve(id)
            .ok_or_else(|| RoutingError::StationNotFound(id.to_string()))
    }
}
