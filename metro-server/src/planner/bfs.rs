//! Shortest-path search over the network graph.
//!
//! Plain breadth-first search: the first path that reaches the destination
//! has the fewest hops. When several paths tie on hop count, the winner is
//! decided by per-station edge order, which follows load order. Transfer
//! count is not considered.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::domain::{LineIdx, StationIdx};
use crate::network::NetworkGraph;

/// Error from path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The destination cannot be reached from the origin
    #[error("no route between stations")]
    NoRoute,

    /// Origin and destination are the same station
    #[error("origin and destination are the same station")]
    Trivial,

    /// A station index outside the graph
    #[error("station index {0} is not in the graph")]
    UnknownStation(StationIdx),
}

/// One hop of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop {
    pub from: StationIdx,
    pub to: StationIdx,
    /// Line carrying the edge that was traversed.
    pub line: LineIdx,
}

/// A route through the network: stations in travel order plus the line
/// used for each hop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stations: Vec<StationIdx>,
    lines: Vec<LineIdx>,
}

impl Route {
    /// Build a route from an origin and the `(line, next station)` steps
    /// taken from it.
    pub fn from_hops(
        origin: StationIdx,
        hops: impl IntoIterator<Item = (LineIdx, StationIdx)>,
    ) -> Self {
        let mut stations = vec![origin];
        let mut lines = Vec::new();
        for (line, station) in hops {
            lines.push(line);
            stations.push(station);
        }
        Self { stations, lines }
    }

    pub fn origin(&self) -> StationIdx {
        self.stations[0]
    }

    pub fn destination(&self) -> StationIdx {
        self.stations[self.stations.len() - 1]
    }

    /// Stations in travel order, origin first.
    pub fn stations(&self) -> &[StationIdx] {
        &self.stations
    }

    /// Number of edges crossed.
    pub fn hop_count(&self) -> usize {
        self.lines.len()
    }

    /// Hops in travel order.
    pub fn hops(&self) -> impl Iterator<Item = Hop> + '_ {
        self.stations
            .windows(2)
            .zip(&self.lines)
            .map(|(pair, &line)| Hop {
                from: pair[0],
                to: pair[1],
                line,
            })
    }
}

/// Find a minimum-hop route from `origin` to `destination`.
///
/// Each station's edges are expanded in stored order and a station is
/// marked visited when first discovered, so the result is deterministic
/// for a given graph.
pub fn find_path(
    graph: &NetworkGraph,
    origin: StationIdx,
    destination: StationIdx,
) -> Result<Route, PathError> {
    let station_count = graph.station_count();
    for station in [origin, destination] {
        if station.0 >= station_count {
            return Err(PathError::UnknownStation(station));
        }
    }
    if origin == destination {
        return Err(PathError::Trivial);
    }

    let mut visited = vec![false; station_count];
    let mut parent: Vec<Option<(StationIdx, LineIdx)>> = vec![None; station_count];
    let mut queue = VecDeque::new();

    visited[origin.0] = true;
    queue.push_back(origin);
    let mut explored = 0usize;

    while let Some(station) = queue.pop_front() {
        explored += 1;

        if station == destination {
            let route = reconstruct(&parent, origin, destination);
            debug!(
                %origin,
                %destination,
                hops = route.hop_count(),
                explored,
                "route found"
            );
            return Ok(route);
        }

        for edge in graph.edges(station) {
            if visited[edge.to.0] {
                continue;
            }
            visited[edge.to.0] = true;
            parent[edge.to.0] = Some((station, edge.line));
            queue.push_back(edge.to);
        }

        trace!(%station, queued = queue.len(), "expanded station");
    }

    debug!(%origin, %destination, explored, "no route found");
    Err(PathError::NoRoute)
}

/// Walk parent links back from the destination.
fn reconstruct(
    parent: &[Option<(StationIdx, LineIdx)>],
    origin: StationIdx,
    destination: StationIdx,
) -> Route {
    let mut steps = Vec::new();
    let mut current = destination;

    while current != origin {
        let Some((previous, line)) = parent[current.0] else {
            break;
        };
        steps.push((line, current));
        current = previous;
    }

    steps.reverse();
    Route::from_hops(origin, steps)
}
