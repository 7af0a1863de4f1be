//! Network graph: the adjacency structure searched by the planner.
//!
//! The graph is an undirected, unweighted multigraph. Two stations that
//! are adjacent on more than one line get one edge per line, and each
//! edge remembers the line that carries it.

use tracing::debug;

use crate::domain::{LineIdx, StationIdx};

use super::Registry;

/// One directed half of a track connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Station reached by crossing this edge.
    pub to: StationIdx,
    /// Line that carries this edge.
    pub line: LineIdx,
}

/// Adjacency lists keyed by station index.
///
/// There is no edit API: the only way to change the graph is to build
/// a new one from a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkGraph {
    adjacency: Vec<Vec<Edge>>,
}

impl NetworkGraph {
    /// Build the graph from a fully loaded registry.
    ///
    /// Lines are walked in registry order and each consecutive pair
    /// inserts A→B then B→A, so per-station edge order is a pure function
    /// of load order.
    pub fn build(registry: &Registry) -> Self {
        let mut adjacency = vec![Vec::new(); registry.station_count()];

        for (line_idx, line) in registry.lines() {
            for (a, b) in line.adjacent_pairs() {
                adjacency[a.0].push(Edge { to: b, line: line_idx });
                adjacency[b.0].push(Edge { to: a, line: line_idx });
            }
        }

        let graph = Self { adjacency };
        debug!(
            stations = graph.station_count(),
            edges = graph.edge_count(),
            "built network graph"
        );
        graph
    }

    /// Edges leaving a station, in insertion order.
    ///
    /// Unknown stations have no edges.
    pub fn edges(&self, station: StationIdx) -> &[Edge] {
        self.adjacency
            .get(station.0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of stations (nodes), including isolated ones.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges. Each track connection counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}
