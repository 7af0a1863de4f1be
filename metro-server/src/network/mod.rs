//! Transit network model.
//!
//! The registry holds stations and lines; the graph is derived from it
//! once, after loading, and never changes. [`Network`] bundles the two so
//! they cannot drift apart.

mod graph;
mod loader;
mod registry;

pub use graph::{Edge, NetworkGraph};
pub use loader::{LineRecord, LoadError, NetworkRecords, StationRecord, load_file, parse_str};
pub use registry::{Registry, RegistryBuilder};

/// A registry together with the graph built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    registry: Registry,
    graph: NetworkGraph,
}

impl Network {
    /// Build the graph for a fully loaded registry.
    pub fn build(registry: Registry) -> Self {
        let graph = NetworkGraph::build(&registry);
        Self { registry, graph }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }
}

impl From<Registry> for Network {
    fn from(registry: Registry) -> Self {
        Self::build(registry)
    }
}
