//! Trip planner using BFS search.
//!
//! This module answers the two questions a rider asks: "how do I get from
//! here to there?" and "what will it cost?"
//!
//! The search is breadth-first over the network graph, so routes have the
//! fewest possible hops. The route is then split into per-line segments for
//! rider instructions and priced by hop count.

mod bfs;
mod fare;
mod instructions;
mod service;

pub use bfs::{Hop, PathError, Route, find_path};
pub use fare::FareConfig;
pub use instructions::{InstructionError, Segment, generate, segments};
pub use service::{RoutingError, RoutingService, TripQuote};
