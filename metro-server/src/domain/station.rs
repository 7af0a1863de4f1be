//! Station types.

use std::collections::BTreeSet;
use std::fmt;

use super::{LineIdx, StationId};

/// Position of a station in the registry's station arena.
///
/// Indices are only meaningful for the registry that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationIdx(pub usize);

impl fmt::Display for StationIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station in the network.
///
/// Line membership is a derived relation: it is filled in by the registry
/// while lines are registered and is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    id: StationId,
    name: String,
    lines: BTreeSet<LineIdx>,
}

impl Station {
    /// Create a station that belongs to no line yet.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            lines: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> &StationId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lines serving this station, in registry order.
    pub fn lines(&self) -> impl Iterator<Item = LineIdx> + '_ {
        self.lines.iter().copied()
    }

    /// Returns true if the station is served by the given line.
    pub fn is_on_line(&self, line: LineIdx) -> bool {
        self.lines.contains(&line)
    }

    /// Number of lines serving this station.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// A transfer station is one served by more than one line.
    pub fn is_transfer_station(&self) -> bool {
        self.lines.len() > 1
    }

    /// Record membership of a line. Returns false if already a member.
    pub(crate) fn join_line(&mut self, line: LineIdx) -> bool {
        self.lines.insert(line)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
