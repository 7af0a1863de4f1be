//! Station and line registry.
//!
//! Stations and lines live in two arenas and refer to each other by index.
//! The builder is the only place membership is mutated, and it updates
//! both sides at once, so a station's line set is always exactly the set
//! of lines whose sequence contains it.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{Line, LineId, LineIdx, NetworkError, Station, StationId, StationIdx};

/// Immutable topology: every station, every line, and their membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    stations: Vec<Station>,
    lines: Vec<Line>,
    station_index: HashMap<StationId, StationIdx>,
    line_index: HashMap<LineId, LineIdx>,
}

impl Registry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Returns the station at the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index was not issued by this registry.
    pub fn station(&self, idx: StationIdx) -> &Station {
        &self.stations[idx.0]
    }

    /// Returns the line at the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index was not issued by this registry.
    pub fn line(&self, idx: LineIdx) -> &Line {
        &self.lines[idx.0]
    }

    /// Look up a station index by its id.
    pub fn resolve(&self, id: &str) -> Option<StationIdx> {
        self.station_index.get(id).copied()
    }

    /// Look up a line index by its id.
    pub fn resolve_line(&self, id: &str) -> Option<LineIdx> {
        self.line_index.get(id).copied()
    }

    /// All stations in load order.
    pub fn stations(&self) -> impl Iterator<Item = (StationIdx, &Station)> {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, s)| (StationIdx(i), s))
    }

    /// All lines in load order.
    pub fn lines(&self) -> impl Iterator<Item = (LineIdx, &Line)> {
        self.lines.iter().enumerate().map(|(i, l)| (LineIdx(i), l))
    }

    /// Names of the lines serving a station, in load order.
    pub fn line_names(&self, station: StationIdx) -> Vec<&str> {
        self.station(station)
            .lines()
            .map(|l| self.line(l).name())
            .collect()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Builder for a [`Registry`].
///
/// Stations must be added before the lines that reference them.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    inner: Registry,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station.
    pub fn add_station(
        &mut self,
        id: StationId,
        name: impl Into<String>,
    ) -> Result<StationIdx, NetworkError> {
        if self.inner.station_index.contains_key(&id) {
            return Err(NetworkError::DuplicateStation(id));
        }

        let idx = StationIdx(self.inner.stations.len());
        self.inner.station_index.insert(id.clone(), idx);
        self.inner.stations.push(Station::new(id, name));
        Ok(idx)
    }

    /// Register a line and its stations in track order.
    ///
    /// Every referenced station must already be registered. The line is
    /// validated in full before anything is recorded, so a rejected line
    /// leaves the builder untouched.
    pub fn add_line<S: AsRef<str>>(
        &mut self,
        id: LineId,
        name: impl Into<String>,
        colour: impl Into<String>,
        stations: &[S],
    ) -> Result<LineIdx, NetworkError> {
        if self.inner.line_index.contains_key(&id) {
            return Err(NetworkError::DuplicateLine(id));
        }

        let mut sequence = Vec::with_capacity(stations.len());
        for station_id in stations {
            let station_id = station_id.as_ref();
            let idx = self
                .inner
                .resolve(station_id)
                .ok_or_else(|| NetworkError::MalformedLine {
                    line: id.clone(),
                    station: station_id.to_string(),
                })?;

            if sequence.last() == Some(&idx) {
                return Err(NetworkError::SelfLoop {
                    line: id,
                    station: self.inner.station(idx).id().clone(),
                });
            }
            sequence.push(idx);
        }

        let line_idx = LineIdx(self.inner.lines.len());
        let mut line = Line::new(id.clone(), name, colour);
        for &station in &sequence {
            line.push_station(station);
            self.inner.stations[station.0].join_line(line_idx);
        }

        trace!(line = %id, stations = sequence.len(), "registered line");

        self.inner.line_index.insert(id, line_idx);
        self.inner.lines.push(line);
        Ok(line_idx)
    }

    /// Finish building.
    pub fn build(self) -> Registry {
        self.inner
    }
}
