//! Line types.

use std::fmt;

use super::{LineId, StationIdx};

/// Position of a line in the registry's line arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineIdx(pub usize);

impl fmt::Display for LineIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A line: an ordered sequence of stations in track order.
///
/// The colour is display metadata and plays no part in routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    name: String,
    colour: String,
    stations: Vec<StationIdx>,
}

impl Line {
    /// Create a line with no stations.
    pub fn new(id: LineId, name: impl Into<String>, colour: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            colour: colour.into(),
            stations: Vec::new(),
        }
    }

    pub fn id(&self) -> &LineId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colour(&self) -> &str {
        &self.colour
    }

    /// Stations in track order.
    pub fn stations(&self) -> &[StationIdx] {
        &self.stations
    }

    /// Consecutive station pairs along the track.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (StationIdx, StationIdx)> + '_ {
        self.stations.windows(2).map(|w| (w[0], w[1]))
    }

    /// Position of the first occurrence of a station on this line.
    pub fn position_of(&self, station: StationIdx) -> Option<usize> {
        self.stations.iter().position(|&s| s == station)
    }

    /// Number of stops between two stations on this line.
    ///
    /// Returns `None` if either station is not on the line.
    pub fn stops_between(&self, a: StationIdx, b: StationIdx) -> Option<usize> {
        let a = self.position_of(a)?;
        let b = self.position_of(b)?;
        Some(a.abs_diff(b))
    }

    /// Append a station to the end of the line.
    pub(crate) fn push_station(&mut self, station: StationIdx) {
        self.stations.push(station);
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Line {
        let mut line = Line::new(LineId::parse("R").unwrap(), "Red", "#ff0000");
        for i in [3, 1, 4, 5] {
            line.push_station(StationIdx(i));
        }
        line
    }

    #[test]
    fn accessors() {
        let line = red();
        assert_eq!(line.id().as_str(), "R");
        assert_eq!(line.name(), "Red");
        assert_eq!(line.colour(), "#ff0000");
        assert_eq!(line.stations().len(), 4);
        assert_eq!(format!("{}", line), "Red");
    }

    #[test]
    fn adjacent_pairs_follow_track_order() {
        let pairs: Vec<_> = red().adjacent_pairs().collect();
        assert_eq!(
            pairs,
            vec![
                (StationIdx(3), StationIdx(1)),
                (StationIdx(1), StationIdx(4)),
                (StationIdx(4), StationIdx(5)),
            ]
        );
    }

    #[test]
    fn single_station_line_has_no_pairs() {
        let mut line = Line::new(LineId::parse("S").unwrap(), "Stub", "grey");
        line.push_station(StationIdx(0));
        assert_eq!(line.adjacent_pairs().count(), 0);
    }

    #[test]
    fn position_of() {
        let line = red();
        assert_eq!(line.position_of(StationIdx(3)), Some(0));
        assert_eq!(line.position_of(StationIdx(5)), Some(3));
        assert_eq!(line.position_of(StationIdx(9)), None);
    }

    #[test]
    fn stops_between_is_symmetric() {
        let line = red();
        assert_eq!(line.stops_between(StationIdx(3), StationIdx(5)), Some(3));
        assert_eq!(line.stops_between(StationIdx(5), StationIdx(3)), Some(3));
        assert_eq!(line.stops_between(StationIdx(1), StationIdx(1)), Some(0));
        assert_eq!(line.stops_between(StationIdx(1), StationIdx(9)), None);
    }
}
