//! Rider instructions for a route.
//!
//! A route is split into segments, maximal runs of hops on one line. The
//! line of each hop comes from the edge the search actually traversed, so
//! two stations that share several lines still produce a single,
//! predictable instruction set.

use crate::domain::{LineIdx, StationIdx};
use crate::network::Registry;

use super::bfs::Route;

/// Error from instruction generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InstructionError {
    /// A route must cross at least one edge
    #[error("route must visit at least two stations")]
    TooShort,
}

/// A maximal run of consecutive hops on the same line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub line: LineIdx,
    pub from: StationIdx,
    pub to: StationIdx,
    /// Hops within the segment.
    pub stops: usize,
}

/// Split a route into segments. A new segment starts exactly where the
/// line changes.
pub fn segments(route: &Route) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for hop in route.hops() {
        match segments.last_mut() {
            Some(current) if current.line == hop.line => {
                current.to = hop.to;
                current.stops += 1;
            }
            _ => segments.push(Segment {
                line: hop.line,
                from: hop.from,
                to: hop.to,
                stops: 1,
            }),
        }
    }

    segments
}

/// Generate the instruction lines for a route.
///
/// ```text
/// Board <line> at <station>
/// Travel <N> stop(s) on <line> to <station>
/// Transfer to <line> at <station>
/// Travel <N> stop(s) on <line> to <station>
/// ```
pub fn generate(registry: &Registry, route: &Route) -> Result<Vec<String>, InstructionError> {
    let segments = segments(route);
    if segments.is_empty() {
        return Err(InstructionError::TooShort);
    }

    let mut instructions = Vec::with_capacity(segments.len() * 2);
    for (i, segment) in segments.iter().enumerate() {
        let line = registry.line(segment.line).name();
        let from = registry.station(segment.from).name();
        let to = registry.station(segment.to).name();

        if i == 0 {
            instructions.push(format!("Board {line} at {from}"));
        } else {
            instructions.push(format!("Transfer to {line} at {from}"));
        }
        instructions.push(format!(
            "Travel {} stop(s) on {line} to {to}",
            segment.stops
        ));
    }

    Ok(instructions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineId, StationId};

    /// Registry whose station and line names equal their ids.
    fn registry(stations: &[&str], lines: &[(&str, &[&str])]) -> Registry {
        let mut b = Registry::builder();
        for s in stations {
            b.add_station(StationId::parse(*s).unwrap(), *s).unwrap();
        }
        for (id, seq) in lines {
            b.add_line(LineId::parse(*id).unwrap(), *id, "none", *seq)
                .unwrap();
        }
        b.build()
    }

    fn route(reg: &Registry, origin: &str, steps: &[(&str, &str)]) -> Route {
        Route::from_hops(
            reg.resolve(origin).unwrap(),
            steps
                .iter()
                .map(|(line, to)| (reg.resolve_line(line).unwrap(), reg.resolve(to).unwrap())),
        )
    }

    #[test]
    fn single_line_route() {
        let reg = registry(&["A", "B", "C"], &[("Red", &["A", "B", "C"])]);
        let r = route(&reg, "A", &[("Red", "B"), ("Red", "C")]);

        assert_eq!(
            generate(&reg, &r).unwrap(),
            vec!["Board Red at A", "Travel 2 stop(s) on Red to C"]
        );
    }

    #[test]
    fn one_transfer() {
        let reg = registry(
            &["A", "B", "C"],
            &[("Red", &["A", "B"]), ("Blue", &["B", "C"])],
        );
        let r = route(&reg, "A", &[("Red", "B"), ("Blue", "C")]);

        assert_eq!(
            generate(&reg, &r).unwrap(),
            vec![
                "Board Red at A",
                "Travel 1 stop(s) on Red to B",
                "Transfer to Blue at B",
                "Travel 1 stop(s) on Blue to C",
            ]
        );
    }

    #[test]
    fn uses_traversed_line_when_stations_share_several() {
        // A and B are adjacent on both Red and Blue.
        let reg = registry(
            &["A", "B", "C"],
            &[("Red", &["A", "B", "C"]), ("Blue", &["A", "B"])],
        );

        let via_blue = route(&reg, "A", &[("Blue", "B"), ("Red", "C")]);
        assert_eq!(
            generate(&reg, &via_blue).unwrap(),
            vec![
                "Board Blue at A",
                "Travel 1 stop(s) on Blue to B",
                "Transfer to Red at B",
                "Travel 1 stop(s) on Red to C",
            ]
        );

        let via_red = route(&reg, "A", &[("Red", "B"), ("Red", "C")]);
        assert_eq!(
            generate(&reg, &via_red).unwrap(),
            vec!["Board Red at A", "Travel 2 stop(s) on Red to C"]
        );
    }

    #[test]
    fn segment_per_line_change() {
        let reg = registry(
            &["A", "B", "C", "D"],
            &[("Red", &["A", "B"]), ("Blue", &["B", "C"]), ("Green", &["C", "D"])],
        );
        let r = route(&reg, "A", &[("Red", "B"), ("Blue", "C"), ("Green", "D")]);

        let segs = segments(&r);
        assert_eq!(segs.len(), 3);
        assert!(segs.windows(2).all(|w| w[0].line != w[1].line));
        assert_eq!(segs.iter().map(|s| s.stops).sum::<usize>(), r.hop_count());

        let lines = generate(&reg, &r).unwrap();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4], "Transfer to Green at C");
    }

    #[test]
    fn uses_display_names() {
        let mut b = Registry::builder();
        b.add_station(StationId::parse("KGX").unwrap(), "King's Cross")
            .unwrap();
        b.add_station(StationId::parse("EUS").unwrap(), "Euston")
            .unwrap();
        b.add_line(LineId::parse("VIC").unwrap(), "Victoria", "#0098d4", &["KGX", "EUS"])
            .unwrap();
        let reg = b.build();

        let r = route(&reg, "KGX", &[("VIC", "EUS")]);
        assert_eq!(
            generate(&reg, &r).unwrap(),
            vec!["Board Victoria at King's Cross", "Travel 1 stop(s) on Victoria to Euston"]
        );
    }

    #[test]
    fn single_station_route_rejected() {
        let reg = registry(&["A"], &[]);
        let r = route(&reg, "A", &[]);
        assert_eq!(generate(&reg, &r).unwrap_err(), InstructionError::TooShort);
        assert!(segments(&r).is_empty());
    }
}
