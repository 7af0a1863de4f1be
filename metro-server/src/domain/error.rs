//! Domain error types.
//!
//! These errors describe defects in the network data itself. They are
//! raised while the registry is being built and abort startup.

use super::{InvalidId, LineId, StationId};

/// Construction-time errors for the station/line registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A line references a station that was never registered
    #[error("line {line} references unknown station {station}")]
    MalformedLine { line: LineId, station: String },

    /// The same station appears twice in a row on a line
    #[error("line {line} lists station {station} twice in a row")]
    SelfLoop { line: LineId, station: StationId },

    /// Two station records share an id
    #[error("duplicate station id: {0}")]
    DuplicateStation(StationId),

    /// Two line records share an id
    #[error("duplicate line id: {0}")]
    DuplicateLine(LineId),

    /// A record carries an unusable identifier
    #[error(transparent)]
    InvalidId(#[from] InvalidId),
}
