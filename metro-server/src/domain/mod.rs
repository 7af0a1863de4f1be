//! Domain types for the metro router.
//!
//! This module contains the core domain model types that represent
//! validated network data. Identifiers enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod error;
mod fare;
mod ids;
mod line;
mod station;

pub use error::NetworkError;
pub use fare::Fare;
pub use ids::{InvalidId, LineId, StationId};
pub use line::{Line, LineIdx};
pub use station::{Station, StationIdx};
