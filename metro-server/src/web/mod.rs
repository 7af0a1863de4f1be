//! Web layer for the metro router.
//!
//! Provides HTTP endpoints for browsing the network, quoting trips and
//! issuing tickets.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
