//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::RoutingService;
use crate::ticket::{IdGenerator, Ledger, TicketIssuer};

/// Shared application state.
///
/// The routing service is read-only; the ledger is the only component
/// that handlers mutate.
#[derive(Clone)]
pub struct AppState {
    /// Trip quoting over the loaded network
    pub routing: Arc<RoutingService>,

    /// Ticket issuer with the configured id source
    pub issuer: Arc<TicketIssuer<Box<dyn IdGenerator>>>,

    /// Append-only ticket store
    pub ledger: Arc<dyn Ledger>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        routing: RoutingService,
        ids: impl IdGenerator + 'static,
        ledger: impl Ledger + 'static,
    ) -> Self {
        Self {
            routing: Arc::new(routing),
            issuer: Arc::new(TicketIssuer::new(Box::new(ids))),
            ledger: Arc::new(ledger),
        }
    }
}
