//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use tracing::{error, info, warn};

use crate::planner::{RoutingError, TripQuote};
use crate::ticket::{LedgerError, Ticket};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/:id", get(get_station))
        .route("/api/lines", get(list_lines))
        .route("/api/quote", get(quote_trip))
        .route("/api/tickets", get(list_tickets).post(issue_ticket))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station in load order.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let registry = state.routing.network().registry();
    let stations = registry
        .stations()
        .map(|(idx, _)| StationView::new(registry, idx))
        .collect();

    Json(StationListResponse { stations })
}

/// Look up one station by id.
async fn get_station(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StationView>, AppError> {
    let registry = state.routing.network().registry();
    let idx = registry.resolve(&id).ok_or_else(|| AppError::NotFound {
        message: format!("unknown station: {id}"),
    })?;

    Ok(Json(StationView::new(registry, idx)))
}

/// List every line with its stations in track order.
async fn list_lines(State(state): State<AppState>) -> Json<LineListResponse> {
    let registry = state.routing.network().registry();
    let lines = registry
        .lines()
        .map(|(idx, _)| LineView::new(registry, idx))
        .collect();

    Json(LineListResponse { lines })
}

/// Quote a trip without issuing a ticket.
async fn quote_trip(
    State(state): State<AppState>,
    query: Result<Query<QuoteRequest>, QueryRejection>,
) -> Result<Json<TripQuote>, AppError> {
    let Query(req) = query?;
    let quote = state.routing.quote_trip(&req.origin, &req.destination)?;
    Ok(Json(quote))
}

/// Quote a trip, issue a ticket for it and record it in the ledger.
async fn issue_ticket(
    State(state): State<AppState>,
    body: Result<Json<TicketRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Ticket>), AppError> {
    let Json(req) = body?;
    let quote = state.routing.quote_trip(&req.origin, &req.destination)?;
    let ticket = state.issuer.issue(&quote, req.note, Utc::now());
    state.ledger.append(&ticket)?;

    info!(
        ticket = %ticket.id(),
        origin = %ticket.origin(),
        destination = %ticket.destination(),
        price = %ticket.price(),
        "issued ticket"
    );

    Ok((StatusCode::CREATED, Json(ticket)))
}

/// Every ticket issued so far.
async fn list_tickets(State(state): State<AppState>) -> Result<Json<Vec<Ticket>>, AppError> {
    Ok(Json(state.ledger.tickets()?))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<RoutingError> for AppError {
    fn from(e: RoutingError) -> Self {
        match e {
            RoutingError::SameStation(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            RoutingError::StationNotFound(_) | RoutingError::NoRouteFound { .. } => {
                AppError::NotFound {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(e: LedgerError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

// Extractor rejections are reported as JSON errors like any other
impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
