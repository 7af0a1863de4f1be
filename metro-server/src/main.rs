use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_server::config::ServerConfig;
use metro_server::network::{Network, load_file};
use metro_server::planner::RoutingService;
use metro_server::ticket::{JsonLinesLedger, MemoryLedger, TimestampIdGenerator};
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        error!(error = %e, "invalid configuration");
        std::process::exit(1);
    });

    // A broken network file is a data defect: refuse to start
    let registry = load_file(&config.network_path).unwrap_or_else(|e| {
        error!(path = %config.network_path.display(), error = %e, "failed to load network");
        std::process::exit(1);
    });
    let network = Arc::new(Network::build(registry));
    let routing = RoutingService::new(network, config.fares);

    let ids = TimestampIdGenerator::new();
    let state = match &config.ledger_path {
        Some(path) => {
            let ledger = JsonLinesLedger::open(path).unwrap_or_else(|e| {
                error!(path = %path.display(), error = %e, "failed to open ticket ledger");
                std::process::exit(1);
            });
            info!(path = %ledger.path().display(), "recording tickets to file");
            AppState::new(routing, ids, ledger)
        }
        None => {
            info!("METRO_LEDGER not set, tickets are kept in memory");
            AppState::new(routing, ids, MemoryLedger::new())
        }
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .unwrap_or_else(|e| {
            error!(addr = %config.bind_addr, error = %e, "failed to bind");
            std::process::exit(1);
        });

    info!(addr = %config.bind_addr, "Metro router listening");
    info!("  GET  /health");
    info!("  GET  /api/stations[/:id]");
    info!("  GET  /api/lines");
    info!("  GET  /api/quote?origin=&destination=");
    info!("  GET  /api/tickets");
    info!("  POST /api/tickets");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        std::process::exit(1);
    }
}
