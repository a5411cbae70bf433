//! `api` crate — HTTP surface over the procedure gateway.
//!
//! Exposes:
//!   POST /etl/run     — run the payments import
//!   POST /etl/commit  — commit the prepared transfer
//!   GET  /healthz     — liveness probe
//!
//! The POST routes carry no payload: the operation is fixed per route, so
//! success is an empty 200 and any gateway failure an empty 500. This is
//! an internal administrative surface; it carries no auth of its own.

pub mod error;
pub mod handlers;

pub use error::ApiError;
pub use handlers::AppState;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use gateway::ProcedureGateway;

/// Build the application router over the given gateway.
pub fn router(gateway: Arc<ProcedureGateway>) -> Router {
    let state = AppState { gateway };

    Router::new()
        .route("/etl/run", post(handlers::etl::run_import))
        .route("/etl/commit", post(handlers::etl::commit_transfer))
        .route("/healthz", get(handlers::health::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `bind` and serve the API until the process is stopped.
pub async fn serve(bind: &str, gateway: Arc<ProcedureGateway>) -> Result<(), ApiError> {
    let app = router(gateway);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("API server listening on {bind}");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod router_tests;
