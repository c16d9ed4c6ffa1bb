//! REST host for planner sessions.
//!
//! Every session owns its own ledger; handlers only ever reach a ledger
//! through the session id in the path.
//!
//! - `POST /sessions[?preset=NAME]` creates a session
//! - `GET /sessions/{id}` recomputes and returns the evaluation
//! - `PUT /sessions/{id}/inputs` replaces the numeric inputs
//! - `POST /sessions/{id}/devices` adds a device, `DELETE` clears the ledger
//! - `DELETE /sessions/{id}/devices/{index}` removes one device
//! - `DELETE /sessions/{id}` ends the session
//! - `GET /catalog/{devices,insulation,sun-hours}` lists the preset tables

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::routing::{delete, get, post, put};

use crate::session::SessionStore;

/// Application state shared across all request handlers.
///
/// The store is behind a single mutex; each request holds it only for the
/// duration of one mutation plus recompute.
#[derive(Default)]
pub struct AppState {
    /// Live sessions keyed by id.
    pub store: Mutex<SessionStore>,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/{id}",
            get(handlers::get_session).delete(handlers::end_session),
        )
        .route("/sessions/{id}/inputs", put(handlers::put_inputs))
        .route(
            "/sessions/{id}/devices",
            post(handlers::add_device).delete(handlers::clear_devices),
        )
        .route(
            "/sessions/{id}/devices/{index}",
            delete(handlers::remove_device),
        )
        .route("/catalog/devices", get(handlers::catalog_devices))
        .route("/catalog/insulation", get(handlers::catalog_insulation))
        .route("/catalog/sun-hours", get(handlers::catalog_sun_hours))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
