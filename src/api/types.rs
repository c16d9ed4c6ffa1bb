//! API response and query types.

use axum::Json;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::devices::Device;
use crate::session::{Evaluation, PlannerInputs, SessionId};

/// Query parameters for session creation.
#[derive(Debug, Deserialize)]
pub struct CreateSessionQuery {
    /// Planner preset to start from (default `weekender`).
    pub preset: Option<String>,
}

/// Response to session creation.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: SessionId,
}

/// Full state of one session after a recompute pass.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: SessionId,
    pub inputs: PlannerInputs,
    pub devices: Vec<Device>,
    pub evaluation: Evaluation,
    /// Autarky as rendered text, `"–"` for an empty ledger.
    pub autarky_display: String,
}

/// Error response body for 4xx/5xx errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}
