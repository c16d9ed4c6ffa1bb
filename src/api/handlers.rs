//! Request handlers for the API endpoints.

use std::sync::{Arc, MutexGuard};

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use super::AppState;
use super::types::{
    ApiError, CreateSessionQuery, CreatedResponse, SessionView, api_error,
};
use crate::catalog::{
    DEVICE_PRESETS, DevicePreset, INSULATION_CLASSES, InsulationClass, SUN_HOURS, SunHoursProfile,
};
use crate::config::{DeviceEntry, PlannerConfig, validate_inputs};
use crate::session::{HeatingReport, PlannerInputs, Session, SessionId, SessionStore};

fn lock_store(state: &AppState) -> Result<MutexGuard<'_, SessionStore>, ApiError> {
    state
        .store
        .lock()
        .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, "session store poisoned"))
}

fn not_found(id: SessionId) -> ApiError {
    api_error(StatusCode::NOT_FOUND, format!("no session {id}"))
}

/// Recomputes and packages a session for the response body.
fn view(id: SessionId, session: &Session) -> Result<Json<SessionView>, ApiError> {
    let evaluation = session
        .recompute()
        .map_err(|e| api_error(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;
    let autarky_display = evaluation.balance.autarky_display();
    Ok(Json(SessionView {
        id,
        inputs: *session.inputs(),
        devices: session.ledger().list().to_vec(),
        evaluation,
        autarky_display,
    }))
}

/// `POST /sessions[?preset=NAME]` → 201 + `{ "id": N }`
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CreateSessionQuery>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let preset = query.preset.as_deref().unwrap_or("weekender");
    let config = PlannerConfig::from_preset(preset)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;
    let session = config.into_session().map_err(|errors| {
        let joined: Vec<String> = errors.iter().map(ToString::to_string).collect();
        api_error(StatusCode::INTERNAL_SERVER_ERROR, joined.join("; "))
    })?;

    let id = lock_store(&state)?.create(session);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// `GET /sessions/{id}` → 200 + `SessionView`
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<SessionId>,
) -> Result<Json<SessionView>, ApiError> {
    let store = lock_store(&state)?;
    let session = store.get(id).ok_or_else(|| not_found(id))?;
    view(id, session)
}

/// `DELETE /sessions/{id}` → 204
pub async fn end_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<SessionId>,
) -> Result<StatusCode, ApiError> {
    lock_store(&state)?
        .end(id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| not_found(id))
}

/// `PUT /sessions/{id}/inputs` → 200 + `SessionView`
///
/// 400 on out-of-range values, 422 if the heating calculation rejects the
/// inputs. Rejected inputs are never stored.
pub async fn put_inputs(
    State(state): State<Arc<AppState>>,
    Path(id): Path<SessionId>,
    Json(inputs): Json<PlannerInputs>,
) -> Result<Json<SessionView>, ApiError> {
    let errors = validate_inputs(&inputs);
    if !errors.is_empty() {
        let joined: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(api_error(StatusCode::BAD_REQUEST, joined.join("; ")));
    }
    HeatingReport::compute(&inputs)
        .map_err(|e| api_error(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    let mut store = lock_store(&state)?;
    let session = store.get_mut(id).ok_or_else(|| not_found(id))?;
    session.set_inputs(inputs);
    view(id, session)
}

/// `POST /sessions/{id}/devices` → 201 + `SessionView`, 400 on rejection
///
/// Body is a device entry: `{"preset": "laptop"}` or
/// `{"name": "...", "power_watts": 10, "hours_per_day": 2}`.
pub async fn add_device(
    State(state): State<Arc<AppState>>,
    Path(id): Path<SessionId>,
    Json(entry): Json<DeviceEntry>,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let device = entry
        .resolve("device")
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;

    let mut store = lock_store(&state)?;
    let session = store.get_mut(id).ok_or_else(|| not_found(id))?;
    session
        .ledger_mut()
        .push(device)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;
    Ok((StatusCode::CREATED, view(id, session)?))
}

/// `DELETE /sessions/{id}/devices` → 200 + `SessionView` with an empty ledger
pub async fn clear_devices(
    State(state): State<Arc<AppState>>,
    Path(id): Path<SessionId>,
) -> Result<Json<SessionView>, ApiError> {
    let mut store = lock_store(&state)?;
    let session = store.get_mut(id).ok_or_else(|| not_found(id))?;
    session.ledger_mut().clear();
    view(id, session)
}

/// `DELETE /sessions/{id}/devices/{index}` → 200 + `SessionView`
pub async fn remove_device(
    State(state): State<Arc<AppState>>,
    Path((id, index)): Path<(SessionId, usize)>,
) -> Result<Json<SessionView>, ApiError> {
    let mut store = lock_store(&state)?;
    let session = store.get_mut(id).ok_or_else(|| not_found(id))?;
    session.ledger_mut().remove(index).ok_or_else(|| {
        api_error(
            StatusCode::NOT_FOUND,
            format!("session {id} has no device at index {index}"),
        )
    })?;
    view(id, session)
}

/// `GET /catalog/devices`
pub async fn catalog_devices() -> Json<&'static [DevicePreset]> {
    Json(DEVICE_PRESETS)
}

/// `GET /catalog/insulation`
pub async fn catalog_insulation() -> Json<&'static [InsulationClass]> {
    Json(INSULATION_CLASSES)
}

/// `GET /catalog/sun-hours`
pub async fn catalog_sun_hours() -> Json<&'static [SunHoursProfile]> {
    Json(SUN_HOURS)
}
