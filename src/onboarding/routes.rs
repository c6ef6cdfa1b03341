//! REST endpoints for driving the onboarding wizard.
//!
//! A wizard exists only after the session has navigated to its
//! `/onboarding/{role}` route; otherwise these return 409.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::debug;

use crate::app::AppState;
use crate::error::Error;
use crate::session::SessionId;

/// Build the onboarding routes.
pub fn onboarding_routes() -> Router<AppState> {
    Router::new()
        .route("/api/onboarding", get(get_wizard))
        .route("/api/onboarding/field", post(set_field))
        .route("/api/onboarding/toggle", post(toggle))
        .route("/api/onboarding/next", post(next_step))
        .route("/api/onboarding/previous", post(previous_step))
        .route("/api/onboarding/complete", post(complete))
}

/// GET /api/onboarding
async fn get_wizard(
    State(state): State<AppState>,
    SessionId(id): SessionId,
) -> Result<impl IntoResponse, Error> {
    let ((), wizard) = state.sessions.with_wizard(id, |_| Ok(())).await?;
    Ok(Json(wizard.view()))
}

#[derive(Deserialize)]
struct FieldRequest {
    field: String,
    #[serde(default)]
    value: String,
}

/// POST /api/onboarding/field
async fn set_field(
    State(state): State<AppState>,
    SessionId(id): SessionId,
    Json(body): Json<FieldRequest>,
) -> Result<impl IntoResponse, Error> {
    let FieldRequest { field, value } = body;
    let ((), wizard) = state
        .sessions
        .with_wizard(id, |w| w.set_field(&field, value))
        .await?;
    debug!(session_id = %id, field = %field, "Onboarding field set");
    Ok(Json(wizard.view()))
}

#[derive(Deserialize)]
struct ToggleRequest {
    field: String,
    value: String,
    checked: bool,
}

/// POST /api/onboarding/toggle
async fn toggle(
    State(state): State<AppState>,
    SessionId(id): SessionId,
    Json(body): Json<ToggleRequest>,
) -> Result<impl IntoResponse, Error> {
    let ((), wizard) = state
        .sessions
        .with_wizard(id, |w| w.toggle(&body.field, &body.value, body.checked))
        .await?;
    Ok(Json(wizard.view()))
}

/// POST /api/onboarding/next
async fn next_step(
    State(state): State<AppState>,
    SessionId(id): SessionId,
) -> Result<impl IntoResponse, Error> {
    let (step, wizard) = state.sessions.with_wizard(id, |w| Ok(w.next())).await?;
    debug!(session_id = %id, step, "Onboarding next");
    Ok(Json(wizard.view()))
}

/// POST /api/onboarding/previous
async fn previous_step(
    State(state): State<AppState>,
    SessionId(id): SessionId,
) -> Result<impl IntoResponse, Error> {
    let (step, wizard) = state.sessions.with_wizard(id, |w| Ok(w.previous())).await?;
    debug!(session_id = %id, step, "Onboarding previous");
    Ok(Json(wizard.view()))
}

/// POST /api/onboarding/complete
///
/// On the last step, marks the session onboarded and returns where to go
/// next. Earlier steps get `completed: false` and the unchanged wizard.
async fn complete(
    State(state): State<AppState>,
    SessionId(id): SessionId,
) -> Result<impl IntoResponse, Error> {
    let body = match state.sessions.complete_onboarding(id).await? {
        Ok((completion, session)) => serde_json::json!({
            "completed": true,
            "session": session,
            "navigate_to": completion.navigate_to,
        }),
        Err(wizard) => serde_json::json!({
            "completed": false,
            "wizard": wizard.view(),
        }),
    };
    Ok(Json(body))
}
