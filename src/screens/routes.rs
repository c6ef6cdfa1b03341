//! Navigation endpoints: every screen change goes through the guard here.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use super::{nav, render};
use crate::app::AppState;
use crate::error::Error;
use crate::guard::Route;
use crate::session::SessionId;

pub fn screen_routes() -> Router<AppState> {
    Router::new()
        .route("/api/navigate", get(navigate))
        .route("/api/nav", get(nav_bar))
}

#[derive(Deserialize)]
struct NavigateQuery {
    path: String,
}

/// GET /api/navigate?path=/dashboard
///
/// Runs the guard, follows any redirect, and returns the screen the
/// session actually lands on together with the navigation chrome.
async fn navigate(
    State(state): State<AppState>,
    SessionId(id): SessionId,
    Query(query): Query<NavigateQuery>,
) -> Result<impl IntoResponse, Error> {
    let requested = Route::parse(&query.path).ok_or(Error::UnknownRoute(query.path))?;

    let outcome = state.sessions.navigate(id, requested).await?;
    let view = render(outcome.landed, outcome.state, outcome.wizard.as_ref());
    let nav = nav::view(outcome.state, Some(outcome.landed));

    Ok(Json(serde_json::json!({
        "requested": outcome.requested,
        "guard": outcome.decision,
        "landed": outcome.landed,
        "session": outcome.state,
        "nav": nav,
        "view": view,
    })))
}

/// GET /api/nav
async fn nav_bar(
    State(state): State<AppState>,
    SessionId(id): SessionId,
) -> Result<impl IntoResponse, Error> {
    let snapshot = state.sessions.snapshot(id).await?;
    Ok(Json(nav::view(snapshot, None)))
}
