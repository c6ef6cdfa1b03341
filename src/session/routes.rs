//! REST and WebSocket endpoints for session role state.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use super::extract::SessionId;
use super::state::{Role, SessionCommand};
use super::store::{SessionEvent, SessionStore};
use crate::app::AppState;
use crate::error::{Error, SessionError};
use crate::guard::Route;

/// Session routes, to be merged into the app router.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/session",
            post(open_session).get(get_session).delete(close_session),
        )
        .route("/api/session/command", post(apply_command))
        .route("/api/session/role", post(select_role))
        .route("/api/session/logout", post(logout))
        .route("/ws/session", get(ws_handler))
}

/// POST /api/session
async fn open_session(State(state): State<AppState>) -> impl IntoResponse {
    let info = state.sessions.open().await;
    (StatusCode::CREATED, Json(info))
}

/// GET /api/session
async fn get_session(
    State(state): State<AppState>,
    SessionId(id): SessionId,
) -> Result<impl IntoResponse, Error> {
    let info = state.sessions.info(id).await?;
    Ok(Json(info))
}

/// DELETE /api/session
async fn close_session(
    State(state): State<AppState>,
    SessionId(id): SessionId,
) -> Result<impl IntoResponse, Error> {
    if state.sessions.close(id).await {
        Ok(Json(serde_json::json!({"status": "closed"})))
    } else {
        Err(SessionError::NotFound(id.to_string()).into())
    }
}

/// POST /api/session/command
///
/// Applies any [`SessionCommand`] and returns the new snapshot.
async fn apply_command(
    State(state): State<AppState>,
    SessionId(id): SessionId,
    Json(command): Json<SessionCommand>,
) -> Result<impl IntoResponse, Error> {
    let snapshot = state.sessions.apply(id, command).await?;
    Ok(Json(snapshot))
}

#[derive(Deserialize)]
struct RoleRequest {
    role: Role,
}

/// POST /api/session/role
///
/// The role selection screen: sets the role and points the client at that
/// role's onboarding.
async fn select_role(
    State(state): State<AppState>,
    SessionId(id): SessionId,
    Json(body): Json<RoleRequest>,
) -> Result<impl IntoResponse, Error> {
    let snapshot = state
        .sessions
        .apply(id, SessionCommand::SetRole { role: body.role })
        .await?;
    let navigate_to = if body.role.is_set() {
        Route::Onboarding(body.role)
    } else {
        Route::RoleSelection
    };
    Ok(Json(serde_json::json!({
        "session": snapshot,
        "navigate_to": navigate_to,
    })))
}

/// POST /api/session/logout
async fn logout(
    State(state): State<AppState>,
    SessionId(id): SessionId,
) -> Result<impl IntoResponse, Error> {
    let snapshot = state.sessions.apply(id, SessionCommand::Logout).await?;
    Ok(Json(serde_json::json!({
        "session": snapshot,
        "navigate_to": Route::RoleSelection,
    })))
}

// ── WebSocket ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WsQuery {
    session_id: String,
}

/// GET /ws/session?session_id=...
///
/// Browsers cannot set headers on a WebSocket upgrade, so the session id
/// travels in the query string here.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Query(query): Query<WsQuery>,
) -> Response {
    let id = match SessionId::parse(&query.session_id) {
        Ok(SessionId(id)) => id,
        Err(e) => return Error::from(e).into_response(),
    };
    if let Err(e) = state.sessions.snapshot(id).await {
        return Error::from(e).into_response();
    }
    info!(session_id = %id, "Session WebSocket client connecting");
    ws.on_upgrade(move |socket| handle_socket(socket, state.sessions, id))
}

async fn handle_socket(
    mut socket: WebSocket,
    sessions: std::sync::Arc<SessionStore>,
    session_id: uuid::Uuid,
) {
    // Subscribe before reading the snapshot so no update slips between.
    let mut rx = sessions.subscribe();

    let Ok(current) = sessions.snapshot(session_id).await else {
        return;
    };
    let sync = SessionEvent::SessionUpdate {
        session_id,
        state: current,
    };
    if send_event(&mut socket, &sync).await.is_err() {
        warn!("Failed to send initial session snapshot, client disconnected");
        return;
    }

    loop {
        tokio::select! {
            result = rx.recv() => {
                match result {
                    Ok(event) if event.session_id() == session_id => {
                        if send_event(&mut socket, &event).await.is_err() {
                            debug!("Client disconnected during send");
                            break;
                        }
                        if matches!(event, SessionEvent::SessionClosed { .. }) {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(RecvError::Lagged(n)) => {
                        warn!(missed = n, "Session WS client lagged behind broadcast");
                        let Ok(state) = sessions.snapshot(session_id).await else {
                            break;
                        };
                        let resync = SessionEvent::SessionUpdate { session_id, state };
                        if send_event(&mut socket, &resync).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Closed) => {
                        debug!("Broadcast channel closed");
                        break;
                    }
                }
            }

            result = socket.recv() => {
                match result {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        info!(session_id = %session_id, "Session WebSocket client disconnected");
                        break;
                    }
                    Some(Err(e)) => {
                        warn!(error = %e, "WebSocket error");
                        break;
                    }
                    // The stream is read-only; commands go through REST.
                    _ => {}
                }
            }
        }
    }
}

async fn send_event(socket: &mut WebSocket, event: &SessionEvent) -> Result<(), axum::Error> {
    match serde_json::to_string(event) {
        Ok(json) => socket.send(Message::Text(json.into())).await,
        Err(e) => {
            warn!(error = %e, "Failed to serialize session event");
            Ok(())
        }
    }
}
