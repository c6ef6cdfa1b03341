//! Router assembly: the composition root for HTTP.

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::onboarding::onboarding_routes;
use crate::screens::screen_routes;
use crate::session::{SessionStore, session_routes};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
}

/// Build the full router: health, session, onboarding and screen routes.
pub fn app(sessions: Arc<SessionStore>, cors_any: bool) -> Router {
    let state = AppState { sessions };

    let router = Router::new()
        .route("/health", get(health))
        .merge(session_routes())
        .merge(onboarding_routes())
        .merge(screen_routes())
        .with_state(state);

    let router = router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));
    if cors_any {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "marketplace"
    }))
}
