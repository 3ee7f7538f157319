use crate::handlers::{directory, health, register};
use crate::state::AppState;
use axum::Router;
use axum::body::Body;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::Request;
use axum::middleware::{Next, from_fn_with_state};
use axum::response::Response;
use axum::routing::{get, post};
use seva::domain::constants::{
    ARYA_MITRA_PATH, ARYA_MITRA_REGISTER_PATH, HEALTH_PATH, MAX_ATTACHMENT_BYTES, STATS_PATH,
    VOLUNTEER_REGISTER_PATH, VOLUNTEERS_PATH,
};
use tower_http::trace::TraceLayer;

/// Two attachments plus the text parts.
const MAX_BODY_BYTES: usize = 2 * MAX_ATTACHMENT_BYTES + 1024 * 1024;

#[allow(unreachable_pub)]
pub fn init(state: AppState) -> Router {
    let api = Router::new()
        .route(&format!("/{HEALTH_PATH}"), get(health::health_handler))
        .route(&format!("/{VOLUNTEERS_PATH}"), get(directory::volunteers_handler))
        .route(&format!("/{ARYA_MITRA_PATH}"), get(directory::arya_mitras_handler))
        .route(&format!("/{STATS_PATH}"), get(directory::stats_handler))
        .route(&format!("/{VOLUNTEER_REGISTER_PATH}"), post(register::volunteer_handler))
        .route(&format!("/{ARYA_MITRA_REGISTER_PATH}"), post(register::arya_mitra_handler));

    Router::new()
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(from_fn_with_state(state.clone(), latency))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn latency(State(state): State<AppState>, req: Request<Body>, next: Next) -> Response {
    let delay = state.latency();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    next.run(req).await
}
