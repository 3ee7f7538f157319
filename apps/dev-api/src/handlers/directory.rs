use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};
use seva::domain::constants::STATS_RESOURCE;
use seva::features::directory::DirectoryKind;

pub(crate) async fn volunteers_handler(State(state): State<AppState>) -> Json<Value> {
    listing(&state, DirectoryKind::Volunteers)
}

pub(crate) async fn arya_mitras_handler(State(state): State<AppState>) -> Json<Value> {
    listing(&state, DirectoryKind::AryaMitras)
}

pub(crate) async fn stats_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "success": true, STATS_RESOURCE: state.store.stats() }))
}

fn listing(state: &AppState, kind: DirectoryKind) -> Json<Value> {
    let entries = state.store.list(kind);
    tracing::debug!(%kind, count = entries.len(), "Serving directory");
    Json(json!({ "success": true, kind.resource(): entries }))
}
