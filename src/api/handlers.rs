use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use crate::artifact::GameData;

/// Shared, read-only view of an artifact produced by `process`
pub struct AppState {
    pub data: GameData,
}

impl AppState {
    pub fn new(data: GameData) -> Self {
        Self { data }
    }
}

fn not_found(what: &str, key: &str) -> Response {
    (StatusCode::NOT_FOUND, format!("Unknown {}: {}", what, key)).into_response()
}

pub async fn get_game_data(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.data.clone())
}

pub async fn get_rankings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.data.rankings.clone())
}

pub async fn get_rating_history(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.data.rating_history.clone())
}

pub async fn get_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.data.players.clone())
}

pub async fn get_tournaments(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.data.tournament_summary.clone())
}

pub async fn get_tournament(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.data.tournament(&id) {
        Some(bundle) => Json(bundle.clone()).into_response(),
        None => not_found("tournament", &id),
    }
}

pub async fn get_tournament_snapshots(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.data.snapshots(&id) {
        Some(snapshots) => Json(snapshots.clone()).into_response(),
        None => not_found("tournament", &id),
    }
}

pub async fn get_all_time(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.data.all_time_stats.clone())
}

pub async fn get_pairwise(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.data.all_time_pairwise.clone())
}

pub async fn get_career(
    State(state): State<Arc<AppState>>,
    Path(player): Path<String>,
) -> Response {
    match state.data.career(&player) {
        Some(career) => Json(career.clone()).into_response(),
        None => not_found("player", &player),
    }
}
