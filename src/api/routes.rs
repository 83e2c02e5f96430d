use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::handlers::{
    AppState, get_all_time, get_career, get_game_data, get_pairwise, get_players, get_rankings,
    get_rating_history, get_tournament, get_tournament_snapshots, get_tournaments,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/game-data", get(get_game_data))
        .route("/api/rankings", get(get_rankings))
        .route("/api/rating-history", get(get_rating_history))
        .route("/api/players", get(get_players))
        .route("/api/tournaments", get(get_tournaments))
        .route("/api/tournaments/:id", get(get_tournament))
        .route("/api/tournaments/:id/snapshots", get(get_tournament_snapshots))
        .route("/api/all-time", get(get_all_time))
        .route("/api/pairwise", get(get_pairwise))
        .route("/api/career/:player", get(get_career))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
