use crate::game_manager::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use shared::{GuessRequest, GuessResponse, HealthResponse, NewGameResponse};
use std::{path::Path, sync::Arc};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub fn router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/api/new-game", post(new_game))
        .route("/api/check-guess", post(check_guess))
        .route("/api/health", get(health))
        .with_state(state);

    let app = match static_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Serving static files");
            api.fallback_service(ServeDir::new(dir))
        }
        None => api,
    };

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn new_game(State(state): State<Arc<AppState>>) -> Json<NewGameResponse> {
    Json(NewGameResponse {
        game_id: state.start_game(),
    })
}

pub async fn check_guess(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GuessRequest>,
) -> Json<GuessResponse> {
    Json(state.submit_guess(&req.game_id, &req.guess).into())
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        active_games: state.active_games(),
    })
}
