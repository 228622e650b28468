use std::future::Future;
use axum::{
    Json, Router,
    routing::{get, post},
};
use common::leaderboard::InMemoryLeaderboard;
use common::log;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::api_error::{ApiError, MessageResponse};
use crate::auth_handler;
use crate::leaderboard_handler;

#[derive(Clone)]
pub struct AppState {
    pub leaderboard: InMemoryLeaderboard,
    pub default_top_scores_limit: usize,
    pub max_top_scores_limit: usize,
}

impl AppState {
    pub fn new(
        leaderboard: InMemoryLeaderboard,
        default_top_scores_limit: usize,
        max_top_scores_limit: usize,
    ) -> Self {
        Self {
            leaderboard,
            default_top_scores_limit,
            max_top_scores_limit,
        }
    }

    /// Missing limit means the default; anything above the maximum is clamped.
    pub fn resolve_limit(&self, requested: Option<usize>) -> Result<usize, ApiError> {
        match requested {
            Some(0) => Err(ApiError::BadRequest("limit must be greater than 0".to_string())),
            Some(limit) => Ok(limit.min(self.max_top_scores_limit)),
            None => Ok(self.default_top_scores_limit),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/api/auth/signup", post(auth_handler::signup))
        .route("/api/auth/login", post(auth_handler::login))
        .route(
            "/api/leaderboard",
            get(leaderboard_handler::get_leaderboard).post(leaderboard_handler::submit_score),
        )
        .layer(cors)
        .with_state(state)
}

pub async fn run_web_server(
    bind_address: &str,
    state: AppState,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_address).await?;
    log!("Snake leaderboard server listening on {}", bind_address);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal)
        .await
}

async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Snake Game API is running"))
}
