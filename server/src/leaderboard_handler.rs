use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
};
use common::leaderboard::{LeaderboardClient, ScoreEntry};
use common::{SessionToken, log};
use serde::Deserialize;

use crate::api_error::ApiError;
use crate::web_server::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreSubmission {
    pub score: u32,
}

pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<ScoreEntry>>, ApiError> {
    let limit = state.resolve_limit(query.limit)?;
    let scores = state.leaderboard.get_top_scores(limit).await?;
    Ok(Json(scores))
}

pub async fn submit_score(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(submission): Json<ScoreSubmission>,
) -> Result<(StatusCode, Json<ScoreEntry>), ApiError> {
    let token = bearer_token(&headers)?;
    let entry = state
        .leaderboard
        .submit_score_with_token(&token, submission.score)
        .await?;
    log!("Score {} submitted by {}", entry.score, entry.username);
    Ok((StatusCode::CREATED, Json(entry)))
}

fn bearer_token(headers: &HeaderMap) -> Result<SessionToken, ApiError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(SessionToken::from)
        .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))
}
