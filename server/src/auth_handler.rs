use axum::{Json, extract::State, http::StatusCode};
use common::leaderboard::{AuthClient, AuthSession};
use common::{SessionToken, Username, log};
use serde::{Deserialize, Serialize};

use crate::api_error::ApiError;
use crate::web_server::AppState;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub username: Username,
    pub token: SessionToken,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            username: session.username,
            token: session.token,
        }
    }
}

pub async fn signup(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let username = Username::new(credentials.username);
    let session = state.leaderboard.signup(&username, &credentials.password).await?;
    log!("User {} signed up", session.username);
    Ok((StatusCode::CREATED, Json(session.into())))
}

pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<AuthResponse>, ApiError> {
    let username = Username::new(credentials.username);
    let session = state.leaderboard.login(&username, &credentials.password).await?;
    log!("User {} logged in", session.username);
    Ok(Json(session.into()))
}
