use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::leaderboard::LeaderboardError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error(transparent)]
    Leaderboard(#[from] LeaderboardError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Leaderboard(error) => match error {
                LeaderboardError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                LeaderboardError::UsernameTaken => StatusCode::CONFLICT,
                LeaderboardError::UserNotFound => StatusCode::NOT_FOUND,
                LeaderboardError::WrongPassword | LeaderboardError::InvalidToken => {
                    StatusCode::UNAUTHORIZED
                }
                LeaderboardError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
