use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeaderboardError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Username already exists")]
    UsernameTaken,
    #[error("User not found")]
    UserNotFound,
    #[error("Incorrect password")]
    WrongPassword,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Leaderboard unavailable: {0}")]
    Unavailable(String),
}
