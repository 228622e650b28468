//! Score and identity collaborators consumed by the session loop.

mod client;
mod error;
mod memory;
mod types;

pub use client::{AuthClient, LeaderboardClient};
pub use error::LeaderboardError;
pub use memory::InMemoryLeaderboard;
pub use types::{AuthSession, ScoreEntry};

pub const DEFAULT_TOP_SCORES_LIMIT: usize = 10;
