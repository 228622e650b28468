use std::future::Future;

use crate::Username;
use super::{AuthSession, LeaderboardError, ScoreEntry};

pub trait AuthClient: Send + Sync + Clone + 'static {
    fn login(
        &self,
        username: &Username,
        password: &str,
    ) -> impl Future<Output = Result<AuthSession, LeaderboardError>> + Send;

    fn signup(
        &self,
        username: &Username,
        password: &str,
    ) -> impl Future<Output = Result<AuthSession, LeaderboardError>> + Send;
}

pub trait LeaderboardClient: Send + Sync + Clone + 'static {
    fn submit_score(
        &self,
        auth: &AuthSession,
        score: u32,
    ) -> impl Future<Output = Result<ScoreEntry, LeaderboardError>> + Send;

    /// Highest scores first; equal scores keep submission order.
    fn get_top_scores(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ScoreEntry>, LeaderboardError>> + Send;
}
