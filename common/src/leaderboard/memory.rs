use std::collections::HashMap;
use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use tokio::sync::Mutex;

use crate::id_generator::generate_session_token;
use crate::{SessionToken, Username};
use super::{AuthClient, AuthSession, LeaderboardClient, LeaderboardError, ScoreEntry};

const DEMO_PASSWORD: &str = "password123";

#[derive(Debug)]
struct UserRecord {
    // Plain comparison only; this store is a stand-in, not a credential vault.
    password: String,
}

#[derive(Debug, Default)]
struct LeaderboardData {
    users: HashMap<Username, UserRecord>,
    sessions: HashMap<SessionToken, Username>,
    scores: Vec<ScoreEntry>,
}

impl LeaderboardData {
    fn add_user(&mut self, username: Username, password: &str) {
        self.users.insert(
            username,
            UserRecord {
                password: password.to_string(),
            },
        );
    }

    fn resolve_token(&self, token: &SessionToken) -> Result<Username, LeaderboardError> {
        self.sessions
            .get(token)
            .cloned()
            .ok_or(LeaderboardError::InvalidToken)
    }

    fn open_session(&mut self, username: Username) -> AuthSession {
        let token = generate_session_token();
        self.sessions.insert(token.clone(), username.clone());
        AuthSession { username, token }
    }
}

/// Users, tokens and scores kept in process memory. Cloning shares the data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeaderboard {
    data: Arc<Mutex<LeaderboardData>>,
}

impl InMemoryLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Three demo accounts (password `password123`) and five past scores.
    pub fn with_demo_data() -> Self {
        let now = Utc::now();
        let mut data = LeaderboardData::default();

        for username in ["DemoUser", "ProGamer", "SnakeKing"] {
            data.add_user(username.into(), DEMO_PASSWORD);
        }

        let history = [
            ("SnakeKing", 500, now - TimeDelta::days(1)),
            ("ProGamer", 350, now - TimeDelta::hours(5)),
            ("DemoUser", 200, now - TimeDelta::days(2)),
            ("SnakeKing", 450, now - TimeDelta::days(3)),
            ("ProGamer", 100, now - TimeDelta::days(1)),
        ];
        data.scores = history
            .into_iter()
            .map(|(username, score, date)| ScoreEntry {
                username: username.into(),
                score,
                date,
            })
            .collect();

        Self {
            data: Arc::new(Mutex::new(data)),
        }
    }

    /// Records a score for whoever owns `token`.
    pub async fn submit_score_with_token(
        &self,
        token: &SessionToken,
        score: u32,
    ) -> Result<ScoreEntry, LeaderboardError> {
        let mut data = self.data.lock().await;
        let username = data.resolve_token(token)?;
        if !data.users.contains_key(&username) {
            return Err(LeaderboardError::UserNotFound);
        }

        let entry = ScoreEntry {
            username,
            score,
            date: Utc::now(),
        };
        data.scores.push(entry.clone());
        Ok(entry)
    }
}

fn validate_credentials(username: &Username, password: &str) -> Result<(), LeaderboardError> {
    if username.is_blank() || password.trim().is_empty() {
        return Err(LeaderboardError::InvalidInput(
            "Username and password are required".to_string(),
        ));
    }
    Ok(())
}

impl AuthClient for InMemoryLeaderboard {
    async fn login(&self, username: &Username, password: &str) -> Result<AuthSession, LeaderboardError> {
        validate_credentials(username, password)?;

        let mut data = self.data.lock().await;
        let user = data.users.get(username).ok_or(LeaderboardError::UserNotFound)?;
        if user.password != password {
            return Err(LeaderboardError::WrongPassword);
        }
        Ok(data.open_session(username.clone()))
    }

    async fn signup(&self, username: &Username, password: &str) -> Result<AuthSession, LeaderboardError> {
        validate_credentials(username, password)?;

        let mut data = self.data.lock().await;
        if data.users.contains_key(username) {
            return Err(LeaderboardError::UsernameTaken);
        }
        data.add_user(username.clone(), password);
        Ok(data.open_session(username.clone()))
    }
}

impl LeaderboardClient for InMemoryLeaderboard {
    async fn submit_score(&self, auth: &AuthSession, score: u32) -> Result<ScoreEntry, LeaderboardError> {
        self.submit_score_with_token(&auth.token, score).await
    }

    async fn get_top_scores(&self, limit: usize) -> Result<Vec<ScoreEntry>, LeaderboardError> {
        let data = self.data.lock().await;
        let mut scores = data.scores.clone();
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores.truncate(limit);
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Username {
        Username::from(s)
    }

    #[tokio::test]
    async fn test_signup_then_login() {
        let store = InMemoryLeaderboard::new();
        let signed_up = store.signup(&name("testuser"), "password123").await.unwrap();
        assert_eq!(signed_up.username, name("testuser"));

        let logged_in = store.login(&name("testuser"), "password123").await.unwrap();
        assert_eq!(logged_in.username, name("testuser"));
        assert_ne!(logged_in.token, signed_up.token);
    }

    #[tokio::test]
    async fn test_duplicate_signup_rejected() {
        let store = InMemoryLeaderboard::new();
        store.signup(&name("testuser"), "password123").await.unwrap();
        let second = store.signup(&name("testuser"), "other").await;
        assert_eq!(second, Err(LeaderboardError::UsernameTaken));
    }

    #[tokio::test]
    async fn test_login_failures() {
        let store = InMemoryLeaderboard::new();
        store.signup(&name("testuser"), "password123").await.unwrap();

        assert_eq!(
            store.login(&name("testuser"), "wrongpassword").await,
            Err(LeaderboardError::WrongPassword)
        );
        assert_eq!(
            store.login(&name("nonexistent"), "password123").await,
            Err(LeaderboardError::UserNotFound)
        );
    }

    #[tokio::test]
    async fn test_blank_credentials_rejected() {
        let store = InMemoryLeaderboard::new();
        assert!(matches!(
            store.signup(&name("  "), "pw").await,
            Err(LeaderboardError::InvalidInput(_))
        ));
        assert!(matches!(
            store.login(&name("someone"), "").await,
            Err(LeaderboardError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_submit_and_rank_scores() {
        let store = InMemoryLeaderboard::new();
        let p1 = store.signup(&name("p1"), "p1").await.unwrap();
        let p2 = store.signup(&name("p2"), "p2").await.unwrap();

        let entry = store.submit_score(&p1, 100).await.unwrap();
        assert_eq!(entry.username, name("p1"));
        assert_eq!(entry.score, 100);
        store.submit_score(&p2, 200).await.unwrap();

        let top = store.get_top_scores(10).await.unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!((top[0].username.as_str(), top[0].score), ("p2", 200));
        assert_eq!((top[1].username.as_str(), top[1].score), ("p1", 100));
    }

    #[tokio::test]
    async fn test_ties_keep_submission_order_and_limit_applies() {
        let store = InMemoryLeaderboard::new();
        let a = store.signup(&name("a"), "pw").await.unwrap();
        let b = store.signup(&name("b"), "pw").await.unwrap();
        store.submit_score(&a, 50).await.unwrap();
        store.submit_score(&b, 50).await.unwrap();
        store.submit_score(&a, 10).await.unwrap();

        let top = store.get_top_scores(2).await.unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].username, name("a"));
        assert_eq!(top[1].username, name("b"));
    }

    #[tokio::test]
    async fn test_unknown_token_rejected() {
        let store = InMemoryLeaderboard::new();
        let forged = AuthSession {
            username: name("ghost"),
            token: SessionToken::new("fake-token".to_string()),
        };
        assert_eq!(store.submit_score(&forged, 10).await, Err(LeaderboardError::InvalidToken));
        assert_eq!(
            store.submit_score_with_token(&forged.token, 10).await,
            Err(LeaderboardError::InvalidToken)
        );
    }

    #[tokio::test]
    async fn test_demo_data_is_seeded() {
        let store = InMemoryLeaderboard::with_demo_data();
        let top = store.get_top_scores(10).await.unwrap();
        assert_eq!(top.len(), 5);
        assert_eq!((top[0].username.as_str(), top[0].score), ("SnakeKing", 500));
        assert_eq!(top[4].score, 100);

        let session = store.login(&name("DemoUser"), DEMO_PASSWORD).await.unwrap();
        let entry = store.submit_score_with_token(&session.token, 5).await.unwrap();
        assert_eq!(entry.username, name("DemoUser"));
    }

    #[tokio::test]
    async fn test_clones_share_data() {
        let store = InMemoryLeaderboard::new();
        let other = store.clone();
        store.signup(&name("shared"), "pw").await.unwrap();
        assert!(other.login(&name("shared"), "pw").await.is_ok());
    }
}
