use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;
use tokio::time::{MissedTickBehavior, interval};

use crate::games::{GameBroadcaster, SessionRng};
use crate::leaderboard::{AuthSession, LeaderboardClient, LeaderboardError, ScoreEntry};
use crate::log;
use super::game_state::{SessionEvent, SnakeGameState, Transition};
use super::settings::SnakeSessionSettings;
use super::types::GameEndReason;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Event(SessionEvent),
    SetAuth(Option<AuthSession>),
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// No identity, a zero score, or the score was already handed out.
    NotAttempted,
    Submitted(ScoreEntry),
    Failed(LeaderboardError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverNotification {
    pub session_id: String,
    pub score: u32,
    pub reason: GameEndReason,
    pub submission: SubmissionStatus,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_played: u32,
    pub best_score: u32,
    pub last_score: u32,
}

impl SessionSummary {
    fn record(&mut self, score: u32) {
        self.games_played += 1;
        self.best_score = self.best_score.max(score);
        self.last_score = score;
    }
}

#[derive(Clone)]
pub struct SnakeSessionState {
    pub session_id: String,
    pub game_state: Arc<Mutex<SnakeGameState>>,
    pub auth: Arc<Mutex<Option<AuthSession>>>,
    pub tick_interval: Duration,
}

impl SnakeSessionState {
    pub fn create(
        session_id: impl Into<String>,
        settings: SnakeSessionSettings,
        rng: SessionRng,
        auth: Option<AuthSession>,
    ) -> Self {
        let tick_interval = settings.tick_interval;

        Self {
            session_id: session_id.into(),
            game_state: Arc::new(Mutex::new(SnakeGameState::new(settings, rng))),
            auth: Arc::new(Mutex::new(auth)),
            tick_interval,
        }
    }
}

pub struct SnakeSession;

impl SnakeSession {
    pub async fn run(
        session_state: SnakeSessionState,
        mut commands: mpsc::UnboundedReceiver<SessionCommand>,
        leaderboard: impl LeaderboardClient,
        broadcaster: impl GameBroadcaster,
    ) -> SessionSummary {
        let mut tick_interval_timer = interval(session_state.tick_interval);
        tick_interval_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut summary = SessionSummary::default();
        let mut submissions = JoinSet::new();

        let initial = session_state.game_state.lock().await.snapshot();
        broadcaster.broadcast_state(initial).await;

        loop {
            let event = tokio::select! {
                _ = tick_interval_timer.tick() => SessionEvent::Tick,
                command = commands.recv() => match command {
                    Some(SessionCommand::Event(event)) => event,
                    Some(SessionCommand::SetAuth(auth)) => {
                        *session_state.auth.lock().await = auth;
                        continue;
                    }
                    Some(SessionCommand::Quit) | None => break,
                },
            };

            Self::handle_event(
                &session_state,
                event,
                &leaderboard,
                &broadcaster,
                &mut summary,
                &mut submissions,
            )
            .await;
        }

        while submissions.join_next().await.is_some() {}

        log!(
            "[session:{}] Finished after {} game(s), best score {}",
            session_state.session_id,
            summary.games_played,
            summary.best_score
        );
        summary
    }

    /// Applies one event. Score submissions run on `submissions` so a slow
    /// leaderboard never blocks the next command.
    async fn handle_event<L: LeaderboardClient, B: GameBroadcaster>(
        state: &SnakeSessionState,
        event: SessionEvent,
        leaderboard: &L,
        broadcaster: &B,
        summary: &mut SessionSummary,
        submissions: &mut JoinSet<()>,
    ) -> Transition {
        let (transition, snapshot, submission) = {
            let mut game_state = state.game_state.lock().await;
            let transition = game_state.apply(event);
            if transition == Transition::Ignored {
                return transition;
            }

            let submission = if let Transition::GameOver(_) = transition {
                let auth = state.auth.lock().await.clone();
                game_state.take_score_submission(auth.as_ref()).zip(auth)
            } else {
                None
            };

            (transition, game_state.snapshot(), submission)
        };

        if let Transition::AteFood { score } = transition {
            log!("[session:{}] Food eaten, score {}", state.session_id, score);
        }

        broadcaster.broadcast_state(snapshot.clone()).await;

        if let Transition::GameOver(reason) = transition {
            log!(
                "[session:{}] Game over ({:?}) with score {}",
                state.session_id,
                reason,
                snapshot.score
            );
            summary.record(snapshot.score);

            let mut notification = GameOverNotification {
                session_id: state.session_id.clone(),
                score: snapshot.score,
                reason,
                submission: SubmissionStatus::NotAttempted,
            };

            match submission {
                Some((score, auth)) => {
                    let leaderboard = leaderboard.clone();
                    let broadcaster = broadcaster.clone();
                    submissions.spawn(async move {
                        notification.submission =
                            submit_score(&notification.session_id, &leaderboard, &auth, score).await;
                        broadcaster.broadcast_game_over(notification).await;
                    });
                }
                None => broadcaster.broadcast_game_over(notification).await,
            }
        }

        transition
    }
}

async fn submit_score(
    session_id: &str,
    leaderboard: &impl LeaderboardClient,
    auth: &AuthSession,
    score: u32,
) -> SubmissionStatus {
    match leaderboard.submit_score(auth, score).await {
        Ok(entry) => {
            log!("[session:{}] Submitted score {} for {}", session_id, score, auth.username);
            SubmissionStatus::Submitted(entry)
        }
        Err(e) => {
            log!("[session:{}] Failed to submit score {}: {}", session_id, score, e);
            SubmissionStatus::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::game_state::{SessionPhase, SnakeGameSnapshot};
    use crate::games::snake::snake::Snake;
    use crate::games::snake::types::{DeathReason, Direction, Point};
    use crate::leaderboard::{AuthClient, InMemoryLeaderboard};
    use tokio::time::sleep;

    #[derive(Clone, Default)]
    struct RecordingBroadcaster {
        states: Arc<std::sync::Mutex<Vec<SnakeGameSnapshot>>>,
        game_overs: Arc<std::sync::Mutex<Vec<GameOverNotification>>>,
    }

    impl RecordingBroadcaster {
        fn game_over_count(&self) -> usize {
            self.game_overs.lock().unwrap().len()
        }

        fn last_state(&self) -> SnakeGameSnapshot {
            self.states.lock().unwrap().last().cloned().unwrap()
        }

        async fn wait_for_game_overs(&self, count: usize) {
            while self.game_over_count() < count {
                sleep(Duration::from_millis(10)).await;
            }
        }
    }

    impl GameBroadcaster for RecordingBroadcaster {
        async fn broadcast_state(&self, snapshot: SnakeGameSnapshot) {
            self.states.lock().unwrap().push(snapshot);
        }

        async fn broadcast_game_over(&self, notification: GameOverNotification) {
            self.game_overs.lock().unwrap().push(notification);
        }
    }

    #[derive(Clone)]
    struct SlowLeaderboard {
        inner: InMemoryLeaderboard,
        delay: Duration,
    }

    impl LeaderboardClient for SlowLeaderboard {
        async fn submit_score(&self, auth: &AuthSession, score: u32) -> Result<ScoreEntry, LeaderboardError> {
            sleep(self.delay).await;
            self.inner.submit_score(auth, score).await
        }

        async fn get_top_scores(&self, limit: usize) -> Result<Vec<ScoreEntry>, LeaderboardError> {
            self.inner.get_top_scores(limit).await
        }
    }

    async fn create_session(
        segments: Vec<Point>,
        direction: Direction,
        food: Point,
        auth: Option<AuthSession>,
    ) -> SnakeSessionState {
        let state = SnakeSessionState::create(
            "test",
            SnakeSessionSettings::default(),
            SessionRng::new(11),
            auth,
        );
        let snake = Snake::from_segments(segments).unwrap();
        state.game_state.lock().await.set_layout(snake, direction, food);
        state
    }

    #[tokio::test(start_paused = true)]
    async fn test_wall_death_without_score_is_not_submitted() {
        let leaderboard = InMemoryLeaderboard::new();
        let auth = leaderboard.signup(&"alice".into(), "secret").await.unwrap();
        let state = create_session(vec![Point::new(17, 4)], Direction::Right, Point::new(0, 0), Some(auth)).await;
        let broadcaster = RecordingBroadcaster::default();
        let (tx, rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(SnakeSession::run(state.clone(), rx, leaderboard.clone(), broadcaster.clone()));
        broadcaster.wait_for_game_overs(1).await;
        tx.send(SessionCommand::Quit).unwrap();
        let summary = handle.await.unwrap();

        let notification = broadcaster.game_overs.lock().unwrap()[0].clone();
        assert_eq!(notification.reason, GameEndReason::Death(DeathReason::WallCollision));
        assert_eq!(notification.score, 0);
        assert_eq!(notification.submission, SubmissionStatus::NotAttempted);
        assert_eq!(summary.games_played, 1);
        assert!(leaderboard.get_top_scores(10).await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_submitted_once_per_game() {
        let leaderboard = InMemoryLeaderboard::new();
        let auth = leaderboard.signup(&"alice".into(), "secret").await.unwrap();
        let state = create_session(vec![Point::new(18, 4)], Direction::Right, Point::new(19, 4), Some(auth)).await;
        let broadcaster = RecordingBroadcaster::default();
        let (tx, rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(SnakeSession::run(state.clone(), rx, leaderboard.clone(), broadcaster.clone()));
        broadcaster.wait_for_game_overs(1).await;
        tx.send(SessionCommand::Event(SessionEvent::TogglePause)).unwrap();
        sleep(Duration::from_secs(2)).await;
        tx.send(SessionCommand::Quit).unwrap();
        let summary = handle.await.unwrap();

        assert_eq!(broadcaster.game_over_count(), 1);
        let notification = broadcaster.game_overs.lock().unwrap()[0].clone();
        assert_eq!(notification.score, 10);
        match notification.submission {
            SubmissionStatus::Submitted(entry) => {
                assert_eq!(entry.username.as_str(), "alice");
                assert_eq!(entry.score, 10);
            }
            other => panic!("Expected submitted score, got {:?}", other),
        }

        let scores = leaderboard.get_top_scores(10).await.unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(summary.best_score, 10);
        assert!(state.game_state.lock().await.score_submitted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_anonymous_game_over_skips_submission() {
        let leaderboard = InMemoryLeaderboard::new();
        let state = create_session(vec![Point::new(18, 4)], Direction::Right, Point::new(19, 4), None).await;
        let broadcaster = RecordingBroadcaster::default();
        let (tx, rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(SnakeSession::run(state, rx, leaderboard.clone(), broadcaster.clone()));
        broadcaster.wait_for_game_overs(1).await;
        drop(tx);
        handle.await.unwrap();

        let notification = broadcaster.game_overs.lock().unwrap()[0].clone();
        assert_eq!(notification.score, 10);
        assert_eq!(notification.submission, SubmissionStatus::NotAttempted);
        assert!(leaderboard.get_top_scores(10).await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_submission_leaves_game_state_alone() {
        let leaderboard = InMemoryLeaderboard::new();
        let forged = AuthSession {
            username: "mallory".into(),
            token: "forged".into(),
        };
        let state = create_session(vec![Point::new(18, 4)], Direction::Right, Point::new(19, 4), Some(forged)).await;
        let broadcaster = RecordingBroadcaster::default();
        let (tx, rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(SnakeSession::run(state.clone(), rx, leaderboard, broadcaster.clone()));
        broadcaster.wait_for_game_overs(1).await;

        let notification = broadcaster.game_overs.lock().unwrap()[0].clone();
        assert_eq!(notification.submission, SubmissionStatus::Failed(LeaderboardError::InvalidToken));
        {
            let game_state = state.game_state.lock().await;
            assert_eq!(game_state.phase(), SessionPhase::GameOver);
            assert_eq!(game_state.score(), 10);
        }

        tx.send(SessionCommand::Event(SessionEvent::Reset)).unwrap();
        sleep(Duration::from_millis(1)).await;
        tx.send(SessionCommand::Quit).unwrap();
        handle.await.unwrap();

        let game_state = state.game_state.lock().await;
        assert_ne!(game_state.phase(), SessionPhase::GameOver);
        assert_eq!(game_state.score(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_stops_ticks() {
        let state = create_session(vec![Point::new(2, 2)], Direction::Right, Point::new(0, 19), None).await;
        let broadcaster = RecordingBroadcaster::default();
        let (tx, rx) = mpsc::unbounded_channel();

        tx.send(SessionCommand::Event(SessionEvent::TogglePause)).unwrap();
        let handle = tokio::spawn(SnakeSession::run(state.clone(), rx, InMemoryLeaderboard::new(), broadcaster.clone()));
        sleep(Duration::from_secs(3)).await;

        let head = state.game_state.lock().await.snake().head();
        assert_eq!(broadcaster.last_state().phase, SessionPhase::Paused);
        assert!(head.x <= 3);

        tx.send(SessionCommand::Quit).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_auth_enables_submission() {
        let leaderboard = InMemoryLeaderboard::new();
        let auth = leaderboard.signup(&"bob".into(), "secret").await.unwrap();
        let state = create_session(vec![Point::new(5, 4)], Direction::Right, Point::new(6, 4), None).await;
        let broadcaster = RecordingBroadcaster::default();
        let (tx, rx) = mpsc::unbounded_channel();

        tx.send(SessionCommand::SetAuth(Some(auth))).unwrap();
        let handle = tokio::spawn(SnakeSession::run(state, rx, leaderboard.clone(), broadcaster.clone()));
        broadcaster.wait_for_game_overs(1).await;
        tx.send(SessionCommand::Quit).unwrap();
        handle.await.unwrap();

        let scores = leaderboard.get_top_scores(10).await.unwrap();
        assert!(!scores.is_empty());
        assert_eq!(scores[0].username.as_str(), "bob");
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_submission_does_not_block_commands() {
        let inner = InMemoryLeaderboard::new();
        let auth = inner.signup(&"carol".into(), "secret").await.unwrap();
        let leaderboard = SlowLeaderboard {
            inner: inner.clone(),
            delay: Duration::from_secs(10),
        };
        let state = create_session(vec![Point::new(18, 4)], Direction::Right, Point::new(19, 4), Some(auth)).await;
        let broadcaster = RecordingBroadcaster::default();
        let (tx, rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(SnakeSession::run(state.clone(), rx, leaderboard, broadcaster.clone()));
        while state.game_state.lock().await.phase() != SessionPhase::GameOver {
            sleep(Duration::from_millis(10)).await;
        }

        tx.send(SessionCommand::Event(SessionEvent::Reset)).unwrap();
        sleep(Duration::from_millis(1)).await;

        assert_eq!(state.game_state.lock().await.phase(), SessionPhase::Running);
        assert_eq!(broadcaster.game_over_count(), 0);

        tx.send(SessionCommand::Quit).unwrap();
        handle.await.unwrap();

        assert_eq!(broadcaster.game_over_count(), 1);
        let notification = broadcaster.game_overs.lock().unwrap()[0].clone();
        assert!(matches!(notification.submission, SubmissionStatus::Submitted(_)));
        assert_eq!(inner.get_top_scores(10).await.unwrap().len(), 1);
    }
}
