use std::future::Future;

use super::snake::{GameOverNotification, SnakeGameSnapshot};

/// Receives every visible change a session produces.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SnakeGameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}
