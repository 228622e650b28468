mod collision;
mod food;
mod game_state;
mod grid;
mod movement;
mod session;
mod settings;
mod snake;
mod types;

pub use collision::{self_collision, wall_collision};
pub use food::{has_free_cell, place_food};
pub use game_state::{SessionEvent, SessionPhase, SnakeGameSnapshot, SnakeGameState, Transition};
pub use grid::{is_out_of_bounds, wrap};
pub use movement::{MoveOutcome, step};
pub use session::{
    GameOverNotification, SessionCommand, SessionSummary, SnakeSession, SnakeSessionState,
    SubmissionStatus,
};
pub use settings::{MAX_SCORE_PER_FOOD, SnakeSessionSettings};
pub use snake::Snake;
pub use types::{
    DeathReason, Direction, GRID_CELLS, GRID_SIZE, GameEndReason, Point, WallCollisionMode,
};
