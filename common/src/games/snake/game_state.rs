use crate::games::SessionRng;
use crate::leaderboard::AuthSession;

use super::food::{has_free_cell, place_food};
use super::movement::step;
use super::settings::SnakeSessionSettings;
use super::snake::Snake;
use super::types::{Direction, GameEndReason, Point, WallCollisionMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Running,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Tick,
    Turn(Direction),
    TogglePause,
    Reset,
    SetWallCollisionMode(WallCollisionMode),
}

/// What applying a [`SessionEvent`] did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Ignored,
    Moved,
    AteFood { score: u32 },
    GameOver(GameEndReason),
    Paused,
    Resumed,
    Restarted,
    DirectionQueued(Direction),
    ModeChanged(WallCollisionMode),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeGameSnapshot {
    pub tick: u64,
    pub segments: Vec<Point>,
    pub food: Point,
    pub direction: Direction,
    pub score: u32,
    pub phase: SessionPhase,
    pub wall_collision_mode: WallCollisionMode,
    pub end_reason: Option<GameEndReason>,
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    snake: Snake,
    direction: Direction,
    pending_direction: Option<Direction>,
    food: Point,
    score: u32,
    phase: SessionPhase,
    wall_collision_mode: WallCollisionMode,
    end_reason: Option<GameEndReason>,
    score_submitted: bool,
    tick: u64,
    settings: SnakeSessionSettings,
    rng: SessionRng,
}

impl SnakeGameState {
    pub fn new(settings: SnakeSessionSettings, mut rng: SessionRng) -> Self {
        let snake = Snake::new(settings.initial_head);
        let food = place_food(&snake, &mut rng);

        Self {
            snake,
            direction: settings.initial_direction,
            pending_direction: None,
            food,
            score: 0,
            phase: SessionPhase::Running,
            wall_collision_mode: settings.wall_collision_mode,
            end_reason: None,
            score_submitted: false,
            tick: 0,
            settings,
            rng,
        }
    }

    pub fn apply(&mut self, event: SessionEvent) -> Transition {
        match event {
            SessionEvent::Tick => self.advance(),
            SessionEvent::Turn(direction) => self.turn(direction),
            SessionEvent::TogglePause => self.toggle_pause(),
            SessionEvent::Reset => self.reset(),
            SessionEvent::SetWallCollisionMode(mode) => {
                self.wall_collision_mode = mode;
                Transition::ModeChanged(mode)
            }
        }
    }

    /// Hands out the final score for submission at most once per game.
    pub fn take_score_submission(&mut self, auth: Option<&AuthSession>) -> Option<u32> {
        if self.phase != SessionPhase::GameOver
            || self.score == 0
            || self.score_submitted
            || auth.is_none()
        {
            return None;
        }

        self.score_submitted = true;
        Some(self.score)
    }

    pub fn snapshot(&self) -> SnakeGameSnapshot {
        SnakeGameSnapshot {
            tick: self.tick,
            segments: self.snake.to_vec(),
            food: self.food,
            direction: self.direction,
            score: self.score,
            phase: self.phase,
            wall_collision_mode: self.wall_collision_mode,
            end_reason: self.end_reason,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn wall_collision_mode(&self) -> WallCollisionMode {
        self.wall_collision_mode
    }

    pub fn end_reason(&self) -> Option<GameEndReason> {
        self.end_reason
    }

    pub fn score_submitted(&self) -> bool {
        self.score_submitted
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    fn advance(&mut self) -> Transition {
        if self.phase != SessionPhase::Running {
            return Transition::Ignored;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
        self.tick += 1;

        let outcome = step(&self.snake, self.direction, self.food, self.wall_collision_mode);
        if let Some(reason) = outcome.death_reason {
            return self.finish(GameEndReason::Death(reason));
        }

        self.snake = outcome.snake;
        if !outcome.consumed_food {
            return Transition::Moved;
        }

        self.score = self.score.saturating_add(self.settings.score_per_food);
        if !has_free_cell(&self.snake) {
            return self.finish(GameEndReason::GridFilled);
        }
        self.food = place_food(&self.snake, &mut self.rng);

        Transition::AteFood { score: self.score }
    }

    /// Later turns replace a queued one; reversals are judged against the
    /// direction the snake last moved in.
    fn turn(&mut self, direction: Direction) -> Transition {
        if self.phase == SessionPhase::GameOver
            || direction == self.pending_direction.unwrap_or(self.direction)
            || direction.is_opposite(&self.direction)
        {
            return Transition::Ignored;
        }

        self.pending_direction = Some(direction);
        Transition::DirectionQueued(direction)
    }

    fn toggle_pause(&mut self) -> Transition {
        match self.phase {
            SessionPhase::Running => {
                self.phase = SessionPhase::Paused;
                Transition::Paused
            }
            SessionPhase::Paused => {
                self.phase = SessionPhase::Running;
                Transition::Resumed
            }
            SessionPhase::GameOver => Transition::Ignored,
        }
    }

    fn reset(&mut self) -> Transition {
        self.snake = Snake::new(self.settings.initial_head);
        self.direction = self.settings.initial_direction;
        self.pending_direction = None;
        self.food = place_food(&self.snake, &mut self.rng);
        self.score = 0;
        self.phase = SessionPhase::Running;
        self.end_reason = None;
        self.score_submitted = false;
        self.tick = 0;

        Transition::Restarted
    }

    fn finish(&mut self, reason: GameEndReason) -> Transition {
        self.phase = SessionPhase::GameOver;
        self.end_reason = Some(reason);
        Transition::GameOver(reason)
    }

    #[cfg(test)]
    pub(crate) fn set_layout(&mut self, snake: Snake, direction: Direction, food: Point) {
        self.snake = snake;
        self.direction = direction;
        self.pending_direction = None;
        self.food = food;
    }
}
