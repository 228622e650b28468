//! The tick function. Pure: the same inputs always give the same outcome.

use super::collision::{self_collision, wall_collision};
use super::grid::wrap;
use super::snake::Snake;
use super::types::{DeathReason, Direction, Point, WallCollisionMode};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub snake: Snake,
    pub consumed_food: bool,
    pub death_reason: Option<DeathReason>,
}

impl MoveOutcome {
    fn dead(snake: &Snake, reason: DeathReason) -> Self {
        Self {
            snake: snake.clone(),
            consumed_food: false,
            death_reason: Some(reason),
        }
    }

    pub fn terminated(&self) -> bool {
        self.death_reason.is_some()
    }
}

/// Advances `snake` one cell in `direction`.
///
/// Order matters: the wall check (or wrap) happens first, then the candidate
/// head is tested against the whole pre-move snake, tail included, so a head
/// that re-enters through a wall can still die on the same tick. Reversals
/// are not filtered here.
pub fn step(snake: &Snake, direction: Direction, food: Point, mode: WallCollisionMode) -> MoveOutcome {
    let mut candidate = snake.head().offset(direction);

    if wall_collision(candidate, mode) {
        return MoveOutcome::dead(snake, DeathReason::WallCollision);
    }
    if mode.is_walk_through() {
        candidate = wrap(candidate);
    }

    if self_collision(candidate, snake.segments()) {
        return MoveOutcome::dead(snake, DeathReason::SelfCollision);
    }

    let mut next = snake.clone();
    next.push_head(candidate);

    let consumed_food = candidate == food;
    if !consumed_food {
        next.retract_tail();
    }

    MoveOutcome {
        snake: next,
        consumed_food,
        death_reason: None,
    }
}
