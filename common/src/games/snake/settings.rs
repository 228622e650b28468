use std::time::Duration;

use super::types::{Direction, GRID_CELLS, Point, WallCollisionMode};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(150);
pub const DEFAULT_SCORE_PER_FOOD: u32 = 10;
/// Largest per-food score for which a snake covering the whole grid still fits in `u32`.
pub const MAX_SCORE_PER_FOOD: u32 = u32::MAX / (GRID_CELLS as u32 - 1);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeSessionSettings {
    pub tick_interval: Duration,
    pub wall_collision_mode: WallCollisionMode,
    pub score_per_food: u32,
    pub initial_head: Point,
    pub initial_direction: Direction,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            wall_collision_mode: WallCollisionMode::Death,
            score_per_food: DEFAULT_SCORE_PER_FOOD,
            initial_head: Point::new(10, 10),
            initial_direction: Direction::Right,
        }
    }
}
