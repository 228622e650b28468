use crate::games::SessionRng;

use super::snake::Snake;
use super::types::{GRID_CELLS, GRID_SIZE, Point};

pub fn has_free_cell(snake: &Snake) -> bool {
    snake.len() < GRID_CELLS
}

/// Rejection-samples a uniformly random cell not covered by `snake`.
///
/// The caller must check [`has_free_cell`] first: on a full field this never
/// returns.
pub fn place_food(snake: &Snake, rng: &mut SessionRng) -> Point {
    loop {
        let candidate = Point::new(rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE));
        if !snake.contains(&candidate) {
            return candidate;
        }
    }
}
