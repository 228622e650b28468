//! Bounds checks and edge wrapping for the `GRID_SIZE` x `GRID_SIZE` field.

use super::types::{GRID_SIZE, Point};

pub fn is_out_of_bounds(pos: Point) -> bool {
    pos.x < 0 || pos.x >= GRID_SIZE || pos.y < 0 || pos.y >= GRID_SIZE
}

/// Maps a point at most one step outside the field back onto the opposite edge.
pub fn wrap(pos: Point) -> Point {
    Point::new(wrap_axis(pos.x), wrap_axis(pos.y))
}

fn wrap_axis(value: i32) -> i32 {
    if value < 0 {
        GRID_SIZE - 1
    } else if value >= GRID_SIZE {
        0
    } else {
        value
    }
}
