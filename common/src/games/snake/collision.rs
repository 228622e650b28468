use super::grid::is_out_of_bounds;
use super::types::{Point, WallCollisionMode};

/// True when `head` lands on any of `body`'s segments.
pub fn self_collision<'a>(head: Point, body: impl IntoIterator<Item = &'a Point>) -> bool {
    body.into_iter().any(|segment| *segment == head)
}

/// Walls only kill when walk-through is off.
pub fn wall_collision(pos: Point, mode: WallCollisionMode) -> bool {
    match mode {
        WallCollisionMode::Death => is_out_of_bounds(pos),
        WallCollisionMode::WrapAround => false,
    }
}
