use serde::{Deserialize, Serialize};

/// Side length of the square playing field.
pub const GRID_SIZE: i32 = 20;

/// Number of cells on the field; a snake this long leaves no room for food.
pub const GRID_CELLS: usize = (GRID_SIZE * GRID_SIZE) as usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// One of the four axis-aligned unit steps. Screen coordinates: `Up` decreases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

/// Boundary policy. `WrapAround` is the walk-through mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallCollisionMode {
    #[default]
    Death,
    WrapAround,
}

impl WallCollisionMode {
    pub fn is_walk_through(self) -> bool {
        matches!(self, WallCollisionMode::WrapAround)
    }

    pub fn toggled(self) -> Self {
        match self {
            WallCollisionMode::Death => WallCollisionMode::WrapAround,
            WallCollisionMode::WrapAround => WallCollisionMode::Death,
        }
    }
}

impl From<bool> for WallCollisionMode {
    fn from(walk_through: bool) -> Self {
        if walk_through {
            WallCollisionMode::WrapAround
        } else {
            WallCollisionMode::Death
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEndReason {
    Death(DeathReason),
    /// The snake covers every cell, so no food can be placed.
    GridFilled,
}
