use std::collections::VecDeque;

use super::types::Point;

/// Head-first list of segments. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
}

impl Snake {
    pub fn new(head: Point) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    pub fn from_segments(segments: Vec<Point>) -> Result<Self, String> {
        if segments.is_empty() {
            return Err("Snake must have at least one segment".to_string());
        }
        Ok(Self {
            body: VecDeque::from(segments),
        })
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body.contains(point)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn to_vec(&self) -> Vec<Point> {
        self.body.iter().copied().collect()
    }

    pub(super) fn push_head(&mut self, head: Point) {
        self.body.push_front(head);
    }

    /// Keeps at least the head.
    pub(super) fn retract_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }
}
