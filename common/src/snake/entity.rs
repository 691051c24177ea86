use std::collections::{HashSet, VecDeque};

use super::types::Point;

/// Cells occupied by the snake, head first. Never empty, never overlapping.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    pub fn new(start_pos: Point) -> Self {
        Self {
            body: VecDeque::from([start_pos]),
            body_set: HashSet::from([start_pos]),
        }
    }

    /// Builds a snake from explicit segments, head first.
    pub fn from_segments(segments: impl IntoIterator<Item = Point>) -> Result<Self, String> {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();

        for segment in segments {
            if !body_set.insert(segment) {
                return Err(format!("Duplicate snake segment at ({}, {})", segment.x, segment.y));
            }
            body.push_back(segment);
        }

        if body.is_empty() {
            return Err("Snake must have at least one segment".to_string());
        }

        Ok(Self { body, body_set })
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

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub(crate) fn push_head(&mut self, head: Point) {
        self.body.push_front(head);
        self.body_set.insert(head);
    }

    pub(crate) fn pop_tail(&mut self) {
        if self.body.len() > 1
            && let Some(tail) = self.body.pop_back()
        {
            self.body_set.remove(&tail);
        }
    }
}
