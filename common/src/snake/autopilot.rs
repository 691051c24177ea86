use super::entity::Snake;
use super::types::{Direction, FieldSize, Point};

const BASE_SCORE: i64 = 1000;
const ALIGNMENT_BONUS: i64 = 500;

/// Greedy one-step steering towards a pointer target.
///
/// Only the next cell is looked at, so the snake can and will steer itself
/// into dead ends.
pub struct Autopilot;

impl Autopilot {
    /// Returns the best safe turn, or `None` when every candidate hits a wall
    /// or the snake. The reverse of `current` is never considered.
    pub fn choose_direction(
        snake: &Snake,
        current: Direction,
        target: Point,
        field_size: &FieldSize,
    ) -> Option<Direction> {
        let head = snake.head();
        let mut best: Option<(Direction, i64)> = None;

        for direction in Self::candidate_directions(current) {
            let Some(next) = field_size.step(head, direction) else {
                continue;
            };
            // Checked against the whole body, tail included, even though the
            // tail moves away this tick.
            if snake.contains(&next) {
                continue;
            }

            let score = Self::score_candidate(next, direction, target);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((direction, score));
            }
        }

        best.map(|(direction, _)| direction)
    }

    fn candidate_directions(current: Direction) -> impl Iterator<Item = Direction> {
        Direction::EVALUATION_ORDER
            .into_iter()
            .filter(move |direction| !direction.is_opposite(&current))
    }

    fn score_candidate(next: Point, direction: Direction, target: Point) -> i64 {
        let proximity = BASE_SCORE - next.manhattan_distance(&target) as i64;

        let approaching = match direction {
            Direction::Right => next.x < target.x,
            Direction::Left => next.x > target.x,
            Direction::Down => next.y < target.y,
            Direction::Up => next.y > target.y,
        };

        if approaching {
            proximity + ALIGNMENT_BONUS
        } else {
            proximity
        }
    }
}
