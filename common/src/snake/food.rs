use crate::session_rng::SessionRng;
use super::entity::Snake;
use super::types::{FieldSize, Point};

/// Picks a random free cell by rejection sampling.
///
/// There is no retry limit: on a board with no free cell this never returns.
/// A 40x40 board cannot realistically fill up, so that case is accepted.
pub fn spawn_food(field_size: &FieldSize, snake: &Snake, rng: &mut SessionRng) -> Point {
    loop {
        let candidate = rng.random_cell(field_size);
        if !snake.contains(&candidate) {
            return candidate;
        }
    }
}
