use super::input::InputMode;
use super::types::{DeathReason, Direction, FieldSize, Point};

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub field_size: FieldSize,
    pub snake: Vec<Point>,
    pub food: Point,
    pub direction: Direction,
    pub score: u32,
    pub high_score: u32,
    pub paused: bool,
    pub game_over: Option<DeathReason>,
    pub input_mode: InputMode,
    pub blink: u32,
    pub tick: u64,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.snake.first().copied()
    }

    /// Food pulse in [-1, 1], driven by the blink counter.
    pub fn food_pulse(&self) -> f32 {
        (self.blink as f32 * 0.2).sin()
    }
}
