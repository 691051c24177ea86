use std::collections::HashSet;
use std::time::Duration;

use crate::defaults::{ACCELERATED_TICK, NORMAL_TICK, POINTER_TICK};
use super::types::{Direction, Point};

/// Physical keys the game reacts to. Letter keys are case-insensitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
    Space,
}

impl KeyCode {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            KeyCode::ArrowUp | KeyCode::W => Some(Direction::Up),
            KeyCode::ArrowDown | KeyCode::S => Some(Direction::Down),
            KeyCode::ArrowLeft | KeyCode::A => Some(Direction::Left),
            KeyCode::ArrowRight | KeyCode::D => Some(Direction::Right),
            KeyCode::Space => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    KeyboardNormal,
    KeyboardAccelerated,
    Pointer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpeedSettings {
    pub normal: Duration,
    pub accelerated: Duration,
    pub pointer: Duration,
}

impl SpeedSettings {
    pub fn interval_for(&self, mode: InputMode) -> Duration {
        match mode {
            InputMode::KeyboardNormal => self.normal,
            InputMode::KeyboardAccelerated => self.accelerated,
            InputMode::Pointer => self.pointer,
        }
    }
}

impl Default for SpeedSettings {
    fn default() -> Self {
        Self {
            normal: NORMAL_TICK,
            accelerated: ACCELERATED_TICK,
            pointer: POINTER_TICK,
        }
    }
}

/// The single record of held directional keys and pointer position that the
/// input mode is derived from.
#[derive(Clone, Debug, Default)]
pub struct InputTracker {
    held_keys: HashSet<KeyCode>,
    pointer_target: Option<Point>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer beats held keys, held keys beat nothing.
    pub fn mode(&self) -> InputMode {
        if self.pointer_target.is_some() {
            InputMode::Pointer
        } else if !self.held_keys.is_empty() {
            InputMode::KeyboardAccelerated
        } else {
            InputMode::KeyboardNormal
        }
    }

    pub fn pointer_target(&self) -> Option<Point> {
        self.pointer_target
    }

    pub fn key_down(&mut self, key: KeyCode) {
        if key.direction().is_some() {
            self.held_keys.insert(key);
        }
    }

    pub fn key_up(&mut self, key: KeyCode) {
        self.held_keys.remove(&key);
    }

    pub fn pointer_moved(&mut self, target: Point) {
        self.pointer_target = Some(target);
    }

    pub fn pointer_left(&mut self) {
        self.pointer_target = None;
    }

    pub fn clear(&mut self) {
        self.held_keys.clear();
        self.pointer_target = None;
    }
}
