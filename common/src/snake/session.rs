use std::time::Duration;

use crate::log;
use crate::session_rng::SessionRng;
use super::game_state::{SnakeGameState, TickOutcome};
use super::input::{InputMode, InputTracker, KeyCode, SpeedSettings};
use super::snapshot::GameSnapshot;
use super::types::{FieldSize, Point};

/// Everything the player can do, already translated from raw UI events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameCommand {
    Start,
    TogglePause,
    Reset,
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    PointerMoved(Point),
    PointerLeft,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Ignored,
    Updated,
    ModeChanged(InputMode),
    Reset,
    Quit,
}

/// The authoritative game: state, input tracking and randomness. Only the
/// tick scheduler owns one.
pub struct GameSession {
    state: SnakeGameState,
    input: InputTracker,
    speeds: SpeedSettings,
    rng: SessionRng,
}

impl GameSession {
    /// A fresh session, paused until the player starts it.
    pub fn new(speeds: SpeedSettings, high_score: u32, mut rng: SessionRng) -> Self {
        let mut state = SnakeGameState::new(FieldSize::default(), high_score, &mut rng);
        state.set_paused(true);
        Self::with_state(state, speeds, rng)
    }

    pub fn with_state(state: SnakeGameState, speeds: SpeedSettings, rng: SessionRng) -> Self {
        Self {
            state,
            input: InputTracker::new(),
            speeds,
            rng,
        }
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn input_mode(&self) -> InputMode {
        self.input.mode()
    }

    pub fn tick_interval(&self) -> Duration {
        self.speeds.interval_for(self.input_mode())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot(self.input_mode())
    }

    pub fn tick(&mut self) -> TickOutcome {
        let pointer_target = match self.input.mode() {
            InputMode::Pointer => self.input.pointer_target(),
            InputMode::KeyboardNormal | InputMode::KeyboardAccelerated => None,
        };
        self.state.update(pointer_target, &mut self.rng)
    }

    pub fn handle_command(&mut self, command: GameCommand) -> CommandOutcome {
        if self.state.is_game_over() {
            return match command {
                GameCommand::Reset => self.reset(),
                GameCommand::Quit => CommandOutcome::Quit,
                _ => CommandOutcome::Ignored,
            };
        }

        let mode_before = self.input.mode();

        let state_changed = match command {
            GameCommand::Start => self.state.set_paused(false),
            GameCommand::TogglePause | GameCommand::KeyDown(KeyCode::Space) => self.state.toggle_pause(),
            GameCommand::KeyDown(key) => {
                self.input.key_down(key);
                key.direction()
                    .is_some_and(|direction| self.state.request_direction(direction))
            }
            GameCommand::KeyUp(key) => {
                self.input.key_up(key);
                false
            }
            GameCommand::PointerMoved(target) => {
                self.input.pointer_moved(target);
                false
            }
            GameCommand::PointerLeft => {
                self.input.pointer_left();
                false
            }
            GameCommand::Reset => return self.reset(),
            GameCommand::Quit => return CommandOutcome::Quit,
        };

        let mode_after = self.input.mode();
        if mode_after != mode_before {
            log!("Input mode {:?} -> {:?}", mode_before, mode_after);
            CommandOutcome::ModeChanged(mode_after)
        } else if state_changed {
            CommandOutcome::Updated
        } else {
            CommandOutcome::Ignored
        }
    }

    fn reset(&mut self) -> CommandOutcome {
        self.state.reset(&mut self.rng);
        self.input.clear();
        log!("Game reset. High score: {}", self.state.scores().high_score());
        CommandOutcome::Reset
    }
}
