mod autopilot;
mod entity;
mod food;
mod game_state;
mod input;
mod scheduler;
mod score;
mod session;
mod snapshot;
mod types;

pub use autopilot::Autopilot;
pub use entity::Snake;
pub use food::spawn_food;
pub use game_state::{SnakeGameState, TickOutcome};
pub use input::{InputMode, InputTracker, KeyCode, SpeedSettings};
pub use scheduler::{GameBroadcaster, SessionSummary, TickScheduler};
pub use score::ScoreTracker;
pub use session::{CommandOutcome, GameCommand, GameSession};
pub use snapshot::GameSnapshot;
pub use types::{DeathReason, Direction, FieldSize, Point};
