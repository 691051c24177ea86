use common::log;
use common::snake::{GameBroadcaster, GameSnapshot};

use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot) {
        self.shared_state.set_snapshot(snapshot);
    }

    async fn broadcast_game_over(&self, snapshot: GameSnapshot) {
        log!("Showing game over screen after {} ticks", snapshot.tick);
        self.shared_state.set_snapshot(snapshot);
    }
}
