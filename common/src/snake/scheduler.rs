use std::future::Future;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep};

use crate::log;
use crate::storage::HighScoreStore;
use super::game_state::TickOutcome;
use super::session::{CommandOutcome, GameCommand, GameSession};
use super::snapshot::GameSnapshot;
use super::types::DeathReason;

/// Receives what the renderer should show.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub high_score: u32,
    pub ticks: u64,
    pub death_reason: Option<DeathReason>,
}

/// Drives a `GameSession`: one update per tick at the interval of the current
/// input mode, plus player commands, all handled one at a time.
pub struct TickScheduler<B: GameBroadcaster, S: HighScoreStore> {
    session: GameSession,
    broadcaster: B,
    store: S,
}

impl<B: GameBroadcaster, S: HighScoreStore> TickScheduler<B, S> {
    pub fn new(session: GameSession, broadcaster: B, store: S) -> Self {
        Self {
            session,
            broadcaster,
            store,
        }
    }

    /// Runs until `GameCommand::Quit` arrives or every sender is dropped.
    pub async fn run(mut self, mut command_rx: mpsc::UnboundedReceiver<GameCommand>) -> SessionSummary {
        log!(
            "Session started. Seed: {}, high score: {}",
            self.session.seed(),
            self.session.state().scores().high_score()
        );
        self.publish().await;

        let timer = sleep(self.session.tick_interval());
        tokio::pin!(timer);

        loop {
            let finished = self.session.state().is_game_over();

            tokio::select! {
                () = &mut timer, if !finished => {
                    timer.as_mut().reset(Instant::now() + self.session.tick_interval());
                    self.on_tick().await;
                }
                command = command_rx.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    match self.session.handle_command(command) {
                        CommandOutcome::Quit => break,
                        CommandOutcome::ModeChanged(_) | CommandOutcome::Reset => {
                            // Re-arm with the period of the new mode.
                            timer.as_mut().reset(Instant::now() + self.session.tick_interval());
                            self.publish().await;
                        }
                        CommandOutcome::Updated => self.publish().await,
                        CommandOutcome::Ignored => {}
                    }
                }
            }
        }

        let summary = self.summary();
        log!(
            "Session finished. Score: {}, high score: {}",
            summary.score,
            summary.high_score
        );
        summary
    }

    async fn on_tick(&mut self) {
        match self.session.tick() {
            TickOutcome::Moved | TickOutcome::Paused => self.publish().await,
            TickOutcome::Ate { new_high_score } => {
                if let Some(score) = new_high_score {
                    self.persist_high_score(score);
                }
                self.publish().await;
            }
            TickOutcome::GameOver { reason, new_high_score } => {
                if let Some(score) = new_high_score {
                    self.persist_high_score(score);
                }
                let scores = self.session.state().scores();
                log!(
                    "Game over: {:?}. Score: {}, high score: {}",
                    reason,
                    scores.score(),
                    scores.high_score()
                );
                self.broadcaster.broadcast_game_over(self.session.snapshot()).await;
            }
            TickOutcome::Finished => {}
        }
    }

    async fn publish(&self) {
        self.broadcaster.broadcast_state(self.session.snapshot()).await;
    }

    fn persist_high_score(&self, score: u32) {
        log!("New high score: {}", score);
        if let Err(e) = self.store.set_high_score(score) {
            log!("Failed to persist high score {}: {}", score, e);
        }
    }

    fn summary(&self) -> SessionSummary {
        let state = self.session.state();
        SessionSummary {
            score: state.scores().score(),
            high_score: state.scores().high_score(),
            ticks: state.tick(),
            death_reason: state.game_over(),
        }
    }
}
