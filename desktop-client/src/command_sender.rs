use common::snake::GameCommand;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<GameCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<GameCommand>) -> Self {
        Self { tx }
    }

    /// Commands sent after the scheduler has stopped are dropped.
    pub fn send(&self, command: GameCommand) {
        let _ = self.tx.send(command);
    }
}
