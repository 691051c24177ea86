use common::snake::GameSnapshot;
use eframe::egui;
use std::sync::{Arc, Mutex};

/// What the scheduler thread last published, read by the UI every frame.
pub struct SharedState {
    snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        *self.snapshot.lock().unwrap() = Some(snapshot);
        self.request_repaint();
    }

    pub fn get_snapshot(&self) -> Option<GameSnapshot> {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.context.lock().unwrap() = Some(ctx);
    }

    pub fn has_context(&self) -> bool {
        self.context.lock().unwrap().is_some()
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.context.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
            context: Arc::clone(&self.context),
        }
    }
}
