use common::snake::{FieldSize, GameCommand, KeyCode, Point};
use eframe::egui;

pub fn map_key(key: egui::Key) -> Option<KeyCode> {
    match key {
        egui::Key::ArrowUp => Some(KeyCode::ArrowUp),
        egui::Key::ArrowDown => Some(KeyCode::ArrowDown),
        egui::Key::ArrowLeft => Some(KeyCode::ArrowLeft),
        egui::Key::ArrowRight => Some(KeyCode::ArrowRight),
        egui::Key::W => Some(KeyCode::W),
        egui::Key::A => Some(KeyCode::A),
        egui::Key::S => Some(KeyCode::S),
        egui::Key::D => Some(KeyCode::D),
        egui::Key::Space => Some(KeyCode::Space),
        _ => None,
    }
}

/// Key presses and releases for the keys the game knows. Auto-repeat is
/// dropped so a held key produces exactly one press.
pub fn key_commands(events: &[egui::Event]) -> Vec<GameCommand> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                pressed,
                repeat: false,
                ..
            } => map_key(*key).map(|code| {
                if *pressed {
                    GameCommand::KeyDown(code)
                } else {
                    GameCommand::KeyUp(code)
                }
            }),
            _ => None,
        })
        .collect()
}

/// Turns hover positions into pointer commands, only when the hovered cell
/// changes.
pub struct PointerTracker {
    last_cell: Option<Point>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self { last_cell: None }
    }

    /// `offset` is the hover position relative to the board's top-left
    /// corner, `None` when the pointer is not over the board.
    pub fn update(
        &mut self,
        offset: Option<egui::Vec2>,
        cell_size: f32,
        field_size: &FieldSize,
    ) -> Option<GameCommand> {
        let cell = offset.and_then(|o| Point::from_pixels(o.x, o.y, cell_size, field_size));
        if cell == self.last_cell {
            return None;
        }
        self.last_cell = cell;
        Some(match cell {
            Some(point) => GameCommand::PointerMoved(point),
            None => GameCommand::PointerLeft,
        })
    }

    /// Forgets the last cell so the next hover is reported again.
    pub fn forget(&mut self) {
        self.last_cell = None;
    }
}
