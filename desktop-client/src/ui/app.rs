use common::snake::{GameCommand, GameSnapshot, InputMode};
use eframe::egui;

use super::board::paint_board;
use super::input::{key_commands, PointerTracker};
use crate::command_sender::CommandSender;
use crate::config::DisplayConfig;
use crate::state::SharedState;

pub struct SnakeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    display: DisplayConfig,
    pointer: PointerTracker,
}

impl SnakeApp {
    pub fn new(shared_state: SharedState, command_sender: CommandSender, display: DisplayConfig) -> Self {
        Self {
            shared_state,
            command_sender,
            display,
            pointer: PointerTracker::new(),
        }
    }

    fn handle_keys(&self, ctx: &egui::Context) {
        let events = ctx.input(|i| i.events.clone());
        for command in key_commands(&events) {
            self.command_sender.send(command);
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui, snapshot: Option<&GameSnapshot>) {
        ui.horizontal(|ui| {
            if ui.button("Start").clicked() {
                self.command_sender.send(GameCommand::Start);
            }

            let pause_label = match snapshot {
                Some(s) if s.paused => "Resume",
                _ => "Pause",
            };
            if ui.button(pause_label).clicked() {
                self.command_sender.send(GameCommand::TogglePause);
            }

            if ui.button("Reset").clicked() {
                self.pointer.forget();
                self.command_sender.send(GameCommand::Reset);
            }

            ui.separator();

            if let Some(s) = snapshot {
                ui.label(format!("Score: {}", s.score));
                ui.label(format!("High score: {}", s.high_score));
                ui.separator();
                ui.label(mode_label(s.input_mode));
            }
        });
    }

    fn render_board(&mut self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let response = paint_board(ui, snapshot, &self.display);

        let offset = response.hover_pos().map(|pos| pos - response.rect.min);
        if let Some(command) = self.pointer.update(offset, self.display.cell_size, &snapshot.field_size) {
            self.command_sender.send(command);
        }

        if response.clicked() {
            self.command_sender.send(GameCommand::TogglePause);
        }
    }
}

fn mode_label(mode: InputMode) -> &'static str {
    match mode {
        InputMode::KeyboardNormal => "Keyboard",
        InputMode::KeyboardAccelerated => "Keyboard (fast)",
        InputMode::Pointer => "Mouse",
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        self.handle_keys(ctx);
        let snapshot = self.shared_state.get_snapshot();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.render_controls(ui, snapshot.as_ref());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(snapshot) = &snapshot else {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
                return;
            };
            ui.vertical_centered(|ui| {
                self.render_board(ui, snapshot);
            });
        });
    }
}
