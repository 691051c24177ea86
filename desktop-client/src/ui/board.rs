use common::snake::{Direction, GameSnapshot, Point};
use eframe::egui;

use crate::config::DisplayConfig;

const BACKGROUND_TOP: egui::Color32 = egui::Color32::from_rgb(26, 35, 46);
const BACKGROUND_BOTTOM: egui::Color32 = egui::Color32::from_rgb(12, 16, 22);
const BODY_NEAR: egui::Color32 = egui::Color32::from_rgb(102, 187, 106);
const BODY_FAR: egui::Color32 = egui::Color32::from_rgb(27, 94, 32);
const HEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(129, 199, 132);
const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(229, 57, 53);
const TONGUE_COLOR: egui::Color32 = egui::Color32::from_rgb(244, 67, 54);

/// Paints one frame of the board and returns its response, sensing clicks.
pub fn paint_board(ui: &mut egui::Ui, snapshot: &GameSnapshot, display: &DisplayConfig) -> egui::Response {
    let cell = display.cell_size;
    let size = egui::vec2(
        snapshot.field_size.width as f32 * cell,
        snapshot.field_size.height as f32 * cell,
    );
    let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
    let rect = response.rect;

    paint_background(&painter, rect);
    if display.show_grid {
        paint_grid(&painter, rect, snapshot, display);
    }
    paint_food(&painter, rect, snapshot, cell);
    paint_body(&painter, rect, snapshot, cell);
    if let Some(head) = snapshot.head() {
        paint_head(&painter, cell_rect(rect, head, cell), snapshot.direction);
    }

    if snapshot.game_over.is_some() {
        paint_overlay(
            &painter,
            rect,
            "Game Over",
            &format!(
                "Score: {}   High score: {}\nPress Reset to play again",
                snapshot.score, snapshot.high_score
            ),
        );
    } else if snapshot.paused {
        paint_overlay(&painter, rect, "Paused", "Press Space or click the board to play");
    }

    response
}

fn cell_rect(board: egui::Rect, point: Point, cell: f32) -> egui::Rect {
    egui::Rect::from_min_size(
        board.min + egui::vec2(point.x as f32 * cell, point.y as f32 * cell),
        egui::vec2(cell, cell),
    )
}

fn paint_background(painter: &egui::Painter, rect: egui::Rect) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), BACKGROUND_TOP);
    mesh.colored_vertex(rect.right_top(), BACKGROUND_TOP);
    mesh.colored_vertex(rect.right_bottom(), BACKGROUND_BOTTOM);
    mesh.colored_vertex(rect.left_bottom(), BACKGROUND_BOTTOM);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

fn paint_grid(painter: &egui::Painter, rect: egui::Rect, snapshot: &GameSnapshot, display: &DisplayConfig) {
    let stroke = egui::Stroke::new(1.0, egui::Color32::WHITE.gamma_multiply(display.grid_opacity));
    let cell = display.cell_size;

    for x in 0..=snapshot.field_size.width {
        let offset = rect.left() + x as f32 * cell;
        painter.line_segment(
            [egui::pos2(offset, rect.top()), egui::pos2(offset, rect.bottom())],
            stroke,
        );
    }
    for y in 0..=snapshot.field_size.height {
        let offset = rect.top() + y as f32 * cell;
        painter.line_segment(
            [egui::pos2(rect.left(), offset), egui::pos2(rect.right(), offset)],
            stroke,
        );
    }
}

fn paint_food(painter: &egui::Painter, rect: egui::Rect, snapshot: &GameSnapshot, cell: f32) {
    let center = cell_rect(rect, snapshot.food, cell).center();
    let diameter = (cell - 2.0 + snapshot.food_pulse()).max(1.0);
    painter.circle_filled(center, diameter / 2.0, FOOD_COLOR);

    let highlight = center - egui::vec2(diameter * 0.15, diameter * 0.15);
    painter.circle_filled(
        highlight,
        diameter * 0.15,
        egui::Color32::WHITE.gamma_multiply(0.6),
    );
}

fn body_color(index: usize, len: usize) -> egui::Color32 {
    let t = if len > 1 {
        index as f32 / (len - 1) as f32
    } else {
        0.0
    };
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    egui::Color32::from_rgb(
        lerp(BODY_NEAR.r(), BODY_FAR.r()),
        lerp(BODY_NEAR.g(), BODY_FAR.g()),
        lerp(BODY_NEAR.b(), BODY_FAR.b()),
    )
}

fn paint_body(painter: &egui::Painter, rect: egui::Rect, snapshot: &GameSnapshot, cell: f32) {
    let len = snapshot.snake.len();
    for (index, segment) in snapshot.snake.iter().enumerate().skip(1) {
        painter.rect_filled(
            cell_rect(rect, *segment, cell).shrink(1.0),
            cell * 0.3,
            body_color(index, len),
        );
    }
}

/// A triangle pointing along `direction`, with two eyes and a forked tongue.
fn paint_head(painter: &egui::Painter, cell: egui::Rect, direction: Direction) {
    let (dx, dy) = direction.delta();
    let forward = egui::vec2(dx as f32, dy as f32);
    let side = egui::vec2(-forward.y, forward.x);
    let half = cell.width() / 2.0;
    let center = cell.center();

    let tip = center + forward * half;
    let back_left = center - forward * half + side * half;
    let back_right = center - forward * half - side * half;
    painter.add(egui::Shape::convex_polygon(
        vec![tip, back_left, back_right],
        HEAD_COLOR,
        egui::Stroke::NONE,
    ));

    let eye_radius = (half * 0.18).max(0.8);
    for eye_side in [side, -side] {
        let eye = center - forward * (half * 0.15) + eye_side * (half * 0.35);
        painter.circle_filled(eye, eye_radius, egui::Color32::BLACK);
    }

    let stroke = egui::Stroke::new((half * 0.15).max(1.0), TONGUE_COLOR);
    let fork = tip + forward * (half * 0.5);
    painter.line_segment([tip, fork], stroke);
    painter.line_segment([fork, fork + (forward + side) * (half * 0.2)], stroke);
    painter.line_segment([fork, fork + (forward - side) * (half * 0.2)], stroke);
}

fn paint_overlay(painter: &egui::Painter, rect: egui::Rect, title: &str, detail: &str) {
    painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(150));
    painter.text(
        rect.center() - egui::vec2(0.0, 20.0),
        egui::Align2::CENTER_CENTER,
        title,
        egui::FontId::proportional(32.0),
        egui::Color32::WHITE,
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 20.0),
        egui::Align2::CENTER_CENTER,
        detail,
        egui::FontId::proportional(16.0),
        egui::Color32::LIGHT_GRAY,
    );
}
