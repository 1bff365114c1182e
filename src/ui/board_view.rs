//! Board rendering and pointer mapping for the Gomoku GUI

use crate::{GameBoard, Pos, Stone};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Map a pointer position, relative to the board's top-left corner, to a cell.
///
/// Each cell is a `line_height` square, so the cell index is plain integer
/// division. Anything outside the `size`x`size` panel maps to `None`.
pub fn pixel_to_cell(x: f32, y: f32, line_height: f32, size: usize) -> Option<Pos> {
    // NaN fails every comparison
    let in_panel = line_height > 0.0 && x >= 0.0 && y >= 0.0;
    if !in_panel {
        return None;
    }
    let pos = Pos::new((x / line_height) as i32, (y / line_height) as i32);
    pos.is_within(size).then_some(pos)
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Side of one cell; the panel is `size` cells wide
    line_height: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            line_height: 40.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any.
    ///
    /// Clicks are swallowed once the game is over.
    pub fn show(&mut self, ui: &mut egui::Ui, game: &GameBoard) -> Option<Pos> {
        let available_size = ui.available_size();
        let panel_width = available_size.x.min(available_size.y).max(1.0);
        self.line_height = panel_width / game.size() as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::splat(panel_width), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter, game.size());

        // White first, then Black
        for pos in game.stones(Stone::White) {
            self.draw_stone(&painter, pos, Stone::White);
        }
        for pos in game.stones(Stone::Black) {
            self.draw_stone(&painter, pos, Stone::Black);
        }

        if let Some(line) = game.winning_line() {
            self.draw_winning_line(&painter, &line);
        }

        if game.is_game_over() {
            return None;
        }

        let hovered = response.hover_pos().and_then(|p| self.cell_at(p, game.size()));
        if let Some(pos) = hovered {
            if game.stone_at(pos).is_none() {
                self.draw_hover_preview(&painter, pos, game.current_turn());
            }
        }

        if response.clicked() {
            response
                .interact_pointer_pos()
                .and_then(|p| self.cell_at(p, game.size()))
        } else {
            None
        }
    }

    /// Draw `size` horizontal and vertical lines through the cell centres
    fn draw_grid(&self, painter: &Painter, size: usize) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let lh = self.line_height;
        let start = lh / 2.0;
        let end = self.board_rect.width() - lh / 2.0;

        for i in 0..size {
            let offset = (0.5 + i as f32) * lh;

            // Horizontal line
            let a = self.board_rect.min + Vec2::new(start, offset);
            let b = self.board_rect.min + Vec2::new(end, offset);
            painter.line_segment([a, b], stroke);

            // Vertical line
            let a = self.board_rect.min + Vec2::new(offset, start);
            let b = self.board_rect.min + Vec2::new(offset, end);
            painter.line_segment([a, b], stroke);
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.cell_center(pos);
        let radius = self.line_height * STONE_RATIO / 2.0;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::splat(-radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
        }
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.cell_center(pair[0]), self.cell_center(pair[1])], stroke);
        }

        let radius = self.line_height * STONE_RATIO / 2.0 + 3.0;
        for &pos in line {
            painter.circle_stroke(self.cell_center(pos), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone) {
        let radius = self.line_height * STONE_RATIO / 2.0;
        painter.circle_filled(
            self.cell_center(pos),
            radius,
            hover_preview(turn == Stone::Black),
        );
    }

    /// Convert screen coordinates to a board cell
    pub fn cell_at(&self, screen_pos: Pos2, size: usize) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        pixel_to_cell(relative.x, relative.y, self.line_height, size)
    }

    /// Centre of a cell in screen coordinates
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + (pos.x as f32 + 0.5) * self.line_height;
        let y = self.board_rect.min.y + (pos.y as f32 + 0.5) * self.line_height;
        Pos2::new(x, y)
    }
}
