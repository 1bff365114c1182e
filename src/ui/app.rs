//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::persistence;
use super::theme::*;
use crate::{GameBoard, GameConfig, GameStatus, Placement, Stone};

/// Main Gomoku application
pub struct GomokuApp {
    game: GameBoard,
    board_view: BoardView,
    message: Option<String>,
}

impl GomokuApp {
    /// Create the app, resuming a stored game when the host has one.
    pub fn new(cc: &eframe::CreationContext<'_>, config: GameConfig) -> anyhow::Result<Self> {
        let mut game = GameBoard::new(config)?;

        if let Some(snapshot) = cc.storage.and_then(persistence::load_snapshot) {
            if let Err(err) = game.restore(&snapshot) {
                tracing::warn!(%err, "discarding saved game");
            }
        }

        Ok(Self {
            game,
            board_view: BoardView::default(),
            message: None,
        })
    }

    fn restart(&mut self) {
        self.game.reset();
        self.message = None;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Restart (N)").clicked() {
                        self.restart();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.game.size();
                    ui.label(format!(
                        "{size}x{size} - {} in a row",
                        self.game.win_length()
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_stones_card(ui);

                if let GameStatus::Over { winner } = self.game.status() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("五子棋").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.game.current_turn();
            let (stone_char, accent, glyph) = match turn {
                Stone::Black => ("●", BLACK_STONE_HIGHLIGHT, TEXT_PRIMARY),
                Stone::White => ("○", WHITE_STONE, BLACK_STONE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    glyph,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(turn.name().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    let (status, color) = if self.game.is_game_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("To move", STATUS_OK)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    fn render_stones_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STONES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for stone in [Stone::White, Stone::Black] {
                let count = self.game.stones(stone).count();
                ui.horizontal(|ui| {
                    ui.label(RichText::new(stone.name()).size(12.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(count.to_string()).size(14.0).color(TEXT_PRIMARY));
                    });
                });
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: Stone) {
        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("{} WINS!", winner.name().to_uppercase()))
                            .size(18.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                    ui.add_space(12.0);
                    if ui.button(RichText::new("Restart").size(14.0).strong()).clicked() {
                        self.restart();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            if let Some(pos) = self.board_view.show(ui, &self.game) {
                self.message = match self.game.place(pos) {
                    Ok(Placement {
                        winner: Some(winner),
                        ..
                    }) => Some(format!("{winner} wins!")),
                    Ok(_) => None,
                    Err(rejection) => Some(rejection.to_string()),
                };
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.restart();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        persistence::save_snapshot(storage, &self.game.snapshot());
    }
}
