//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 136);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_preview(black: bool) -> Color32 {
    if black {
        Color32::from_rgba_unmultiplied(20, 20, 20, 80)
    } else {
        Color32::from_rgba_unmultiplied(240, 240, 240, 80)
    }
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);

// Sizes
/// Stone diameter as a fraction of the line height
pub const STONE_RATIO: f32 = 0.75;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const WIN_LINE_WIDTH: f32 = 4.0;
