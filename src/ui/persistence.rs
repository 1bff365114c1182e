//! Saving and restoring a game across application restarts
//!
//! The snapshot is split over a fixed set of storage keys, one per field.
//! `INSTANCE` marks that a game was stored at all.

use eframe::Storage;

use crate::{Pos, Snapshot, Stone};

pub const INSTANCE: &str = "gomoku.instance";
pub const INSTANCE_GAME_OVER: &str = "gomoku.instance_game_over";
pub const INSTANCE_WHITE_ARRAY: &str = "gomoku.instance_white_array";
pub const INSTANCE_BLACK_ARRAY: &str = "gomoku.instance_black_array";
pub const INSTANCE_TURN: &str = "gomoku.instance_turn";
pub const INSTANCE_WINNER: &str = "gomoku.instance_winner";

/// Stored alongside `INSTANCE` so a layout change can be detected.
const FORMAT_VERSION: u32 = 1;

/// Write `snapshot` under the fixed keys.
pub fn save_snapshot(storage: &mut dyn Storage, snapshot: &Snapshot) {
    eframe::set_value(storage, INSTANCE_GAME_OVER, &snapshot.game_over);
    eframe::set_value(storage, INSTANCE_WHITE_ARRAY, &snapshot.white);
    eframe::set_value(storage, INSTANCE_BLACK_ARRAY, &snapshot.black);
    eframe::set_value(storage, INSTANCE_TURN, &snapshot.current_turn);
    eframe::set_value(storage, INSTANCE_WINNER, &snapshot.winner);
    eframe::set_value(storage, INSTANCE, &FORMAT_VERSION);
    tracing::debug!(stones = snapshot.stone_count(), "game saved");
}

/// Read a snapshot back. `None` if nothing was stored or a key is missing
/// or unreadable.
pub fn load_snapshot(storage: &dyn Storage) -> Option<Snapshot> {
    let version: u32 = eframe::get_value(storage, INSTANCE)?;
    if version != FORMAT_VERSION {
        tracing::warn!(version, "ignoring saved game with unknown format");
        return None;
    }

    Some(Snapshot {
        game_over: eframe::get_value::<bool>(storage, INSTANCE_GAME_OVER)?,
        white: eframe::get_value::<Vec<Pos>>(storage, INSTANCE_WHITE_ARRAY)?,
        black: eframe::get_value::<Vec<Pos>>(storage, INSTANCE_BLACK_ARRAY)?,
        current_turn: eframe::get_value::<Stone>(storage, INSTANCE_TURN)?,
        winner: eframe::get_value::<Option<Stone>>(storage, INSTANCE_WINNER)?,
    })
}
