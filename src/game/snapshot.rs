use serde::{Deserialize, Serialize};

use crate::board::{Pos, Stone};

/// Complete capture of a game for suspend/resume.
///
/// Stone lists are row-major so that equal boards produce equal snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub white: Vec<Pos>,
    pub black: Vec<Pos>,
    pub current_turn: Stone,
    pub game_over: bool,
    pub winner: Option<Stone>,
}

impl Snapshot {
    pub fn stone_count(&self) -> usize {
        self.white.len() + self.black.len()
    }
}
