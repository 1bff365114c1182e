//! Win condition checking
//!
//! A colour wins with `win_length` or more of its stones in a row along one
//! of the four axis families. Overlines count.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 axis families)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal "\"
    (1, -1), // Diagonal "/"
];

/// Count stones of `color` reachable from `pos` along `(dx, dy)`.
///
/// Stops at the first cell that does not hold `color` (off-board included)
/// or after `limit` steps.
#[inline]
fn walk(board: &Board, pos: Pos, (dx, dy): (i32, i32), color: Stone, limit: usize) -> usize {
    (1..=limit as i32)
        .take_while(|&i| board.get(pos.offset(dx, dy, i)) == Some(color))
        .count()
}

/// Fast win check around a freshly placed stone.
///
/// Only the four lines through `pos` are scanned. Both directions of an axis
/// add to one count, so a run completed from the middle is found.
#[inline]
pub fn has_run_at_pos(board: &Board, pos: Pos, color: Stone, win_length: usize) -> bool {
    let reach = win_length.saturating_sub(1);
    DIRECTIONS.iter().any(|&(dx, dy)| {
        let mut count = 1;
        count += walk(board, pos, (dx, dy), color, reach);
        if count >= win_length {
            return true;
        }
        count += walk(board, pos, (-dx, -dy), color, reach);
        count >= win_length
    })
}

/// Find the winning run through `pos`, if any.
///
/// Returns the run ordered from its negative end, `pos` included.
pub fn find_run_at_pos(board: &Board, pos: Pos, color: Stone, win_length: usize) -> Option<Vec<Pos>> {
    if board.get(pos) != Some(color) {
        return None;
    }
    let reach = win_length.saturating_sub(1);

    for &(dx, dy) in &DIRECTIONS {
        let back = walk(board, pos, (-dx, -dy), color, reach) as i32;
        let forward = walk(board, pos, (dx, dy), color, reach) as i32;

        if (back + forward + 1) as usize >= win_length {
            let line = (-back..=forward).map(|i| pos.offset(dx, dy, i)).collect();
            return Some(line);
        }
    }
    None
}

/// Find a winning run of `color` anywhere on the board.
///
/// Scans every stone of that colour, so it works without knowing the last
/// move (e.g. on a restored board).
pub fn find_run(board: &Board, color: Stone, win_length: usize) -> Option<Vec<Pos>> {
    board
        .sorted_stones(color)
        .into_iter()
        .find_map(|pos| find_run_at_pos(board, pos, color, win_length))
}

/// Check for a winner
///
/// Returns `Some(Stone)` if either colour has a run, White checked first.
pub fn check_winner(board: &Board, win_length: usize) -> Option<Stone> {
    [Stone::White, Stone::Black]
        .into_iter()
        .find(|&stone| find_run(board, stone, win_length).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(i32, i32)], color: Stone) -> Board {
        let mut board = Board::new(10);
        for &(x, y) in stones {
            board.place_stone(Pos::new(x, y), color);
        }
        board
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let board = board_with(&[(0, 9), (1, 9), (2, 9), (3, 9), (4, 9)], Stone::Black);
        assert!(has_run_at_pos(&board, Pos::new(4, 9), Stone::Black, 5));
        assert!(!has_run_at_pos(&board, Pos::new(4, 9), Stone::White, 5));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = board_with(&[(9, 0), (9, 1), (9, 2), (9, 3), (9, 4)], Stone::Black);
        assert!(has_run_at_pos(&board, Pos::new(9, 0), Stone::Black, 5));
    }

    #[test]
    fn test_five_in_row_backslash_diagonal() {
        let board = board_with(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)], Stone::White);
        assert!(has_run_at_pos(&board, Pos::new(2, 2), Stone::White, 5));
    }

    #[test]
    fn test_five_in_row_slash_diagonal() {
        // From (8, 4) up to (4, 8)
        let board = board_with(&[(4, 8), (5, 7), (6, 6), (7, 5), (8, 4)], Stone::White);
        assert!(has_run_at_pos(&board, Pos::new(8, 4), Stone::White, 5));
        assert!(has_run_at_pos(&board, Pos::new(4, 8), Stone::White, 5));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let board = board_with(&[(0, 0), (1, 0), (2, 0), (3, 0)], Stone::Black);
        assert!(!has_run_at_pos(&board, Pos::new(3, 0), Stone::Black, 5));
    }

    #[test]
    fn test_run_spanning_both_sides() {
        // Placed stone at (2, 0) with two on each side
        let board = board_with(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)], Stone::White);
        assert!(has_run_at_pos(&board, Pos::new(2, 0), Stone::White, 5));

        // Three left, one right
        let board = board_with(&[(2, 5), (3, 5), (4, 5), (5, 5), (6, 5)], Stone::White);
        assert!(has_run_at_pos(&board, Pos::new(5, 5), Stone::White, 5));
    }

    #[test]
    fn test_gap_breaks_run() {
        let board = board_with(&[(0, 0), (1, 0), (3, 0), (4, 0), (5, 0)], Stone::Black);
        assert!(!has_run_at_pos(&board, Pos::new(1, 0), Stone::Black, 5));
        assert!(!has_run_at_pos(&board, Pos::new(3, 0), Stone::Black, 5));
    }

    #[test]
    fn test_opponent_stone_breaks_run() {
        let mut board = board_with(&[(0, 0), (1, 0), (3, 0), (4, 0)], Stone::Black);
        board.place_stone(Pos::new(2, 0), Stone::White);
        assert!(!has_run_at_pos(&board, Pos::new(2, 0), Stone::White, 5));
        assert!(!has_run_at_pos(&board, Pos::new(1, 0), Stone::Black, 5));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let board = board_with(&[(0, 3), (1, 3), (2, 3), (3, 3), (4, 3), (5, 3)], Stone::Black);
        assert!(has_run_at_pos(&board, Pos::new(5, 3), Stone::Black, 5));
        assert!(has_run_at_pos(&board, Pos::new(2, 3), Stone::Black, 5));
    }

    #[test]
    fn test_run_at_board_edge_and_corner() {
        let board = board_with(&[(9, 5), (9, 6), (9, 7), (9, 8), (9, 9)], Stone::White);
        assert!(has_run_at_pos(&board, Pos::new(9, 9), Stone::White, 5));

        let board = board_with(&[(5, 5), (6, 6), (7, 7), (8, 8), (9, 9)], Stone::Black);
        assert!(has_run_at_pos(&board, Pos::new(9, 9), Stone::Black, 5));
    }

    #[test]
    fn test_custom_win_length() {
        let board = board_with(&[(0, 0), (1, 1), (2, 2)], Stone::White);
        assert!(has_run_at_pos(&board, Pos::new(1, 1), Stone::White, 3));
        assert!(!has_run_at_pos(&board, Pos::new(1, 1), Stone::White, 4));

        let board = board_with(&[(7, 7)], Stone::Black);
        assert!(has_run_at_pos(&board, Pos::new(7, 7), Stone::Black, 1));
    }

    #[test]
    fn test_find_run_at_pos_returns_ordered_line() {
        let board = board_with(&[(1, 0), (2, 0), (3, 0), (4, 0), (5, 0)], Stone::White);
        let line = find_run_at_pos(&board, Pos::new(3, 0), Stone::White, 5).unwrap();
        assert_eq!(
            line,
            vec![
                Pos::new(1, 0),
                Pos::new(2, 0),
                Pos::new(3, 0),
                Pos::new(4, 0),
                Pos::new(5, 0),
            ]
        );
    }

    #[test]
    fn test_find_run_at_pos_wrong_color() {
        let board = board_with(&[(1, 0), (2, 0), (3, 0), (4, 0), (5, 0)], Stone::White);
        assert!(find_run_at_pos(&board, Pos::new(3, 0), Stone::Black, 5).is_none());
        assert!(find_run_at_pos(&board, Pos::new(6, 0), Stone::White, 5).is_none());
    }

    #[test]
    fn test_find_run_scans_whole_board() {
        let mut board = board_with(&[(3, 2), (4, 3), (5, 4), (6, 5), (7, 6)], Stone::Black);
        board.place_stone(Pos::new(0, 0), Stone::Black);
        board.place_stone(Pos::new(9, 9), Stone::White);

        let line = find_run(&board, Stone::Black, 5).unwrap();
        assert_eq!(line.len(), 5);
        assert_eq!(line[0], Pos::new(3, 2));
        assert_eq!(line[4], Pos::new(7, 6));
        assert!(find_run(&board, Stone::White, 5).is_none());
    }

    #[test]
    fn test_check_winner() {
        let board = Board::new(10);
        assert_eq!(check_winner(&board, 5), None);

        let board = board_with(&[(0, 4), (1, 4), (2, 4), (3, 4), (4, 4)], Stone::Black);
        assert_eq!(check_winner(&board, 5), Some(Stone::Black));
    }
}
