use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Black.opponent(), Stone::White);
}

#[test]
fn test_stone_default_is_white() {
    assert_eq!(Stone::default(), Stone::White);
    assert_eq!(Stone::White.to_string(), "White");
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(3, 7);
    assert_eq!(pos.x, 3);
    assert_eq!(pos.y, 7);
    assert_eq!(pos.to_string(), "(3, 7)");
}

#[test]
fn test_pos_within() {
    assert!(Pos::new(0, 0).is_within(10));
    assert!(Pos::new(9, 9).is_within(10));
    assert!(!Pos::new(-1, 0).is_within(10));
    assert!(!Pos::new(0, -1).is_within(10));
    assert!(!Pos::new(10, 0).is_within(10));
    assert!(!Pos::new(0, 10).is_within(10));
    assert!(!Pos::new(i32::MIN, i32::MAX).is_within(10));
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(4, 4);
    assert_eq!(pos.offset(1, -1, 2), Pos::new(6, 2));
    assert_eq!(pos.offset(-1, 0, 4), Pos::new(0, 4));
    // Saturates instead of wrapping
    assert_eq!(Pos::new(i32::MAX, 0).offset(1, 0, 1), Pos::new(i32::MAX, 0));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(1, 0);
    let pos3 = Pos::new(0, 1);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_board_place_and_get() {
    let mut board = Board::new(DEFAULT_BOARD_SIZE);
    assert!(board.is_board_empty());

    board.place_stone(Pos::new(2, 3), Stone::Black);
    assert_eq!(board.get(Pos::new(2, 3)), Some(Stone::Black));
    assert_eq!(board.get(Pos::new(3, 2)), None);
    assert!(!board.is_empty(Pos::new(2, 3)));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_board_stones_by_color() {
    let mut board = Board::new(DEFAULT_BOARD_SIZE);
    board.place_stone(Pos::new(5, 1), Stone::White);
    board.place_stone(Pos::new(0, 1), Stone::White);
    board.place_stone(Pos::new(4, 4), Stone::Black);

    assert_eq!(
        board.sorted_stones(Stone::White),
        vec![Pos::new(0, 1), Pos::new(5, 1)]
    );
    assert_eq!(board.sorted_stones(Stone::Black), vec![Pos::new(4, 4)]);
    assert_eq!(board.iter().count(), 3);
}

#[test]
fn test_board_contains() {
    let board = Board::new(3);
    assert!(board.contains(Pos::new(2, 2)));
    assert!(!board.contains(Pos::new(3, 0)));
}

#[test]
fn test_board_full_and_clear() {
    let mut board = Board::new(2);
    for x in 0..2 {
        for y in 0..2 {
            board.place_stone(Pos::new(x, y), Stone::White);
        }
    }
    assert!(board.is_full());

    board.clear();
    assert!(board.is_board_empty());
    assert_eq!(board.size(), 2);
}

#[test]
fn test_board_constants() {
    assert_eq!(DEFAULT_BOARD_SIZE, 10);
    assert_eq!(DEFAULT_WIN_LENGTH, 5);
}
