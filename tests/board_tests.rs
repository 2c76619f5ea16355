//! Board tests - placement, locking, compaction and overflow

use blockfall::core::{get_layout, Board};
use blockfall::types::{PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, HIDDEN_ROWS};

#[test]
fn test_board_new_empty() {
    let board = Board::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT);
    assert_eq!(board.width(), DEFAULT_BOARD_WIDTH);
    assert_eq!(board.height(), DEFAULT_BOARD_HEIGHT);
    assert_eq!(board.locked_count(), 0);
    assert!(!board.has_overflow());

    for y in 0..DEFAULT_BOARD_HEIGHT as i32 {
        for x in 0..DEFAULT_BOARD_WIDTH as i32 {
            assert_eq!(board.get(x, y), Some(false), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(10, 22);
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(10, 0), None);
    assert_eq!(board.get(0, 22), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(10, 22);
    assert!(board.set(5, 10, true));
    assert!(board.is_occupied(5, 10));
    assert!(board.set(5, 10, false));
    assert!(!board.is_occupied(5, 10));

    assert!(!board.set(-1, 0, true));
    assert!(!board.set(10, 0, true));
    assert!(!board.set(0, 22, true));
}

#[test]
fn test_placement_respects_walls_and_floor() {
    let board = Board::new(10, 22);
    let t = get_layout(PieceKind::T);

    assert!(board.is_valid_placement(&t, 0, 0));
    assert!(board.is_valid_placement(&t, 7, 0));
    assert!(!board.is_valid_placement(&t, -1, 0));
    assert!(!board.is_valid_placement(&t, 8, 0));

    // T occupies rows 0..=1 of its box.
    assert!(board.is_valid_placement(&t, 3, 20));
    assert!(!board.is_valid_placement(&t, 3, 21));
}

#[test]
fn test_placement_above_top_is_open() {
    let board = Board::new(10, 22);
    let i = get_layout(PieceKind::I).rotated_cw();
    // Vertical I: column 1 of the box, rows 0..=3.
    assert!(board.is_valid_placement(&i, 0, -3));
    assert!(board.is_valid_placement(&i, 0, -10));
    assert!(!board.is_valid_placement(&i, -3, -3));
}

#[test]
fn test_placement_blocked_by_locked_cell() {
    let mut board = Board::new(10, 22);
    board.set(4, 5, true);
    let o = get_layout(PieceKind::O);
    // O occupies (1..=2, 1..=2) within its box.
    assert!(!board.is_valid_placement(&o, 3, 3));
    assert!(!board.is_valid_placement(&o, 3, 4));
    assert!(board.is_valid_placement(&o, 4, 3));
}

#[test]
fn test_lock_writes_only_occupied_cells() {
    let mut board = Board::new(10, 22);
    let o = get_layout(PieceKind::O);
    assert_eq!(board.lock(&o, 3, 18), 4);
    assert_eq!(board.locked_count(), 4);
    for (x, y) in [(4, 19), (5, 19), (4, 20), (5, 20)] {
        assert!(board.is_occupied(x, y));
    }
    assert!(!board.is_occupied(3, 18));
}

#[test]
fn test_single_full_row_compacts() {
    let mut board = Board::new(10, 22);
    board.fill_row_except(21, &[]);
    board.set(0, 20, true);

    let rows = board.find_completed_rows();
    assert_eq!(rows, vec![21]);
    assert_eq!(board.compact(&rows), 1);

    assert!(board.is_occupied(0, 21));
    assert_eq!(board.locked_count(), 1);
    assert_eq!(board.height(), 22);
    assert!(board.rows().take(21).all(|r| r.iter().all(|&c| !c)));
}

#[test]
fn test_non_adjacent_rows_compact_in_order() {
    let mut board = Board::new(10, 22);
    board.fill_row_except(21, &[]);
    board.fill_row_except(20, &[3]);
    board.fill_row_except(19, &[]);
    board.set(7, 18, true);

    let rows = board.find_completed_rows();
    assert_eq!(rows, vec![19, 21]);
    assert_eq!(board.compact(&rows), 2);

    // Row 20 lands at 21, row 18 at 20.
    assert!(!board.is_occupied(3, 21));
    assert!(board.is_occupied(0, 21));
    assert!(board.is_occupied(7, 20));
    assert_eq!(board.locked_count(), 10);
}

#[test]
fn test_four_full_rows() {
    let mut board = Board::new(10, 22);
    for y in 18..22 {
        board.fill_row_except(y, &[]);
    }
    assert_eq!(board.clear_full_rows(), vec![18, 19, 20, 21]);
    assert_eq!(board.locked_count(), 0);
}

#[test]
fn test_partial_row_does_not_clear() {
    let mut board = Board::new(10, 22);
    board.fill_row_except(21, &[9]);
    assert!(!board.is_row_full(21));
    assert!(board.find_completed_rows().is_empty());
}

#[test]
fn test_full_buffer_row_never_clears() {
    let mut board = Board::new(10, 22);
    board.fill_row_except(HIDDEN_ROWS - 1, &[]);
    assert!(board.is_row_full(HIDDEN_ROWS - 1));
    assert!(board.find_completed_rows().is_empty());
    assert!(board.has_overflow());
}

#[test]
fn test_overflow_only_counts_buffer_rows() {
    let mut board = Board::new(10, 22);
    board.set(0, HIDDEN_ROWS as i32, true);
    assert!(!board.has_overflow());
    board.set(9, 0, true);
    assert!(board.has_overflow());
    board.set(9, 0, false);
    assert!(!board.has_overflow());
}
