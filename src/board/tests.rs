use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::One.opponent(), Player::Two);
    assert_eq!(Player::Two.opponent(), Player::One);
}

#[test]
fn test_player_sign() {
    assert_eq!(Player::One.sign(), 1);
    assert_eq!(Player::Two.sign(), -1);
    assert_eq!(Player::One.sign(), -Player::One.opponent().sign());
}

#[test]
fn test_cell_values() {
    assert_eq!(Cell::Empty.value(), 0);
    assert_eq!(Cell::Stone(Player::One).value(), 1);
    assert_eq!(Cell::Stone(Player::Two).value(), -1);
    assert_eq!(Cell::Blocked.value(), 2);
}

#[test]
fn test_new_board_has_blocked_border() {
    let board = Board::new(10, 10);
    for i in 0..12u8 {
        assert_eq!(board.get(Pos::new(0, i)), Cell::Blocked);
        assert_eq!(board.get(Pos::new(11, i)), Cell::Blocked);
        assert_eq!(board.get(Pos::new(i, 0)), Cell::Blocked);
        assert_eq!(board.get(Pos::new(i, 11)), Cell::Blocked);
    }
    assert_eq!(board.positions().count(), 100);
    assert!(board.positions().all(|p| board.get(p) == Cell::Empty));
}

#[test]
fn test_rectangular_board() {
    let board = Board::new(4, 7);
    assert_eq!(board.capacity(), 28);
    assert!(board.contains(Pos::new(4, 7)));
    assert!(!board.contains(Pos::new(5, 7)));
    assert!(!board.contains(Pos::new(4, 8)));
    assert_eq!(board.get(Pos::new(5, 8)), Cell::Blocked);
}

#[test]
fn test_place_stone_and_copy() {
    let board = Board::new(10, 10);
    let next = board.with_stone(Pos::new(5, 5), Player::One);
    assert_eq!(next.get(Pos::new(5, 5)), Cell::Stone(Player::One));
    assert!(board.is_empty(Pos::new(5, 5)), "source board must be untouched");
    assert_eq!(next.stone_count(), 1);
    assert!(board.is_board_empty());
}

#[test]
fn test_border_is_never_empty() {
    let board = Board::new(10, 10);
    assert!(!board.is_empty(Pos::new(0, 5)));
    assert!(!board.is_empty(Pos::new(5, 11)));
    assert!(board.is_empty(Pos::new(1, 1)));
}

#[test]
fn test_get_at_outside_grid() {
    let board = Board::new(10, 10);
    assert_eq!(board.get_at(-1, 3), Cell::Blocked);
    assert_eq!(board.get_at(3, 12), Cell::Blocked);
    assert_eq!(board.get_at(3, 3), Cell::Empty);
}

#[test]
fn test_center() {
    assert_eq!(Board::new(10, 10).center(), Pos::new(5, 5));
    assert_eq!(Board::new(15, 15).center(), Pos::new(8, 8));
}

#[test]
fn test_cells_along_row_includes_sentinels() {
    let mut board = Board::new(10, 10);
    board.place_stone(Pos::new(3, 2), Player::Two);
    let cells = board.cells_along(Pos::new(3, 1), Direction::Horizontal);
    assert_eq!(cells.len(), 12);
    assert_eq!(cells[0], Cell::Blocked);
    assert_eq!(cells[2], Cell::Stone(Player::Two));
    assert_eq!(cells[11], Cell::Blocked);
}

#[test]
fn test_cells_along_diagonal_up() {
    let board = Board::new(10, 10);
    // ↗ from (10, 1) runs to (1, 10)
    let cells = board.cells_along(Pos::new(10, 1), Direction::DiagonalUp);
    assert_eq!(cells.len(), 12);
    assert_eq!(cells.first(), Some(&Cell::Blocked));
    assert_eq!(cells.last(), Some(&Cell::Blocked));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(1, 1);
    let pos2 = Pos::new(1, 2);
    let pos3 = Pos::new(2, 1);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_shifted() {
    let pos = Pos::new(5, 5);
    assert_eq!(pos.shifted(0, 1, 3), Pos::new(5, 8));
    assert_eq!(pos.shifted(-1, 1, 2), Pos::new(3, 7));
    assert_eq!(pos.shifted(1, 1, -4), Pos::new(1, 1));
}
