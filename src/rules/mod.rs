//! Game rules: placement validation and win detection

pub mod win;

// Re-exports for convenient access
pub use win::{has_won, run_length};

use crate::board::{Board, Player, Pos};
use crate::error::MoveError;

/// Check that `pos` is an empty interior cell
pub fn validate_move(board: &Board, pos: Pos) -> Result<(), MoveError> {
    if !board.contains(pos) {
        return Err(MoveError::OutOfBounds(pos));
    }
    if !board.is_empty(pos) {
        return Err(MoveError::Occupied(pos));
    }
    Ok(())
}

#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    validate_move(board, pos).is_ok()
}

/// Place a stone, returning the new board. The input board is left untouched.
pub fn apply_move(board: &Board, pos: Pos, player: Player) -> Result<Board, MoveError> {
    validate_move(board, pos)?;
    Ok(board.with_stone(pos, player))
}

/// Win check for the UI after any placement
#[inline]
pub fn is_terminal(board: &Board, pos: Pos, player: Player, win_count: usize) -> bool {
    has_won(board, pos, player, win_count)
}
