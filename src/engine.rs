//! Free-function view of the engine.
//!
//! Each function takes a board snapshot and returns a new value; they are thin
//! wrappers over the [`Board`] methods and [`crate::search`].

use std::collections::BTreeSet;

use crate::{
    Result,
    tictactoe::{Action, Board, Player},
};

pub use crate::search::minimax;

/// The empty starting board
pub fn initial_state() -> Board {
    Board::new()
}

pub fn current_player(board: &Board) -> Option<Player> {
    board.current_player()
}

pub fn legal_actions(board: &Board) -> BTreeSet<Action> {
    board.legal_actions()
}

/// Successor of `board` after `action`, leaving `board` untouched.
///
/// # Errors
///
/// [`Error::InvalidMove`](crate::Error::InvalidMove) for an occupied or
/// off-board target.
pub fn apply_action(board: &Board, action: Action) -> Result<Board> {
    board.apply_action(action)
}

pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}

pub fn is_terminal(board: &Board) -> bool {
    board.is_terminal()
}

pub fn utility(board: &Board) -> i32 {
    board.utility()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrappers_follow_a_short_game() {
        let mut board = initial_state();
        assert_eq!(current_player(&board), Some(Player::X));
        assert_eq!(legal_actions(&board).len(), 9);

        for (row, col) in [(1, 1), (0, 0), (0, 2), (2, 2), (2, 0)] {
            assert!(!is_terminal(&board));
            board = apply_action(&board, Action::new(row, col)).unwrap();
        }

        // O _ X
        // _ X _
        // X _ O
        assert_eq!(winner(&board), Some(Player::X));
        assert_eq!(legal_actions(&board).len(), 4);
        assert!(is_terminal(&board));
        assert_eq!(utility(&board), 1);
        assert_eq!(minimax(&board), None);
    }
}
