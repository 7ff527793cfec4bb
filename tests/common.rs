//! Common fixtures for the integration tests.
//!
//! Boards used for ad-hoc exploration live here as functions rather than
//! shared state.

#![allow(dead_code)]

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tictactoe_minimax::{Action, Board, Cell};

/// Parse a board string, panicking on malformed fixtures
pub fn board(s: &str) -> Board {
    s.parse()
        .unwrap_or_else(|e| panic!("bad fixture '{s}': {e}"))
}

/// The exploratory position: O in the top middle, X in the top right
///
/// ```text
/// _ O X
/// _ _ _
/// _ _ _
/// ```
pub fn exploration_board() -> Board {
    Board::from_rows([
        [Cell::Empty, Cell::O, Cell::X],
        [Cell::Empty, Cell::Empty, Cell::Empty],
        [Cell::Empty, Cell::Empty, Cell::Empty],
    ])
}

/// Two X marks on the top row and nothing else.
///
/// Not reachable by alternating play, but the engine still treats it as X to
/// move since two cells are occupied.
pub fn open_row_board() -> Board {
    Board::from_rows([
        [Cell::X, Cell::X, Cell::Empty],
        [Cell::Empty, Cell::Empty, Cell::Empty],
        [Cell::Empty, Cell::Empty, Cell::Empty],
    ])
}

/// Every board reachable from the empty board, stopping at terminal ones
pub fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) || board.is_terminal() {
            continue;
        }
        for action in board.legal_actions() {
            let next = board
                .apply_action(action)
                .expect("legal action should apply");
            if !seen.contains(&next) {
                stack.push(next);
            }
        }
    }

    seen
}

/// Play uniformly random moves from `start` until the game ends
pub fn random_playout(start: Board, rng: &mut StdRng) -> Vec<Board> {
    let mut boards = vec![start];
    let mut board = start;

    while !board.is_terminal() {
        let actions: Vec<Action> = board.legal_actions().into_iter().collect();
        let action = actions[rng.random_range(0..actions.len())];
        board = board.apply_action(action).expect("legal action should apply");
        boards.push(board);
    }

    boards
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
