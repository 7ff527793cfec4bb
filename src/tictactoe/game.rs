//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Action, Board, Player};
use crate::error::{Error, Result};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Score from X's perspective, matching [`Board::utility`]
    pub fn utility(self) -> i32 {
        match self {
            GameOutcome::Win(Player::X) => 1,
            GameOutcome::Win(Player::O) => -1,
            GameOutcome::Draw => 0,
        }
    }

    /// Swap the winner perspective (X <-> O)
    pub fn swap_players(self) -> Self {
        match self {
            GameOutcome::Win(player) => GameOutcome::Win(player.opponent()),
            GameOutcome::Draw => GameOutcome::Draw,
        }
    }
}

/// A game with its move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Start recording from an arbitrary position
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: initial.outcome(),
        }
    }

    /// Play an action for whoever is to move
    ///
    /// # Errors
    ///
    /// [`Error::GameOver`] once the game has an outcome, otherwise whatever
    /// [`Board::apply_action`] rejects.
    pub fn play(&mut self, action: Action) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let current = self.current_state()?;
        let player = current.current_player().ok_or(Error::GameOver)?;
        let next = current.apply_action(action)?;

        self.moves.push(Move { action, player });
        self.outcome = next.outcome();

        Ok(())
    }

    /// Replay moves up to a given index (exclusive)
    fn replay_moves_until(&self, end_index: usize) -> Result<Board> {
        self.moves
            .iter()
            .take(end_index)
            .try_fold(self.initial, |board, m| board.apply_action(m.action))
    }

    /// Get current board
    ///
    /// # Errors
    ///
    /// Returns error if a recorded move no longer applies, which means the
    /// history was edited by hand.
    pub fn current_state(&self) -> Result<Board> {
        self.replay_moves_until(self.moves.len())
    }

    /// Every board from the initial one to the current one
    ///
    /// # Errors
    ///
    /// Same conditions as [`current_state`](Self::current_state).
    pub fn state_sequence(&self) -> Result<Vec<Board>> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.initial;
        states.push(board);

        for m in &self.moves {
            board = board.apply_action(m.action)?;
            states.push(board);
        }

        Ok(states)
    }

    /// Number of moves played
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_records_moves_and_outcome() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(Action::new(row, col)).unwrap();
        }

        assert_eq!(game.len(), 5);
        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
        assert_eq!(game.moves[0].player, Player::X);
        assert_eq!(game.moves[1].player, Player::O);
        assert_eq!(game.play(Action::new(2, 2)), Err(Error::GameOver));
    }

    #[test]
    fn invalid_move_leaves_history_untouched() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();

        let err = game.play(Action::new(1, 1)).unwrap_err();
        assert!(err.is_invalid_move());
        assert_eq!(game.len(), 1);
        assert_eq!(game.outcome, None);
    }

    #[test]
    fn state_sequence_includes_initial_board() {
        let mut game = Game::new();
        game.play(Action::new(0, 0)).unwrap();
        game.play(Action::new(2, 2)).unwrap();

        let states = game.state_sequence().unwrap();
        assert_eq!(states.len(), 3);
        assert!(states[0].is_empty());
        assert_eq!(states[2], game.current_state().unwrap());
        assert_eq!(states[2].occupied_count(), 2);
    }

    #[test]
    fn from_terminal_board_is_already_over() {
        let board: Board = "XXXOO____".parse().unwrap();
        let mut game = Game::from_board(board);
        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
        assert_eq!(game.play(Action::new(2, 2)), Err(Error::GameOver));
    }

    #[test]
    fn outcome_utility_matches_board_utility() {
        assert_eq!(GameOutcome::Win(Player::X).utility(), 1);
        assert_eq!(GameOutcome::Win(Player::O).utility(), -1);
        assert_eq!(GameOutcome::Draw.utility(), 0);
        assert_eq!(
            GameOutcome::Win(Player::X).swap_players(),
            GameOutcome::Win(Player::O)
        );
    }
}
