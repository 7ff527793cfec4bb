//! Optimal Tic-Tac-Toe via exhaustive minimax search
//!
//! This crate provides:
//! - Immutable 3x3 board representation with move generation and application
//! - Winner, terminal and utility detection
//! - Full-depth minimax search (no pruning, no memoization)
//! - Agents and a small match runner built on top of the engine
//! - The `tictactoe` command-line front end
//!
//! ```
//! use tictactoe_minimax::{apply_action, initial_state, is_terminal, minimax, utility};
//!
//! let mut board = initial_state();
//! while let Some(action) = minimax(&board) {
//!     board = apply_action(&board, action).unwrap();
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(utility(&board), 0);
//! ```

pub mod agent;
pub mod arena;
pub mod cli;
pub mod engine;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use agent::{Agent, AgentKind, MinimaxAgent, RandomAgent};
pub use engine::{
    apply_action, current_player, initial_state, is_terminal, legal_actions, utility, winner,
};
pub use error::{Error, MoveRejection, Result};
pub use search::{Analysis, SearchStats, action_values, minimax, optimal_actions};
pub use tictactoe::{Action, Board, Cell, Game, GameOutcome, Player};
