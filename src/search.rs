//! Exhaustive minimax search
//!
//! X maximizes utility and O minimizes it. Every call walks the full game tree
//! below the given board: there is no pruning, no memoization and no depth
//! limit, and nothing is kept between calls. Recursion depth is bounded by the
//! number of empty cells, so at most nine frames.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::tictactoe::{Action, Board, Player};

/// Counters collected while walking the tree
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Boards visited, root excluded
    pub nodes: u64,
    /// Visited boards that ended the game
    pub terminals: u64,
}

/// Result of searching one position
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Player to move at the root, `None` on a full board
    pub player: Option<Player>,
    /// Minimax value of every legal action, empty on terminal boards
    pub values: BTreeMap<Action, i32>,
    pub stats: SearchStats,
}

impl Analysis {
    /// Best value reachable by the player to move
    pub fn best_value(&self) -> Option<i32> {
        match self.player? {
            Player::X => self.values.values().copied().max(),
            Player::O => self.values.values().copied().min(),
        }
    }

    /// The first action, in row-major order, achieving the best value
    pub fn best_action(&self) -> Option<Action> {
        let is_x = self.player? == Player::X;
        let mut best: Option<(Action, i32)> = None;

        for (&action, &value) in &self.values {
            let better = match best {
                None => true,
                Some((_, best_value)) => {
                    (is_x && value > best_value) || (!is_x && value < best_value)
                }
            };
            if better {
                best = Some((action, value));
            }
        }

        best.map(|(action, _)| action)
    }

    /// Every action tied for the best value, in row-major order
    pub fn optimal_actions(&self) -> Vec<Action> {
        let Some(best_value) = self.best_value() else {
            return Vec::new();
        };
        self.values
            .iter()
            .filter(|&(_, &value)| value == best_value)
            .map(|(&action, _)| action)
            .collect()
    }
}

/// Legal successors of a board paired with the action producing them
fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    board
        .legal_actions()
        .into_iter()
        .filter_map(move |action| board.apply_action(action).ok().map(|next| (action, next)))
}

fn max_value_counted(board: &Board, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;
    if board.is_terminal() {
        stats.terminals += 1;
        return board.utility();
    }

    let mut v = i32::MIN;
    for (_, next) in successors(board) {
        v = v.max(min_value_counted(&next, stats));
    }
    v
}

fn min_value_counted(board: &Board, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;
    if board.is_terminal() {
        stats.terminals += 1;
        return board.utility();
    }

    let mut v = i32::MAX;
    for (_, next) in successors(board) {
        v = v.min(max_value_counted(&next, stats));
    }
    v
}

/// Value of a board when the side to move maximizes.
///
/// Terminal boards score their [`utility`](Board::utility); otherwise the
/// maximum over legal actions of [`min_value`] of the successor.
pub fn max_value(board: &Board) -> i32 {
    max_value_counted(board, &mut SearchStats::default())
}

/// Value of a board when the side to move minimizes.
pub fn min_value(board: &Board) -> i32 {
    min_value_counted(board, &mut SearchStats::default())
}

/// Game-theoretic value of a position for whoever is to move
pub fn value(board: &Board) -> i32 {
    match board.current_player() {
        _ if board.is_terminal() => board.utility(),
        Some(Player::X) => max_value(board),
        Some(Player::O) => min_value(board),
        None => board.utility(),
    }
}

/// Search every legal action of `board`.
///
/// After X moves, O replies, so X's successors are valued with
/// [`min_value`]; after O moves they are valued with [`max_value`].
pub fn analyze(board: &Board) -> Analysis {
    let mut stats = SearchStats::default();
    let mut values = BTreeMap::new();

    let player = board.current_player();
    if board.is_terminal() {
        return Analysis {
            player,
            values,
            stats,
        };
    }

    for (action, next) in successors(board) {
        let value = match player {
            Some(Player::X) => min_value_counted(&next, &mut stats),
            Some(Player::O) => max_value_counted(&next, &mut stats),
            None => next.utility(),
        };
        trace!(%action, value, "evaluated root action");
        values.insert(action, value);
    }

    debug!(
        board = %board.encode(),
        nodes = stats.nodes,
        terminals = stats.terminals,
        "minimax search finished"
    );

    Analysis {
        player,
        values,
        stats,
    }
}

/// Minimax value of every legal action, empty on terminal boards
pub fn action_values(board: &Board) -> BTreeMap<Action, i32> {
    analyze(board).values
}

/// Optimal action for the player to move, `None` when the game is over.
///
/// When several actions share the best value, the first one in row-major
/// order is returned; any of them is equally optimal.
///
/// ```
/// use tictactoe_minimax::{Action, Board, minimax};
///
/// let board: Board = "XX_OO____".parse().unwrap();
/// assert_eq!(minimax(&board), Some(Action::new(0, 2)));
///
/// let finished: Board = "XXXOO____".parse().unwrap();
/// assert_eq!(minimax(&finished), None);
/// ```
pub fn minimax(board: &Board) -> Option<Action> {
    analyze(board).best_action()
}

/// All actions tied for the optimal value, in row-major order
pub fn optimal_actions(board: &Board) -> Vec<Action> {
    analyze(board).optimal_actions()
}
