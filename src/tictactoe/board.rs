//! Board state representation and basic operations

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{game::GameOutcome, lines::LineAnalyzer};
use crate::error::{Error, MoveRejection, Result};

/// Number of rows (and columns) on the board
pub const SIZE: usize = 3;

/// Number of cells on the board
pub const CELLS: usize = SIZE * SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '_' | '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A move target, `(row, col)` with both coordinates nominally in 0-2.
///
/// Actions are not bound to a board; whether one is legal depends on the
/// board it is applied to. Ordering is by row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    /// Row-major cell index (0-8), or `None` when out of range
    pub fn index(self) -> Option<usize> {
        (self.row < SIZE && self.col < SIZE).then(|| self.row * SIZE + self.col)
    }

    /// Action for a row-major cell index
    pub fn from_index(index: usize) -> Self {
        Action {
            row: index / SIZE,
            col: index % SIZE,
        }
    }

    fn rejected(self, reason: MoveRejection) -> Error {
        Error::InvalidMove {
            row: self.row,
            col: self.col,
            reason,
        }
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Action { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 board.
///
/// Boards are small `Copy` values; every operation that "changes" a board
/// returns a new one. The player to move is not stored: it follows from the
/// number of marks, with X always moving first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create the empty starting board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Build a board from three rows of cells.
    ///
    /// No validation is performed; boards that cannot arise from alternating
    /// play are accepted but the engine's answers on them are meaningless.
    pub fn from_rows(rows: [[Cell; SIZE]; SIZE]) -> Self {
        let mut cells = [Cell::Empty; CELLS];
        for (r, row) in rows.iter().enumerate() {
            cells[r * SIZE..(r + 1) * SIZE].copy_from_slice(row);
        }
        Board { cells }
    }

    /// The board as three rows
    pub fn rows(&self) -> [[Cell; SIZE]; SIZE] {
        let mut rows = [[Cell::Empty; SIZE]; SIZE];
        for (i, &cell) in self.cells.iter().enumerate() {
            rows[i / SIZE][i % SIZE] = cell;
        }
        rows
    }

    /// Row-major view of all nine cells
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Cell at an action, `None` when the coordinates are off the board
    pub fn get(&self, action: Action) -> Option<Cell> {
        action.index().map(|i| self.cells[i])
    }

    /// True when no cell holds a mark
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Cell::Empty)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    /// Player whose turn it is, or `None` once the board is full.
    ///
    /// Derived from parity alone: X on an even number of marks, O on odd.
    /// The history that produced the board is not checked.
    pub fn current_player(&self) -> Option<Player> {
        if self.is_empty() {
            return Some(Player::X);
        }
        match self.occupied_count() {
            CELLS => None,
            n if n.is_multiple_of(2) => Some(Player::X),
            _ => Some(Player::O),
        }
    }

    /// All empty cells, ordered by row then column.
    ///
    /// A board that already has a winner still reports its empty cells;
    /// use [`is_terminal`](Self::is_terminal) to decide whether play goes on.
    pub fn legal_actions(&self) -> BTreeSet<Action> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Action::from_index(i))
            .collect()
    }

    /// Place the current player's mark and return the resulting board.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidMove`] when the action is off the board or the target
    /// cell is occupied.
    #[must_use = "apply_action returns a new board; the original is unchanged"]
    pub fn apply_action(&self, action: Action) -> Result<Board> {
        let index = action
            .index()
            .ok_or_else(|| action.rejected(MoveRejection::OutOfBounds))?;

        if self.cells[index] != Cell::Empty {
            return Err(action.rejected(MoveRejection::Occupied));
        }

        // An empty target means the board is not full, so a player exists.
        let player = self
            .current_player()
            .ok_or_else(|| action.rejected(MoveRejection::Occupied))?;

        let mut next = *self;
        next.cells[index] = player.to_cell();
        Ok(next)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Check if a player has a complete line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.occupied_count() == CELLS
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.occupied_count() == CELLS && self.winner().is_none()
    }

    /// Terminal score from X's perspective: 1 if X won, -1 if O won, else 0.
    ///
    /// On a non-terminal board the 0 means "no winner yet", not a draw.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Outcome of a finished game, `None` while play continues
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(player) = self.winner() {
            Some(GameOutcome::Win(player))
        } else if self.occupied_count() == CELLS {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Compact nine-character encoding, `_` for empty cells
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse nine cell characters in row-major order.
    ///
    /// Whitespace, `/` and `|` are ignored so `"_OX/___/___"` and
    /// `"_ O X\n_ _ _\n_ _ _"` both work. Piece counts must be reachable with
    /// X moving first.
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|&c| !c.is_whitespace() && c != '/' && c != '|')
            .collect();

        if chars.len() != CELLS {
            return Err(Error::InvalidBoardLength {
                expected: CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = cells.iter().filter(|&&c| c == Cell::O).count();
        if x_count != o_count && x_count != o_count + 1 {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        }

        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            let line: Vec<String> = row.iter().map(|c| c.to_char().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
            if r + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(actions: &[(usize, usize)]) -> Board {
        actions.iter().fold(Board::new(), |board, &a| {
            board.apply_action(a.into()).unwrap()
        })
    }

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.current_player(), Some(Player::X));
        assert!(board.cells().iter().all(|&c| c == Cell::Empty));
    }

    #[test]
    fn test_apply_action() {
        let board = Board::new();

        let next = board.apply_action(Action::new(1, 1)).unwrap();
        assert_eq!(next.get(Action::new(1, 1)), Some(Cell::X));
        assert_eq!(next.current_player(), Some(Player::O));
        assert!(board.is_empty(), "input board must not change");

        let err = next.apply_action(Action::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidMove {
                row: 1,
                col: 1,
                reason: MoveRejection::Occupied
            }
        );
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_apply_action_out_of_bounds() {
        let board = Board::new();
        for action in [Action::new(3, 0), Action::new(0, 3), Action::new(7, 7)] {
            let err = board.apply_action(action).unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidMove {
                    reason: MoveRejection::OutOfBounds,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_legal_actions() {
        let mut board = Board::new();
        assert_eq!(board.legal_actions().len(), 9);

        board = board.apply_action(Action::new(0, 0)).unwrap();
        assert_eq!(board.legal_actions().len(), 8);
        assert!(!board.legal_actions().contains(&Action::new(0, 0)));

        board = board.apply_action(Action::new(1, 1)).unwrap();
        assert_eq!(board.legal_actions().len(), 7);
        assert!(!board.legal_actions().contains(&Action::new(1, 1)));
    }

    #[test]
    fn test_legal_actions_are_row_major() {
        let board = play(&[(1, 1)]);
        let actions: Vec<Action> = board.legal_actions().into_iter().collect();
        let indices: Vec<usize> = actions.iter().filter_map(|a| a.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_player_alternation() {
        let mut board = Board::new();
        assert_eq!(board.current_player(), Some(Player::X));

        board = board.apply_action(Action::new(0, 0)).unwrap();
        assert_eq!(board.current_player(), Some(Player::O));

        board = board.apply_action(Action::new(0, 1)).unwrap();
        assert_eq!(board.current_player(), Some(Player::X));

        board = board.apply_action(Action::new(0, 2)).unwrap();
        assert_eq!(board.current_player(), Some(Player::O));
    }

    #[test]
    fn test_win_detection_horizontal() {
        let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.utility(), 1);
        assert_eq!(board.outcome(), Some(GameOutcome::Win(Player::X)));
    }

    #[test]
    fn test_win_detection_vertical() {
        // O takes the middle column
        let board = play(&[(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 1)]);
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.utility(), -1);
    }

    #[test]
    fn test_win_detection_diagonal() {
        let board = play(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        // X O X
        // X O X
        // O X O
        let board = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (1, 2),
            (2, 2),
            (2, 1),
        ]);
        assert!(board.is_terminal());
        assert!(board.is_draw());
        assert_eq!(board.winner(), None);
        assert_eq!(board.utility(), 0);
        assert_eq!(board.current_player(), None);
        assert!(board.legal_actions().is_empty());
        assert_eq!(board.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_non_terminal_utility_is_zero() {
        let board = play(&[(0, 0), (1, 1)]);
        assert!(!board.is_terminal());
        assert_eq!(board.utility(), 0);
        assert_eq!(board.outcome(), None);
        assert!(!board.is_draw());
    }

    #[test]
    fn test_from_str() {
        let board: Board = "_OX......".parse().unwrap();
        assert_eq!(board.get(Action::new(0, 0)), Some(Cell::Empty));
        assert_eq!(board.get(Action::new(0, 1)), Some(Cell::O));
        assert_eq!(board.get(Action::new(0, 2)), Some(Cell::X));
        assert_eq!(board.current_player(), Some(Player::X));

        let slashed: Board = "_OX/___/___".parse().unwrap();
        assert_eq!(slashed, board);

        let spaced: Board = "_ O X\n_ _ _\n_ _ _".parse().unwrap();
        assert_eq!(spaced, board);

        assert!(matches!(
            "XO".parse::<Board>(),
            Err(Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            "XOZ......".parse::<Board>(),
            Err(Error::InvalidCellCharacter { character: 'Z', .. })
        ));
        assert!(matches!(
            "XXX......".parse::<Board>(),
            Err(Error::InvalidPieceCounts { x_count: 3, o_count: 0 })
        ));
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let rows = [
            [Cell::X, Cell::O, Cell::Empty],
            [Cell::Empty, Cell::X, Cell::Empty],
            [Cell::Empty, Cell::Empty, Cell::O],
        ];
        let board = Board::from_rows(rows);
        assert_eq!(board.rows(), rows);
        assert_eq!(board.encode(), "XO__X___O");
    }

    #[test]
    fn test_display() {
        let board: Board = "XOX_O____".parse().unwrap();
        assert_eq!(format!("{board}"), "X O X\n_ O _\n_ _ _");
    }

    #[test]
    fn test_action_index() {
        assert_eq!(Action::new(2, 1).index(), Some(7));
        assert_eq!(Action::new(3, 0).index(), None);
        assert_eq!(Action::new(usize::MAX, usize::MAX).index(), None);
        assert_eq!(Action::from_index(5), Action::new(1, 2));
        assert!(Action::new(0, 2) < Action::new(1, 0));
    }
}
