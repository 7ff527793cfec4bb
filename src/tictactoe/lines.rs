//! Winning line analysis for Tic-Tac-Toe

use std::collections::BTreeSet;

use super::{Action, Cell, Player};

/// Winning line indices on the 3x3 board, rows first, then columns, then diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Owner of the first complete line, scanning rows, columns, then diagonals.
    ///
    /// Returns `None` when no line holds three identical marks.
    pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let owner = cells[a].to_player()?;
            (cells[b] == cells[a] && cells[c] == cells[a]).then_some(owner)
        })
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Find all actions that would immediately complete a line for the player
    pub fn winning_actions(cells: &[Cell; 9], player: Player) -> BTreeSet<Action> {
        WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .map(Action::from_index)
            .collect()
    }

    /// Find the winning cell in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[3] = Cell::X;
        cells[4] = Cell::X;
        cells[5] = Cell::X;

        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::X));
        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_winner_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::O;
        cells[4] = Cell::O;
        cells[6] = Cell::O;

        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::O));
    }

    #[test]
    fn test_no_winner_is_explicit_none() {
        let empty = [Cell::Empty; 9];
        assert_eq!(LineAnalyzer::winner(&empty), None);

        // X X O
        // _ O _
        // _ _ X
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::O;
        cells[4] = Cell::O;
        cells[8] = Cell::X;
        assert_eq!(LineAnalyzer::winner(&cells), None);
    }

    #[test]
    fn test_winning_actions() {
        // X _ X
        // _ _ _
        // _ _ _
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[2] = Cell::X;

        let actions = LineAnalyzer::winning_actions(&cells, Player::X);
        assert_eq!(actions.len(), 1);
        assert!(actions.contains(&Action::new(0, 1)));
        assert!(LineAnalyzer::winning_actions(&cells, Player::O).is_empty());
    }

    #[test]
    fn test_winning_actions_multiple() {
        // X X _
        // X _ _
        // _ _ _
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[3] = Cell::X;

        let actions = LineAnalyzer::winning_actions(&cells, Player::X);
        assert_eq!(actions.len(), 2);
        assert!(actions.contains(&Action::new(0, 2))); // top row
        assert!(actions.contains(&Action::new(2, 0))); // left column
    }
}
