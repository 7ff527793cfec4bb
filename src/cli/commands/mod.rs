//! Subcommands of the `tictactoe` binary

use anyhow::{Context, Result, anyhow};

use crate::tictactoe::{Board, Player};

pub mod evaluate;
pub mod play;
pub mod solve;

/// Parse a `--board` value, falling back to the empty board
pub(crate) fn parse_board(value: Option<&str>) -> Result<Board> {
    match value {
        Some(s) => s
            .parse::<Board>()
            .with_context(|| format!("invalid --board value '{s}'")),
        None => Ok(Board::new()),
    }
}

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Player::X),
        "o" | "second" | "player2" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}
