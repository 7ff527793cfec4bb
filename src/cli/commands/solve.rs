//! Solve command - minimax values and the optimal move for one position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::parse_board;
use crate::{
    cli::{config::CommonConfig, output},
    search::{self, Analysis, SearchStats},
    tictactoe::{Action, Board, GameOutcome, LineAnalyzer, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Show minimax values and the optimal move for a board")]
pub struct SolveArgs {
    /// Board in row-major order, `_` or `.` for empty (e.g. "_OX/___/___").
    /// Defaults to the empty board.
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// Print the analysis as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ActionValue {
    action: Action,
    value: i32,
}

#[derive(Serialize)]
struct SolveReport {
    board: String,
    to_move: Option<Player>,
    terminal: bool,
    outcome: Option<GameOutcome>,
    utility: i32,
    values: Vec<ActionValue>,
    optimal_actions: Vec<Action>,
    best_action: Option<Action>,
    stats: SearchStats,
}

impl SolveReport {
    fn new(board: &Board, analysis: &Analysis) -> Self {
        SolveReport {
            board: board.encode(),
            to_move: board.current_player(),
            terminal: board.is_terminal(),
            outcome: board.outcome(),
            utility: board.utility(),
            values: analysis
                .values
                .iter()
                .map(|(&action, &value)| ActionValue { action, value })
                .collect(),
            optimal_actions: analysis.optimal_actions(),
            best_action: analysis.best_action(),
            stats: analysis.stats,
        }
    }
}

pub fn execute(args: SolveArgs, common: &CommonConfig) -> Result<()> {
    let board = parse_board(args.board.as_deref())?;

    let spinner = if common.progress && !args.json {
        Some(output::create_spinner("Searching game tree...")?)
    } else {
        None
    };
    let analysis = search::analyze(&board);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if args.json {
        let report = SolveReport::new(&board, &analysis);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&board, &analysis);
    Ok(())
}

fn describe_value(value: i32) -> &'static str {
    match value {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}

fn print_report(board: &Board, analysis: &Analysis) {
    output::print_section("Position");
    println!("{}", output::indent(&board.to_string(), "  "));
    println!();

    if let Some(outcome) = board.outcome() {
        let status = match outcome {
            GameOutcome::Win(player) => format!("{player} has won"),
            GameOutcome::Draw => "draw".to_string(),
        };
        output::print_kv("Status", &format!("game over ({status})"));
        output::print_kv("Utility", &board.utility().to_string());
        return;
    }

    let Some(player) = analysis.player else {
        return;
    };
    output::print_kv("To move", &player.to_string());
    output::print_kv("Occupied cells", &board.occupied_count().to_string());

    let immediate = LineAnalyzer::winning_actions(board.cells(), player);
    if !immediate.is_empty() {
        output::print_kv("Immediate wins", &join_actions(immediate.iter().copied()));
    }
    let threats = LineAnalyzer::winning_actions(board.cells(), player.opponent());
    if !threats.is_empty() {
        output::print_kv("Opponent threats", &join_actions(threats.iter().copied()));
    }

    output::print_subsection("Action values (from X's perspective)");
    for (action, &value) in &analysis.values {
        println!("  {action}  {value:>2}  {}", describe_value(value));
    }

    output::print_subsection("Decision");
    if let Some(best_value) = analysis.best_value() {
        output::print_kv("Game value", describe_value(best_value));
    }
    output::print_kv(
        "Optimal actions",
        &join_actions(analysis.optimal_actions().into_iter()),
    );
    if let Some(best) = analysis.best_action() {
        output::print_kv("Chosen move", &best.to_string());
    }
    output::print_kv("Nodes searched", &output::format_number(analysis.stats.nodes));
    output::print_kv(
        "Terminal boards",
        &output::format_number(analysis.stats.terminals),
    );
}

fn join_actions(actions: impl Iterator<Item = Action>) -> String {
    actions
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_action_values_as_a_list() {
        let board: Board = "XX_/OO_/___".parse().unwrap();
        let analysis = search::analyze(&board);
        let report = SolveReport::new(&board, &analysis);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["board"], "XX_OO____");
        assert_eq!(json["to_move"], "X");
        assert_eq!(json["best_action"]["row"], 0);
        assert_eq!(json["best_action"]["col"], 2);
        assert_eq!(json["values"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn terminal_report_has_no_actions() {
        let board: Board = "XXX/OO_/___".parse().unwrap();
        let report = SolveReport::new(&board, &search::analyze(&board));
        assert!(report.terminal);
        assert_eq!(report.utility, 1);
        assert!(report.values.is_empty());
        assert!(report.best_action.is_none());
    }
}
