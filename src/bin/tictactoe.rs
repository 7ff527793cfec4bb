//! Tic-Tac-Toe CLI - exhaustive minimax analysis and agent matches
//!
//! This CLI provides:
//! - Solving a position (per-action minimax values and the optimal move)
//! - Playing a single game between two agents
//! - Evaluating an agent over a series of games

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictactoe_minimax::cli::{commands, config::CommonConfig, init_tracing};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Optimal Tic-Tac-Toe via exhaustive minimax", long_about = None)]
struct Cli {
    /// Log search and match details to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Hide progress bars and spinners
    #[arg(long, global = true)]
    no_progress: bool,

    /// Random seed for reproducibility
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show minimax values and the optimal move for a board
    Solve(commands::solve::SolveArgs),

    /// Play a single game between two agents
    Play(commands::play::PlayArgs),

    /// Evaluate an agent against an opponent
    Evaluate(commands::evaluate::EvaluateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let common = CommonConfig {
        seed: cli.seed,
        progress: !cli.no_progress,
        verbose: cli.verbose,
    };
    init_tracing(&common)?;

    match cli.command {
        Commands::Solve(args) => commands::solve::execute(args, &common),
        Commands::Play(args) => commands::play::execute(args, &common),
        Commands::Evaluate(args) => commands::evaluate::execute(args, &common),
    }
}
