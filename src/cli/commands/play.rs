//! Play command - one game between two agents, printed ply by ply

use anyhow::Result;
use clap::Parser;

use super::parse_board;
use crate::{
    agent::AgentKind,
    arena,
    cli::{config::CommonConfig, output},
    tictactoe::GameOutcome,
};

#[derive(Parser, Debug)]
#[command(about = "Play a single game between two agents")]
pub struct PlayArgs {
    /// Starting board (defaults to the empty board)
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// Agent playing X
    #[arg(long, value_enum, default_value = "minimax")]
    pub x: AgentKind,

    /// Agent playing O
    #[arg(long, value_enum, default_value = "minimax")]
    pub o: AgentKind,
}

pub fn execute(args: PlayArgs, common: &CommonConfig) -> Result<()> {
    let board = parse_board(args.board.as_deref())?;
    let mut x = args.x.into_agent(common.agent_seed(0));
    let mut o = args.o.into_agent(common.agent_seed(1));

    output::print_section(&format!("{} (X) vs {} (O)", x.name(), o.name()));
    println!("{}", output::indent(&board.to_string(), "  "));

    let game = arena::play_from(board, x.as_mut(), o.as_mut())?;
    let states = game.state_sequence()?;

    for (ply, (mv, state)) in game.moves.iter().zip(states.iter().skip(1)).enumerate() {
        output::print_subsection(&format!("Ply {}: {} plays {}", ply + 1, mv.player, mv.action));
        println!("{}", output::indent(&state.to_string(), "  "));
    }

    println!();
    let result = match game.outcome {
        Some(GameOutcome::Win(player)) => format!("{player} wins"),
        Some(GameOutcome::Draw) => "draw".to_string(),
        None => "unfinished".to_string(),
    };
    output::print_kv("Result", &result);
    output::print_kv("Moves played", &game.len().to_string());

    Ok(())
}
