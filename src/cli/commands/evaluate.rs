//! Evaluate command - play a series of games and report the results

use anyhow::{Result, bail};
use clap::Parser;

use super::parse_player_token;
use crate::{
    agent::AgentKind,
    arena::{self, SeriesConfig, SeriesSummary},
    cli::{config::CommonConfig, output},
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate an agent against an opponent over many games")]
pub struct EvaluateArgs {
    /// Agent being evaluated
    #[arg(long, value_enum, default_value = "minimax")]
    pub agent: AgentKind,

    /// Opponent to evaluate against
    #[arg(long, short = 'o', value_enum, default_value = "random")]
    pub opponent: AgentKind,

    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Which token the evaluated agent controls (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub agent_player: String,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: EvaluateArgs, common: &CommonConfig) -> Result<()> {
    if args.games == 0 {
        bail!("--games must be at least 1");
    }

    let agent_player = parse_player_token(&args.agent_player, "--agent-player")?;
    let mut config = SeriesConfig::new(args.games).with_agent_player(agent_player);
    if let Some(seed) = common.seed {
        config = config.with_seed(seed);
    }

    let mut agent = args.agent.into_agent(common.agent_seed(0));
    let mut opponent = args.opponent.into_agent(common.agent_seed(1));

    let progress = if common.progress && !args.json {
        Some(output::create_series_progress(args.games as u64)?)
    } else {
        None
    };

    let summary = arena::run_series(agent.as_mut(), opponent.as_mut(), &config, |done, _| {
        if let Some(pb) = &progress {
            pb.set_position(done as u64);
            pb.set_message(format!("{done} played"));
        }
    })?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

fn print_summary(summary: &SeriesSummary) {
    let side = summary
        .agent_player
        .map(|p| p.to_string())
        .unwrap_or_else(|| "?".to_string());

    output::print_section(&format!(
        "{} ({side}) vs {}",
        summary.agent, summary.opponent
    ));
    output::print_kv("Games", &output::format_number(summary.games as u64));
    output::print_kv(
        "Wins",
        &format!("{} ({})", summary.wins, output::format_percent(summary.win_rate())),
    );
    output::print_kv(
        "Draws",
        &format!("{} ({})", summary.draws, output::format_percent(summary.draw_rate())),
    );
    output::print_kv(
        "Losses",
        &format!("{} ({})", summary.losses, output::format_percent(summary.loss_rate())),
    );
    output::print_kv(
        "Mean game length",
        &format!("{:.2} moves", summary.mean_game_length()),
    );
}
