//! Match play between agents
//!
//! Drives two [`Agent`]s through complete games and tallies series results.

use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::{
    Result,
    agent::Agent,
    tictactoe::{Board, Game, GameOutcome, Player},
};

/// Configuration for a series of games.
///
/// ```
/// use tictactoe_minimax::{arena::SeriesConfig, tictactoe::Player};
///
/// let config = SeriesConfig::new(50)
///     .with_agent_player(Player::O)
///     .with_seed(42);
/// assert_eq!(config.games, 50);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Number of games to play
    pub games: usize,
    /// Which mark the evaluated agent plays
    pub agent_player: Player,
    /// Seed for agents with a random component
    pub seed: Option<u64>,
}

impl SeriesConfig {
    pub fn new(games: usize) -> Self {
        Self {
            games,
            agent_player: Player::X,
            seed: None,
        }
    }

    pub fn with_agent_player(mut self, player: Player) -> Self {
        self.agent_player = player;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Tally of a finished series, from the evaluated agent's side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub agent: String,
    pub opponent: String,
    pub agent_player: Option<Player>,
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub game_lengths: Vec<usize>,
}

impl SeriesSummary {
    fn record(&mut self, game: &Game, agent_player: Player) {
        self.games += 1;
        self.game_lengths.push(game.len());
        match game.outcome {
            Some(GameOutcome::Win(winner)) if winner == agent_player => self.wins += 1,
            Some(GameOutcome::Win(_)) => self.losses += 1,
            Some(GameOutcome::Draw) | None => self.draws += 1,
        }
    }

    pub fn win_rate(&self) -> f64 {
        self.rate(self.wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    pub fn loss_rate(&self) -> f64 {
        self.rate(self.losses)
    }

    pub fn mean_game_length(&self) -> f64 {
        if self.game_lengths.is_empty() {
            0.0
        } else {
            self.game_lengths.iter().sum::<usize>() as f64 / self.game_lengths.len() as f64
        }
    }

    fn rate(&self, count: usize) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            count as f64 / self.games as f64
        }
    }
}

/// Play from an arbitrary board until the game ends.
///
/// # Errors
///
/// Propagates any agent failure, or an invalid move from an agent.
pub fn play_from(board: Board, x: &mut dyn Agent, o: &mut dyn Agent) -> Result<Game> {
    let mut game = Game::from_board(board);

    while game.outcome.is_none() {
        let current = game.current_state()?;
        let agent: &mut dyn Agent = match current.current_player() {
            Some(Player::X) => &mut *x,
            Some(Player::O) => &mut *o,
            None => break,
        };

        let action = agent.select_action(&current)?;
        trace!(agent = agent.name(), %action, ply = game.len() + 1, "move");
        game.play(action)?;
    }

    Ok(game)
}

/// Play one game from the empty board
pub fn play_game(x: &mut dyn Agent, o: &mut dyn Agent) -> Result<Game> {
    play_from(Board::new(), x, o)
}

/// Play a series of games and tally the evaluated agent's results.
///
/// `on_game` is called after every game with the number of games finished so
/// far; the CLI uses it to advance a progress bar.
pub fn run_series(
    agent: &mut dyn Agent,
    opponent: &mut dyn Agent,
    config: &SeriesConfig,
    mut on_game: impl FnMut(usize, &Game),
) -> Result<SeriesSummary> {
    if let Some(seed) = config.seed {
        agent.set_rng_seed(seed);
        opponent.set_rng_seed(seed.wrapping_add(1));
    }

    let mut summary = SeriesSummary {
        agent: agent.name().to_string(),
        opponent: opponent.name().to_string(),
        agent_player: Some(config.agent_player),
        ..SeriesSummary::default()
    };

    for i in 0..config.games {
        let game = match config.agent_player {
            Player::X => play_game(agent, opponent)?,
            Player::O => play_game(opponent, agent)?,
        };
        summary.record(&game, config.agent_player);
        on_game(i + 1, &game);
    }

    info!(
        agent = %summary.agent,
        opponent = %summary.opponent,
        games = summary.games,
        wins = summary.wins,
        losses = summary.losses,
        draws = summary.draws,
        "series finished"
    );

    Ok(summary)
}
