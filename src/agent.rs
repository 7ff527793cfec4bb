//! Agent port - anything that can pick a move on a board
//!
//! The engine itself is pure; agents wrap it (or a baseline policy) behind a
//! common interface so matches can be played between any two of them.

use clap::ValueEnum;
use rand::{Rng, SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result, search,
    tictactoe::{Action, Board},
};

/// Agent trait - unified interface for move selection
pub trait Agent: Send {
    /// Select an action for the player to move on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalActions`] on a terminal board.
    fn select_action(&mut self, board: &Board) -> Result<Action>;

    /// Used for identification in summaries and logging.
    fn name(&self) -> &str;

    /// Reseed the agent's random number generator, if it has one.
    fn set_rng_seed(&mut self, _seed: u64) {}
}

/// Plays the minimax-optimal action
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    name: String,
}

impl MinimaxAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new("Minimax")
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        search::minimax(board).ok_or(Error::NoLegalActions)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Random policy agent (baseline)
#[derive(Debug, Clone)]
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        if board.is_terminal() {
            return Err(Error::NoLegalActions);
        }
        let actions: Vec<Action> = board.legal_actions().into_iter().collect();
        let index = self.rng.random_range(0..actions.len());
        Ok(actions[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

/// Built-in agents selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// Exhaustive minimax search
    Minimax,
    /// Uniformly random legal move
    Random,
}

impl AgentKind {
    pub fn label(self) -> &'static str {
        match self {
            AgentKind::Minimax => "Minimax",
            AgentKind::Random => "Random",
        }
    }

    /// Creates a boxed agent from the kind, seeding it when a seed is given
    pub fn into_agent(self, seed: Option<u64>) -> Box<dyn Agent> {
        match (self, seed) {
            (AgentKind::Minimax, _) => Box::new(MinimaxAgent::new(self.label())),
            (AgentKind::Random, Some(seed)) => Box::new(RandomAgent::with_seed(self.label(), seed)),
            (AgentKind::Random, None) => Box::new(RandomAgent::new(self.label())),
        }
    }
}
