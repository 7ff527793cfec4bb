//! CLI infrastructure for the `tictactoe` binary
//!
//! This module provides the command-line interface for solving positions,
//! playing games between agents and evaluating agents over many games.

pub mod commands;
pub mod config;
pub mod output;

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use self::config::CommonConfig;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level comes from `--verbose`.
/// Logs go to stderr so they never mix with command output.
pub fn init_tracing(config: &CommonConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
