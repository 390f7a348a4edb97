//! Move providers
//!
//! A move provider chooses cells for one seat of a session:
//! - RandomMover: picks uniformly among empty cells (reference provider for
//!   non-human player kinds)
//! - CliMover: reads coordinates typed by a human at the terminal
//!
//! The session runner asks the provider of the active seat for a move and
//! feeds back what happened to it.

use crate::core::{BoardSnapshot, GameError, Marker, MoveOutcome};

/// Capability supplied for each seat of a session.
#[async_trait::async_trait]
pub trait MoveProvider: Send {
    /// Choose the next cell for `marker` given the current board.
    async fn request_move(
        &mut self,
        snapshot: &BoardSnapshot,
        marker: Marker,
    ) -> anyhow::Result<(usize, usize)>;

    /// Inform the provider that its last choice was rejected. Only
    /// recoverable errors (an occupied cell) are reported here.
    fn handle_rejection(&mut self, _coord: (usize, usize), _error: &GameError) {}

    /// Inform the provider of the outcome of any accepted move, its own or
    /// the opponent's.
    fn handle_outcome(&mut self, _outcome: &MoveOutcome) {}
}

pub mod ai;
pub use ai::RandomMover;

pub mod cli;
pub use cli::CliMover;
