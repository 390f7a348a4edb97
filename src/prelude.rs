//! Commonly used types for ease of import.

pub use crate::core::{
    Board, Cell, GameError, Marker, MoveOutcome, Phase, Player, PlayerKind, SessionController,
    SessionObserver, SessionSummary, Tallies, WinningLine,
};

#[cfg(feature = "std")]
pub use crate::{
    cli::ConsoleObserver,
    player::{CliMover, MoveProvider, RandomMover},
    runner::SessionRunner,
};
