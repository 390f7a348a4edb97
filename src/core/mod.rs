//! Core noughts-and-crosses logic (no_std compatible).
//!
//! Board, line detection, player identity and the session state machine.
//! Nothing here performs I/O or logging; outcomes are reported through return
//! values and [`SessionObserver`] callbacks.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod line;
pub mod player;
pub mod session;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Board, BoardSnapshot, Marks};
pub use common::{Cell, ConfigurationError, GameError, Marker, ValidationError};
pub use config::*;
pub use line::{detect, LineKind, WinningLine};
pub use player::{Player, PlayerKind};
pub use session::{
    MoveOutcome, Phase, SessionController, SessionObserver, SessionSummary, Side, Tallies,
};
