//! Session state machine: turn order, round results and cumulative tallies.
//!
//! ```text
//! Idle --start_session--> AwaitingMove --apply_move (win/tie)--> RoundOver
//!                              ^                                    |
//!                              +---------start_next_round-----------+
//! any phase --end_session--> Idle
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::core::board::Board;
use crate::core::common::{ConfigurationError, GameError, Marker};
use crate::core::config::CELL_COUNT;
use crate::core::line::{self, WinningLine};
use crate::core::player::Player;

/// Current state of a [`SessionController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No session running.
    Idle,
    /// A round is in progress and the active player may move.
    AwaitingMove,
    /// The round ended in a win or a tie.
    RoundOver,
}

/// One of the two seats of a session. `X` is the first player passed to
/// [`SessionController::start_session`], `O` the second, whichever marker
/// each of them holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    X,
    O,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
}

/// Cumulative round results of a session, counted per seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Tallies {
    pub x_wins: u32,
    pub ties: u32,
    pub o_wins: u32,
}

impl Tallies {
    /// Number of rounds that reached a result.
    pub fn total(&self) -> u32 {
        self.x_wins + self.ties + self.o_wins
    }

    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::X => self.x_wins,
            Side::O => self.o_wins,
        }
    }

    fn record_win(&mut self, side: Side) {
        match side {
            Side::X => self.x_wins += 1,
            Side::O => self.o_wins += 1,
        }
    }
}

impl fmt::Display for Tallies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X {} - ties {} - O {}", self.x_wins, self.ties, self.o_wins)
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// The round continues; the other player is now active.
    Settled {
        row: usize,
        col: usize,
        marker: Marker,
    },
    /// The mover completed `line`.
    Won { line: WinningLine, winner: Player },
    /// The board filled without a completed line.
    Tied,
}

/// Final report returned by [`SessionController::end_session`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSummary {
    pub player_x: Option<Player>,
    pub player_o: Option<Player>,
    pub tallies: Tallies,
}

/// Receives outcome notifications synchronously from inside the controller
/// call that produced them. All methods default to doing nothing.
pub trait SessionObserver: Send {
    fn on_move_settled(&mut self, _row: usize, _col: usize, _marker: Marker) {}

    fn on_round_won(&mut self, _line: &WinningLine, _winner: &Player) {}

    fn on_round_tied(&mut self) {}

    fn on_session_ended(&mut self, _summary: &SessionSummary) {}
}

struct Seats {
    x: Player,
    o: Player,
    round_starting: Side,
    active: Side,
}

impl Seats {
    fn player(&self, side: Side) -> &Player {
        match side {
            Side::X => &self.x,
            Side::O => &self.o,
        }
    }
}

/// Owns the board and both players for the lifetime of a session.
///
/// Calls must be serialized by the owner; nothing here is shared.
pub struct SessionController {
    board: Board,
    seats: Option<Seats>,
    tallies: Tallies,
    phase: Phase,
    rounds_started: u32,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl SessionController {
    /// Create an idle controller with an empty board.
    pub fn new() -> Self {
        SessionController {
            board: Board::new(),
            seats: None,
            tallies: Tallies::default(),
            phase: Phase::Idle,
            rounds_started: 0,
            observers: Vec::new(),
        }
    }

    /// Register an observer. Observers outlive sessions.
    pub fn add_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tallies(&self) -> Tallies {
        self.tallies
    }

    /// Rounds begun in the current session, including one in progress.
    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// Rounds of the current session that ended in a win or a tie.
    pub fn completed_rounds(&self) -> u32 {
        self.tallies.total()
    }

    pub fn player_x(&self) -> Option<&Player> {
        self.seats.as_ref().map(|s| &s.x)
    }

    pub fn player_o(&self) -> Option<&Player> {
        self.seats.as_ref().map(|s| &s.o)
    }

    pub fn player(&self, side: Side) -> Option<&Player> {
        self.seats.as_ref().map(|s| s.player(side))
    }

    /// Seat allowed to move next; `None` unless a move is awaited.
    pub fn active_side(&self) -> Option<Side> {
        match (&self.seats, self.phase) {
            (Some(seats), Phase::AwaitingMove) => Some(seats.active),
            _ => None,
        }
    }

    /// Player allowed to move next; `None` unless a move is awaited.
    pub fn active_player(&self) -> Option<&Player> {
        self.active_side().and_then(|side| self.player(side))
    }

    /// Marker the next move will place; `None` unless a move is awaited.
    pub fn active_marker(&self) -> Option<Marker> {
        self.active_player().map(Player::marker)
    }

    /// Player who opened the current (or just finished) round.
    pub fn round_starting_player(&self) -> Option<&Player> {
        self.seats.as_ref().map(|s| s.player(s.round_starting))
    }

    fn illegal(&self, operation: &'static str) -> GameError {
        GameError::IllegalState {
            operation,
            phase: self.phase,
        }
    }

    fn emit<F>(&mut self, mut notify: F)
    where
        F: FnMut(&mut dyn SessionObserver),
    {
        for observer in self.observers.iter_mut() {
            notify(observer.as_mut());
        }
    }

    /// Begin a session. The two players must hold different markers; the
    /// first round is opened by `player_x`.
    pub fn start_session(&mut self, player_x: Player, player_o: Player) -> Result<(), GameError> {
        if self.phase != Phase::Idle {
            return Err(self.illegal("start a session"));
        }
        if player_x.marker() == player_o.marker() {
            return Err(ConfigurationError::SameMarker(player_x.marker()).into());
        }
        self.tallies = Tallies::default();
        self.rounds_started = 0;
        self.seats = Some(Seats {
            x: player_x,
            o: player_o,
            round_starting: Side::X,
            active: Side::X,
        });
        self.start_round();
        Ok(())
    }

    fn start_round(&mut self) {
        self.board.clear();
        if let Some(seats) = self.seats.as_mut() {
            seats.active = seats.round_starting;
        }
        self.rounds_started += 1;
        self.phase = Phase::AwaitingMove;
    }

    /// Place the active player's marker at (row, col).
    ///
    /// Range and occupancy errors come straight from [`Board::place`] and
    /// leave the session untouched.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GameError> {
        if self.phase != Phase::AwaitingMove {
            return Err(self.illegal("apply a move"));
        }
        let (active, marker) = match self.seats.as_ref() {
            Some(seats) => (seats.active, seats.player(seats.active).marker()),
            None => return Err(self.illegal("apply a move")),
        };
        self.board.place(marker, row, col)?;

        let outcome = if let Some(line) = line::detect(&self.board, marker, row, col)? {
            let winner = match self.player(active) {
                Some(player) => player.clone(),
                None => return Err(self.illegal("apply a move")),
            };
            self.tallies.record_win(active);
            self.phase = Phase::RoundOver;
            MoveOutcome::Won { line, winner }
        } else if self.board.occupied_count() == CELL_COUNT {
            self.tallies.ties += 1;
            self.phase = Phase::RoundOver;
            MoveOutcome::Tied
        } else {
            if let Some(seats) = self.seats.as_mut() {
                seats.active = active.other();
            }
            MoveOutcome::Settled { row, col, marker }
        };

        match &outcome {
            MoveOutcome::Settled { row, col, marker } => {
                let (row, col, marker) = (*row, *col, *marker);
                self.emit(|o| o.on_move_settled(row, col, marker));
            }
            MoveOutcome::Won { line, winner } => {
                self.emit(|o| o.on_round_won(line, winner));
            }
            MoveOutcome::Tied => self.emit(|o| o.on_round_tied()),
        }
        Ok(outcome)
    }

    /// Open the next round. The seat that did not open the finished round
    /// opens this one, whoever won.
    pub fn start_next_round(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::RoundOver {
            return Err(self.illegal("start the next round"));
        }
        match self.seats.as_mut() {
            Some(seats) => seats.round_starting = seats.round_starting.other(),
            None => return Err(self.illegal("start the next round")),
        }
        self.start_round();
        Ok(())
    }

    /// Finish the session from any phase and return its final tallies.
    /// All session state is dropped so the next session starts clean.
    pub fn end_session(&mut self) -> SessionSummary {
        let (player_x, player_o) = match self.seats.take() {
            Some(seats) => (Some(seats.x), Some(seats.o)),
            None => (None, None),
        };
        let summary = SessionSummary {
            player_x,
            player_o,
            tallies: self.tallies,
        };
        self.tallies = Tallies::default();
        self.rounds_started = 0;
        self.board.clear();
        self.phase = Phase::Idle;
        self.emit(|o| o.on_session_ended(&summary));
        summary
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("phase", &self.phase)
            .field("board", &self.board)
            .field("tallies", &self.tallies)
            .field("rounds_started", &self.rounds_started)
            .field("observers", &self.observers.len())
            .finish()
    }
}
