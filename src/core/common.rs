//! Common types: cell values, markers and the error taxonomy shared by the
//! board, the line detector and the session controller.

use alloc::string::String;
use core::fmt;

use crate::core::bitboard::BitBoardError;
use crate::core::session::Phase;

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Cross,
    Nought,
}

/// A symbol a player places. Unlike [`Cell`] it can never be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    Cross,
    Nought,
}

impl Marker {
    /// The other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::Cross => Marker::Nought,
            Marker::Nought => Marker::Cross,
        }
    }

    /// Single character used when rendering a board.
    pub fn symbol(self) -> char {
        match self {
            Marker::Cross => 'X',
            Marker::Nought => 'O',
        }
    }
}

impl From<Marker> for Cell {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::Cross => Cell::Cross,
            Marker::Nought => Cell::Nought,
        }
    }
}

impl TryFrom<Cell> for Marker {
    type Error = ValidationError;

    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        match cell {
            Cell::Cross => Ok(Marker::Cross),
            Cell::Nought => Ok(Marker::Nought),
            Cell::Empty => Err(ValidationError::EmptyMarker),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Input outside the domain of a value. Always a caller bug; retrying with
/// the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Row or column is not in `[0, 2]`.
    OutOfRange { row: usize, col: usize },
    /// An empty cell was used where a marker is required.
    EmptyMarker,
    /// Player name is empty or whitespace only.
    EmptyName,
    /// Player type tag did not match a known kind.
    UnknownKind(String),
}

impl From<BitBoardError> for ValidationError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => ValidationError::OutOfRange { row, col },
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::OutOfRange { row, col } => {
                write!(f, "Coordinates ({}, {}) must be between 0 and 2 inclusive", row, col)
            }
            ValidationError::EmptyMarker => write!(f, "Marker must be a cross or a nought"),
            ValidationError::EmptyName => write!(f, "Player name must not be empty"),
            ValidationError::UnknownKind(tag) => write!(f, "Unknown player type '{}'", tag),
        }
    }
}

/// Precondition violations detected when a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Both players hold the same marker.
    SameMarker(Marker),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::SameMarker(m) => {
                write!(f, "Both players hold marker {}", m)
            }
        }
    }
}

/// Errors returned by board, detector and session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Validation(ValidationError),
    /// The targeted cell already holds a marker.
    Occupied { row: usize, col: usize },
    /// The operation is not permitted in the current phase.
    IllegalState {
        operation: &'static str,
        phase: Phase,
    },
    Configuration(ConfigurationError),
}

impl GameError {
    /// True for errors the presentation layer can recover from by asking the
    /// player for a different cell.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::Occupied { .. })
    }
}

impl From<ValidationError> for GameError {
    fn from(err: ValidationError) -> Self {
        GameError::Validation(err)
    }
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::Validation(err.into())
    }
}

impl From<ConfigurationError> for GameError {
    fn from(err: ConfigurationError) -> Self {
        GameError::Configuration(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Validation(e) => write!(f, "Validation error: {}", e),
            GameError::Occupied { row, col } => write!(
                f,
                "Not possible to make this move - cell ({}, {}) is already occupied",
                row, col
            ),
            GameError::IllegalState { operation, phase } => {
                write!(f, "Cannot {} while the session is {:?}", operation, phase)
            }
            GameError::Configuration(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigurationError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
