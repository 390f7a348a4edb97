//! Player identity: an immutable name, marker and type tag.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::core::common::{Marker, ValidationError};

/// Who chooses a player's moves. Non-human kinds are served by an external
/// move provider; the tags carry no strategy of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerKind {
    Human,
    AiEasy,
    AiMedium,
    AiImpossible,
}

impl PlayerKind {
    pub fn is_human(self) -> bool {
        self == PlayerKind::Human
    }

    pub fn tag(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::AiEasy => "easy",
            PlayerKind::AiMedium => "medium",
            PlayerKind::AiImpossible => "impossible",
        }
    }
}

impl FromStr for PlayerKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "easy" | "ai-easy" => Ok(PlayerKind::AiEasy),
            "medium" | "ai-medium" => Ok(PlayerKind::AiMedium),
            "impossible" | "ai-impossible" => Ok(PlayerKind::AiImpossible),
            _ => Err(ValidationError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A validated participant in a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    marker: Marker,
    kind: PlayerKind,
}

impl Player {
    /// Build a player. Surrounding whitespace is trimmed from `name`, which
    /// must not be empty afterwards.
    pub fn new(name: &str, marker: Marker, kind: PlayerKind) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Player {
            name: name.to_string(),
            marker,
            kind,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}
