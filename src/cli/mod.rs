//! Command-line display helpers
//!
//! - Board rendering and coordinate parsing (`interface`)
//! - `ConsoleObserver`, which prints session events as they happen

#![cfg(feature = "std")]

pub mod interface;

pub use interface::*;

use crate::core::{Marker, Player, SessionObserver, SessionSummary, WinningLine};

/// Prints session events to stdout.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    pub fn new() -> Self {
        Self
    }
}

impl SessionObserver for ConsoleObserver {
    fn on_move_settled(&mut self, row: usize, col: usize, marker: Marker) {
        std::println!("  {} played {}", marker, coord_to_string(row, col));
    }

    fn on_round_won(&mut self, line: &WinningLine, winner: &Player) {
        let cells: Vec<String> = line
            .cells()
            .iter()
            .map(|&(r, c)| coord_to_string(r, c))
            .collect();
        std::println!("\n  {} wins the round with {}!", winner, cells.join("-"));
    }

    fn on_round_tied(&mut self) {
        std::println!("\n  The board is full. This round is a tie.");
    }

    fn on_session_ended(&mut self, summary: &SessionSummary) {
        std::println!("\n════════════════ SESSION OVER ════════════════");
        let x = summary.player_x.as_ref().map_or("X", |p| p.name());
        let o = summary.player_o.as_ref().map_or("O", |p| p.name());
        print_tallies(x, o, &summary.tallies);
        let winner = if summary.tallies.x_wins > summary.tallies.o_wins {
            Some(x)
        } else if summary.tallies.o_wins > summary.tallies.x_wins {
            Some(o)
        } else {
            None
        };
        match winner {
            Some(name) => std::println!("    {} takes the session.", name),
            None => std::println!("    The session is drawn."),
        }
    }
}
