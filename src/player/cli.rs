use std::io::Write;

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use crate::cli::{coord_to_string, parse_coord, print_move_help, render_board};
use crate::core::{BoardSnapshot, Cell, GameError, Marker, MoveOutcome};

use super::MoveProvider;

/// Human player typing coordinates at a terminal.
pub struct CliMover<R = BufReader<Stdin>> {
    name: String,
    input: R,
}

impl CliMover {
    /// Read moves from stdin.
    pub fn new(name: &str) -> Self {
        Self::with_reader(name, BufReader::new(io::stdin()))
    }
}

impl<R> CliMover<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    /// Read moves from any buffered source.
    pub fn with_reader(name: &str, input: R) -> Self {
        Self {
            name: name.to_string(),
            input,
        }
    }

    async fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line).await?;
        if n == 0 {
            return Err(anyhow::anyhow!("input closed while waiting for a move"));
        }
        Ok(line.trim().to_string())
    }
}

#[async_trait::async_trait]
impl<R> MoveProvider for CliMover<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn request_move(
        &mut self,
        snapshot: &BoardSnapshot,
        marker: Marker,
    ) -> anyhow::Result<(usize, usize)> {
        std::println!();
        std::print!("{}", render_board(snapshot, None));
        loop {
            std::print!("\n{} ({}), enter your move (or 'help'): ", self.name, marker);
            std::io::stdout().flush()?;
            let line = self.read_line().await?;

            if line.eq_ignore_ascii_case("help") {
                print_move_help();
                continue;
            }

            match parse_coord(&line) {
                Ok((r, c)) => {
                    if snapshot.get(r, c) != Some(Cell::Empty) {
                        std::println!("✗ {} is already taken. Choose another cell.", coord_to_string(r, c));
                        continue;
                    }
                    return Ok((r, c));
                }
                Err(e) => {
                    std::println!("✗ Invalid coordinate: {}", e);
                    std::println!("   Example: A1, B2, C3");
                }
            }
        }
    }

    fn handle_rejection(&mut self, coord: (usize, usize), error: &GameError) {
        std::println!("✗ Move at {} rejected: {}", coord_to_string(coord.0, coord.1), error);
    }

    fn handle_outcome(&mut self, outcome: &MoveOutcome) {
        if let MoveOutcome::Won { winner, .. } = outcome {
            if winner.name() == self.name {
                std::println!("\n🎉 Well played, {}!", self.name);
            }
        }
    }
}
