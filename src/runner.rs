#![cfg(feature = "std")]

//! Drives a [`SessionController`] with one move provider per seat.

use crate::{
    cli::coord_to_string,
    core::{MoveOutcome, Player, SessionController, SessionSummary, Side},
    player::MoveProvider,
};

/// Occupied-cell rejections tolerated in one round before the runner gives
/// up on a provider.
pub const MAX_REJECTIONS: usize = 32;

pub struct SessionRunner {
    controller: SessionController,
    x: Box<dyn MoveProvider>,
    o: Box<dyn MoveProvider>,
}

impl SessionRunner {
    pub fn new(
        controller: SessionController,
        x: Box<dyn MoveProvider>,
        o: Box<dyn MoveProvider>,
    ) -> Self {
        Self { controller, x, o }
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    pub fn into_controller(self) -> SessionController {
        self.controller
    }

    fn provider(&mut self, side: Side) -> &mut dyn MoveProvider {
        match side {
            Side::X => self.x.as_mut(),
            Side::O => self.o.as_mut(),
        }
    }

    /// Start a session between the two players.
    pub fn start(&mut self, player_x: Player, player_o: Player) -> anyhow::Result<()> {
        log::info!("Starting session: {} vs {}", player_x, player_o);
        self.controller
            .start_session(player_x, player_o)
            .map_err(|e| anyhow::anyhow!(e))
    }

    /// Request moves until the current round is won or tied.
    pub async fn play_round(&mut self) -> anyhow::Result<MoveOutcome> {
        let mut rejections = 0;
        loop {
            let (side, marker) = match (
                self.controller.active_side(),
                self.controller.active_marker(),
            ) {
                (Some(side), Some(marker)) => (side, marker),
                _ => {
                    return Err(anyhow::anyhow!(
                        "no move awaited (session is {:?})",
                        self.controller.phase()
                    ))
                }
            };
            let snapshot = self.controller.board().snapshot();
            let (r, c) = self
                .provider(side)
                .request_move(&snapshot, marker)
                .await?;

            match self.controller.apply_move(r, c) {
                Ok(outcome) => {
                    log::debug!("{} played {}", marker, coord_to_string(r, c));
                    self.x.handle_outcome(&outcome);
                    self.o.handle_outcome(&outcome);
                    if !matches!(outcome, MoveOutcome::Settled { .. }) {
                        return Ok(outcome);
                    }
                }
                Err(e) if e.is_recoverable() => {
                    rejections += 1;
                    log::warn!("Rejected move {} for {}: {}", coord_to_string(r, c), marker, e);
                    if rejections > MAX_REJECTIONS {
                        return Err(anyhow::anyhow!(
                            "provider for {} keeps choosing occupied cells",
                            marker
                        ));
                    }
                    self.provider(side).handle_rejection((r, c), &e);
                }
                Err(e) => return Err(anyhow::anyhow!(e)),
            }
        }
    }

    /// Play `rounds` consecutive rounds of the running session, then end it.
    pub async fn play_rounds(&mut self, rounds: u32) -> anyhow::Result<SessionSummary> {
        for round in 0..rounds {
            if round > 0 {
                self.controller
                    .start_next_round()
                    .map_err(|e| anyhow::anyhow!(e))?;
            }
            let outcome = self.play_round().await?;
            match &outcome {
                MoveOutcome::Won { winner, .. } => {
                    log::info!("Round {} won by {}", round + 1, winner)
                }
                _ => log::info!("Round {} tied", round + 1),
            }
            log::info!("Tallies after round {}: {}", round + 1, self.controller.tallies());
        }
        Ok(self.finish())
    }

    /// End the session and return its summary.
    pub fn finish(&mut self) -> SessionSummary {
        let summary = self.controller.end_session();
        log::info!("Session ended: {}", summary.tallies);
        summary
    }
}
