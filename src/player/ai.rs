use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::core::{BoardSnapshot, Marker};

use super::MoveProvider;

/// Picks uniformly among the empty cells. Used for every non-human player
/// kind until real strategies are plugged in.
pub struct RandomMover {
    rng: SmallRng,
}

impl RandomMover {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    /// Reproducible mover for a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Mover seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }

    /// Choose an empty cell, or `None` on a full board.
    pub fn choose(&mut self, snapshot: &BoardSnapshot) -> Option<(usize, usize)> {
        let empty: Vec<_> = snapshot.empty_cells().collect();
        if empty.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..empty.len());
        Some(empty[idx])
    }
}

#[async_trait::async_trait]
impl MoveProvider for RandomMover {
    async fn request_move(
        &mut self,
        snapshot: &BoardSnapshot,
        _marker: Marker,
    ) -> anyhow::Result<(usize, usize)> {
        self.choose(snapshot)
            .ok_or_else(|| anyhow::anyhow!("no empty cell left to choose"))
    }
}
