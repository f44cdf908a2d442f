//! RNG module - random piece selection
//!
//! Pieces are drawn uniformly from the seven kinds with one constraint: the
//! queued "next" piece is never the same kind as the piece that was just
//! promoted to falling. There is no bag; runs of other kinds are possible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Source of piece kinds for all players.
#[derive(Debug, Clone)]
pub struct PieceSource<R = StdRng> {
    rng: R,
}

impl PieceSource<StdRng> {
    /// Deterministic source, for reproducible games and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> PieceSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Any of the seven kinds, uniformly.
    pub fn any(&mut self) -> PieceKind {
        PieceKind::from_index(self.rng.gen_range(0..PieceKind::COUNT))
    }

    /// One of the six kinds other than `current`, uniformly.
    pub fn after(&mut self, current: PieceKind) -> PieceKind {
        let mut index = self.rng.gen_range(0..PieceKind::COUNT - 1);
        if index >= current.index() {
            index += 1;
        }
        PieceKind::from_index(index)
    }
}

impl Default for PieceSource<StdRng> {
    fn default() -> Self {
        Self::seeded(1)
    }
}
