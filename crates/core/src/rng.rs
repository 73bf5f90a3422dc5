//! RNG module - seeded piece selection
//!
//! Wraps a seeded [`StdRng`] so a game can be replayed from its seed. Every
//! draw is an independent uniform pick among the seven kinds (no bag, no
//! history).

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::random_kind;
use crate::types::PieceKind;

/// Seeded source of piece kinds.
#[derive(Debug, Clone)]
pub struct PieceRng {
    seed: u64,
    inner: StdRng,
}

impl PieceRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw the next kind.
    pub fn next_kind(&mut self) -> PieceKind {
        random_kind(&mut self.inner)
    }
}
