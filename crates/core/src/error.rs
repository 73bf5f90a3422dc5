//! Configuration errors.
//!
//! Gameplay never fails: rejected moves are `false` and a blocked spawn is the
//! game-over phase. The only errors are broken constant tables, detected once when a
//! [`Game`](crate::Game) is built.

use thiserror::Error;

use crate::types::{PieceKind, Rotation};

/// A shape definition that violates the catalog invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{kind:?} has bounding size {size}, expected 2..=4")]
    BadSize { kind: PieceKind, size: u8 },

    #[error("{kind:?} rotation {rotation:?} has {count} cells, expected {expected}")]
    WrongCellCount {
        kind: PieceKind,
        rotation: Rotation,
        count: u32,
        expected: u32,
    },

    #[error("{kind:?} rotation {rotation:?} sets cells outside its {size}x{size} box")]
    OutsideBoundingBox {
        kind: PieceKind,
        rotation: Rotation,
        size: u8,
    },

    #[error("{kind:?} has color index {color}, expected 0..7")]
    BadColor { kind: PieceKind, color: u8 },

    #[error("catalog entry {index} describes {found:?}, expected {expected:?}")]
    MisplacedKind {
        index: usize,
        expected: PieceKind,
        found: PieceKind,
    },
}

/// Any fatal configuration problem found at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid shape catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("tick interval for difficulty {difficulty} is zero")]
    ZeroInterval { difficulty: usize },

    #[error("level threshold {index} ({value}) does not exceed the previous one")]
    ThresholdsNotIncreasing { index: usize, value: u32 },
}
