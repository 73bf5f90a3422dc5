//! Shape catalog - the seven piece definitions
//!
//! Each shape is stored as four 16-bit rotation masks over a 4x4 grid. Bit
//! `0x8000 >> (row * 4 + col)` marks the cell at `(row, col)`, so `0x0F00` is a
//! full second row. Masks are anchored to the top-left corner of the shape's
//! `size x size` bounding box.

use rand::Rng;

use crate::error::{CatalogError, ConfigError};
use crate::types::{PieceKind, Rotation, DIFFICULTY_TIMEOUTS, MASK_SIZE, SCORE_PER_LEVEL};

/// Cells per shape.
pub const CELLS_PER_SHAPE: u32 = 4;

/// Immutable definition of one piece kind.
#[derive(Debug, PartialEq, Eq)]
pub struct ShapeDefinition {
    pub kind: PieceKind,
    /// Side of the bounding box (2, 3 or 4).
    pub size: u8,
    /// One mask per rotation, indexed by [`Rotation::index`].
    pub masks: [u16; 4],
    pub color: u8,
}

impl ShapeDefinition {
    pub fn mask(&self, rotation: Rotation) -> u16 {
        self.masks[rotation.index()]
    }
}

/// Bit weight of each `(row, col)` in a rotation mask.
pub const BIT_WEIGHTS: [[u16; MASK_SIZE]; MASK_SIZE] = [
    [0x8000, 0x4000, 0x2000, 0x1000],
    [0x0800, 0x0400, 0x0200, 0x0100],
    [0x0080, 0x0040, 0x0020, 0x0010],
    [0x0008, 0x0004, 0x0002, 0x0001],
];

/// The catalog, in [`PieceKind::ALL`] order.
pub static SHAPES: [ShapeDefinition; 7] = [
    ShapeDefinition {
        kind: PieceKind::I,
        size: 4,
        masks: [0x0F00, 0x2222, 0x00F0, 0x4444],
        color: 0,
    },
    ShapeDefinition {
        kind: PieceKind::J,
        size: 3,
        masks: [0x44C0, 0x8E00, 0x6440, 0x0E20],
        color: 1,
    },
    ShapeDefinition {
        kind: PieceKind::L,
        size: 3,
        masks: [0x4460, 0x0E80, 0xC440, 0x2E00],
        color: 2,
    },
    ShapeDefinition {
        kind: PieceKind::O,
        size: 2,
        masks: [0xCC00, 0xCC00, 0xCC00, 0xCC00],
        color: 3,
    },
    ShapeDefinition {
        kind: PieceKind::S,
        size: 3,
        masks: [0x06C0, 0x8C40, 0x6C00, 0x4620],
        color: 4,
    },
    ShapeDefinition {
        kind: PieceKind::T,
        size: 3,
        masks: [0x0E40, 0x4C40, 0x4E00, 0x4640],
        color: 5,
    },
    ShapeDefinition {
        kind: PieceKind::Z,
        size: 3,
        masks: [0x0C60, 0x4C80, 0xC600, 0x2640],
        color: 6,
    },
];

/// Look up the definition for a piece kind.
pub fn definition_for(kind: PieceKind) -> &'static ShapeDefinition {
    &SHAPES[kind.index()]
}

/// Pick a kind uniformly at random. Every kind has probability 1/7 on every draw.
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
}

/// Whether `(mask_row, mask_col)` is part of the shape described by `mask`.
#[inline(always)]
pub fn occupies_cell(mask_row: usize, mask_col: usize, mask: u16) -> bool {
    mask & BIT_WEIGHTS[mask_row][mask_col] != 0
}

/// Check every shape definition against the catalog invariants.
pub fn validate_catalog() -> Result<(), CatalogError> {
    for (index, (shape, expected)) in SHAPES.iter().zip(PieceKind::ALL).enumerate() {
        if shape.kind != expected {
            return Err(CatalogError::MisplacedKind {
                index,
                expected,
                found: shape.kind,
            });
        }
        validate_shape(shape)?;
    }
    Ok(())
}

fn validate_shape(shape: &ShapeDefinition) -> Result<(), CatalogError> {
    let kind = shape.kind;
    if !(2..=MASK_SIZE as u8).contains(&shape.size) {
        return Err(CatalogError::BadSize {
            kind,
            size: shape.size,
        });
    }
    if shape.color as usize >= PieceKind::ALL.len() {
        return Err(CatalogError::BadColor {
            kind,
            color: shape.color,
        });
    }

    let size = shape.size as usize;
    let mut rotation = Rotation::R0;
    for _ in 0..4 {
        let mask = shape.mask(rotation);
        let count = mask.count_ones();
        if count != CELLS_PER_SHAPE {
            return Err(CatalogError::WrongCellCount {
                kind,
                rotation,
                count,
                expected: CELLS_PER_SHAPE,
            });
        }

        for row in 0..MASK_SIZE {
            for col in 0..MASK_SIZE {
                if (row >= size || col >= size) && occupies_cell(row, col, mask) {
                    return Err(CatalogError::OutsideBoundingBox {
                        kind,
                        rotation,
                        size: shape.size,
                    });
                }
            }
        }
        rotation = rotation.rotate_cw();
    }
    Ok(())
}

/// Validate the catalog and the gameplay tables.
pub fn validate_config() -> Result<(), ConfigError> {
    validate_catalog()?;

    if let Some(difficulty) = DIFFICULTY_TIMEOUTS.iter().position(|&ms| ms == 0) {
        return Err(ConfigError::ZeroInterval { difficulty });
    }

    for (index, pair) in SCORE_PER_LEVEL.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(ConfigError::ThresholdsNotIncreasing {
                index: index + 1,
                value: pair[1],
            });
        }
    }
    Ok(())
}
