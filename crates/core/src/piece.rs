//! Piece module - an active or simulated piece
//!
//! A piece is a shape definition plus a rotation and a board position. Its
//! 4x4 occupancy grid is derived from the current rotation mask and cached;
//! rotating clears the cache and the next read rebuilds it.

use std::cell::OnceCell;

use crate::catalog::{definition_for, occupies_cell, ShapeDefinition};
use crate::types::{Cell, Direction, Move, PieceKind, Rotation, MASK_SIZE};

/// 4x4 cell grid, indexed `[row][col]`.
pub type Occupancy = [[Cell; MASK_SIZE]; MASK_SIZE];

#[derive(Debug, Clone)]
pub struct Piece {
    shape: &'static ShapeDefinition,
    rotation: Rotation,
    x: i32,
    y: i32,
    occupancy: OnceCell<Occupancy>,
}

impl Piece {
    /// Create a piece in its spawn orientation at `(0, 0)`.
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, 0, 0)
    }

    pub fn at(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            shape: definition_for(kind),
            rotation: Rotation::R0,
            x,
            y,
            occupancy: OnceCell::new(),
        }
    }

    /// Create a piece at the spawn position for a board `board_width` cells wide.
    pub fn spawn(kind: PieceKind, board_width: usize) -> Self {
        let size = definition_for(kind).size;
        Self::at(kind, spawn_x(board_width, size), 0)
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind
    }

    pub fn shape(&self) -> &'static ShapeDefinition {
        self.shape
    }

    pub fn size(&self) -> usize {
        self.shape.size as usize
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// The occupancy grid for the current rotation, building it if stale.
    pub fn compute_occupancy(&self) -> &Occupancy {
        self.occupancy.get_or_init(|| {
            let mask = self.shape.mask(self.rotation);
            let mut grid = [[Cell::Empty; MASK_SIZE]; MASK_SIZE];
            for (row, cells) in grid.iter_mut().enumerate() {
                for (col, cell) in cells.iter_mut().enumerate() {
                    if occupies_cell(row, col, mask) {
                        *cell = Cell::Occupied(self.shape.color);
                    }
                }
            }
            grid
        })
    }

    /// Whether the occupancy grid is currently cached.
    pub fn has_cached_occupancy(&self) -> bool {
        self.occupancy.get().is_some()
    }

    /// Advance to the next rotation and drop the cached occupancy.
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.rotate_cw();
        self.occupancy.take();
    }

    /// Shift by one cell. Callers validate against the board first.
    pub fn translate(&mut self, direction: Direction) {
        let (dx, dy) = direction.offset();
        self.x += dx;
        self.y += dy;
    }

    /// Apply a rotation or translation without validation.
    pub fn apply(&mut self, mv: Move) {
        match mv.direction() {
            Some(direction) => self.translate(direction),
            None => self.rotate(),
        }
    }

    /// Board coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (x, y) = (self.x, self.y);
        self.compute_occupancy()
            .iter()
            .enumerate()
            .flat_map(move |(row, cells)| {
                cells.iter().enumerate().filter_map(move |(col, cell)| {
                    cell.is_occupied()
                        .then_some((x + col as i32, y + row as i32))
                })
            })
    }
}

// The occupancy cache is derived state and does not take part in equality.
impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.shape.kind == other.shape.kind
            && self.rotation == other.rotation
            && self.x == other.x
            && self.y == other.y
    }
}

impl Eq for Piece {}

/// Horizontal spawn position: `ceil((board_width - size) / 2)`.
///
/// Negative when the board is narrower than the shape.
pub fn spawn_x(board_width: usize, size: u8) -> i32 {
    let free = board_width as i32 - size as i32;
    (free + 1).div_euclid(2)
}
