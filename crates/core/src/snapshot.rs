//! Read-only copies of game state handed to renderers.

use crate::piece::{Occupancy, Piece};
use crate::types::{Cell, PieceKind, Rotation, MASK_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
    pub occupancy: Occupancy,
}

impl PieceSnapshot {
    /// Board coordinates and cells of the occupied part of the piece.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        (0..MASK_SIZE).flat_map(move |row| {
            (0..MASK_SIZE).filter_map(move |col| {
                let cell = self.occupancy[row][col];
                cell.is_occupied()
                    .then_some((self.x + col as i32, self.y + row as i32, cell))
            })
        })
    }
}

impl From<&Piece> for PieceSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            x: value.x(),
            y: value.y(),
            occupancy: *value.compute_occupancy(),
        }
    }
}

/// Read-only view of the game handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major board cells.
    pub board: Vec<Cell>,
    pub active: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub difficulty: u8,
    pub started: bool,
    pub running: bool,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.width || y >= self.height {
            return Cell::Empty;
        }
        self.board[y * self.width + x]
    }
}
