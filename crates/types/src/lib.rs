//! Shared types and constants for Blockfall.
//!
//! This crate has no dependencies. It holds the gameplay tables (tick intervals, line
//! rewards, level thresholds), the piece identifiers and the small value types that
//! flow between the core, the input layer and the renderers.
//!
//! # Example
//!
//! ```
//! use blockfall_types::{Cell, PieceKind, Rotation, DIFFICULTY_TIMEOUTS, MAX_DIFFICULTY};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Rotation::R0.rotate_cw(), Rotation::R1);
//! assert!(Cell::Occupied(3).is_occupied());
//! assert_eq!(DIFFICULTY_TIMEOUTS.len(), MAX_DIFFICULTY as usize + 1);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Side length of the mask grid every shape is drawn in.
pub const MASK_SIZE: usize = 4;

/// Highest difficulty level.
pub const MAX_DIFFICULTY: u8 = 9;

/// Frame interval of the terminal runner in milliseconds (16ms ≈ 60 FPS).
///
/// This only paces input polling and redraws; gravity is driven by
/// [`DIFFICULTY_TIMEOUTS`].
pub const FRAME_MS: u32 = 16;

/// Tick interval per difficulty (milliseconds per gravity step)
///
/// Index 0 = difficulty 0, index 9 = difficulty 9.
pub const DIFFICULTY_TIMEOUTS: [u32; 10] = [1000, 850, 700, 600, 500, 400, 300, 220, 150, 100];

/// Line clear rewards at difficulty 0.
///
/// Index 0 = single, 1 = double, 2 = triple, 3 = four lines at once.
/// Points are multiplied by `(difficulty + 1)`.
pub const LINE_SCORES: [u32; 4] = [40, 100, 300, 1200];

/// Score thresholds per difficulty.
///
/// While at difficulty `d`, a score strictly greater than `SCORE_PER_LEVEL[d]` moves the
/// game to `d + 1`. The last entry is never consulted because difficulty caps at 9.
pub const SCORE_PER_LEVEL: [u32; 10] = [
    500, 1500, 3000, 5000, 7500, 10500, 14000, 18000, 22500, 27500,
];

/// The seven piece kinds
///
/// Declaration order matches the catalog order, so `kind.index()` is also the
/// piece's default color index:
/// - **I**: straight bar
/// - **J**, **L**: mirrored hooks
/// - **O**: 2x2 square
/// - **S**, **Z**: mirrored zig-zags
/// - **T**: tee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Position of this kind in [`PieceKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter, used by logs and the sidebar.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Rotation state of a piece
///
/// `R0` is the spawn orientation; each clockwise step moves to the next mask in the
/// shape definition. The cycle is `R0 → R1 → R2 → R3 → R0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    R0,
    R1,
    R2,
    R3,
}

impl Rotation {
    /// Rotate clockwise (next mask)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::R0.rotate_cw(), Rotation::R1);
    /// assert_eq!(Rotation::R3.rotate_cw(), Rotation::R0);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::R0 => Rotation::R1,
            Rotation::R1 => Rotation::R2,
            Rotation::R2 => Rotation::R3,
            Rotation::R3 => Rotation::R0,
        }
    }

    /// Mask index in `0..4`.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A cell on the game board
///
/// Off-grid coordinates are never represented as a `Cell`; the board treats them
/// as blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Filled with the given color index (0..7).
    Occupied(u8),
}

impl Cell {
    pub fn is_occupied(self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Color index of an occupied cell.
    pub fn color(self) -> Option<u8> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color) => Some(color),
        }
    }
}

/// Unit translation of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// `(dx, dy)` applied to the piece position.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// A candidate change to a piece, validated by the board before it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rotate,
    Left,
    Right,
    Down,
}

impl Move {
    /// The translation this move performs, or `None` for a rotation.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Move::Rotate => None,
            Move::Left => Some(Direction::Left),
            Move::Right => Some(Direction::Right),
            Move::Down => Some(Direction::Down),
        }
    }
}

/// Logical input actions delivered to the game
///
/// The core does not care which device or key produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Rotate the active piece clockwise
    Rotate,
    /// Move the active piece one cell left
    MoveLeft,
    /// Move the active piece one cell right
    MoveRight,
    /// Move the active piece down, baking it if it cannot move
    MoveDown,
    /// Start the game, or toggle pause once started
    Confirm,
}

impl InputAction {
    /// Parse an action name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::InputAction;
    ///
    /// assert_eq!(InputAction::from_str("moveLeft"), Some(InputAction::MoveLeft));
    /// assert_eq!(InputAction::from_str("confirm"), Some(InputAction::Confirm));
    /// assert_eq!(InputAction::from_str("hold"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotate" => Some(InputAction::Rotate),
            "moveleft" => Some(InputAction::MoveLeft),
            "moveright" => Some(InputAction::MoveRight),
            "movedown" => Some(InputAction::MoveDown),
            "confirm" => Some(InputAction::Confirm),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputAction::Rotate => "rotate",
            InputAction::MoveLeft => "moveLeft",
            InputAction::MoveRight => "moveRight",
            InputAction::MoveDown => "moveDown",
            InputAction::Confirm => "confirm",
        }
    }
}
