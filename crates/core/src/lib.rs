//! Core game logic - deterministic board and piece simulation
//!
//! This crate contains the rules and state of Blockfall. It has **no
//! dependencies** on terminals, audio or wall-clock time:
//!
//! - **Deterministic**: the same seed and the same inputs produce the same game
//! - **Testable**: every rule is reachable through plain method calls
//! - **Single-threaded**: one owner mutates the game, nothing locks
//!
//! # Module Structure
//!
//! - [`catalog`]: the seven shape definitions and their rotation masks
//! - [`piece`]: an active or simulated piece with a cached occupancy grid
//! - [`board`]: the cell grid with collision checks, baking and line clears
//! - [`clock`]: the single-slot gravity timer
//! - [`scoring`]: line rewards and difficulty progression
//! - [`game`]: the phase machine tying everything together
//! - [`session`]: owner of a game plus its renderer and audio sink
//!
//! # Example
//!
//! ```
//! use blockfall_core::Game;
//! use blockfall_types::InputAction;
//!
//! let mut game = Game::new(12345).expect("built-in tables are valid");
//! game.handle_input(InputAction::Confirm);
//! assert!(game.running());
//!
//! game.handle_input(InputAction::MoveLeft);
//! game.handle_input(InputAction::Rotate);
//!
//! // One second of gravity at difficulty 0.
//! assert_eq!(game.advance(1000), 1);
//! ```

pub mod board;
pub mod catalog;
pub mod clock;
pub mod error;
pub mod events;
pub mod frontend;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, CompletedLines};
pub use catalog::{definition_for, occupies_cell, random_kind, ShapeDefinition};
pub use clock::TickClock;
pub use error::{CatalogError, ConfigError};
pub use events::{AudioCue, GameEvent, Redraw};
pub use frontend::{AudioSink, Renderer, SilentAudio};
pub use game::{Game, GamePhase};
pub use piece::{Occupancy, Piece};
pub use rng::PieceRng;
pub use scoring::{calculate_line_score, next_difficulty, tick_interval_ms};
pub use session::Session;
pub use snapshot::{GameSnapshot, PieceSnapshot};
