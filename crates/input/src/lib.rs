//! Input module - terminal keys to logical actions
//!
//! The game only understands [`InputAction`](crate::types::InputAction); this
//! crate is the one place that knows about physical keys.
//!
//! | Keys | Action |
//! |------|--------|
//! | Up, W, K | rotate |
//! | Left, A, H | move left |
//! | Right, D, L | move right |
//! | Down, S, J | move down |
//! | Space, Enter, P | confirm (start / pause / restart) |
//! | Q, Esc, Ctrl-C | quit (handled by the runner) |

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
