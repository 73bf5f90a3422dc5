//! Terminal rendering for Blockfall.
//!
//! A small game-oriented rendering layer: [`GameView`] paints a
//! [`core::GameSnapshot`] into a [`FrameBuffer`], and [`TerminalRenderer`]
//! flushes framebuffers to the terminal, diffing against the previous frame.
//! [`TermFrontend`] ties both together behind the core `Renderer` trait.

pub mod fb;
pub mod frontend;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use frontend::TermFrontend;
pub use game_view::{GameView, Viewport};
pub use palette::{color_for, PALETTES};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
