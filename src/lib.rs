//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under short names so the binary, integration
//! tests and benches can write `blockfall::core::Game` and friends.

pub mod config;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
