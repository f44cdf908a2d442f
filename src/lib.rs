//! Twotris (workspace facade crate).
//!
//! Re-exports the member crates under short module names and hosts the tick
//! loop that wires an input source, the game and a renderer together.

pub mod app;

pub use twotris_core as core;
pub use twotris_input as input;
pub use twotris_term as term;
pub use twotris_types as types;
