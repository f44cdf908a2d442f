//! Terminal input module (engine-facing).
//!
//! Maps raw key presses into per-seat [`crate::types::Buttons`] and collects
//! them over one tick window. The terminal is only in raw mode while a window
//! is open; rendering happens with the line discipline restored.

pub mod map;
pub mod raw;
pub mod source;

pub use twotris_types as types;

pub use map::KeyMap;
pub use raw::RawModeGuard;
pub use source::{InputSource, Polled, Scripted, TerminalInput};
