//! Terminal "game renderer" module.
//!
//! Turns the board and player stats into a byte stream of glyphs and
//! cursor-movement escapes. It never clears the screen: each frame is
//! painted over the previous one in place, which keeps the redraw
//! flicker-free on plain terminals.
//!
//! Any `std::io::Write` can be the output sink, which is how the tests
//! capture frames.

pub mod renderer;

pub use twotris_core as core;
pub use twotris_types as types;

pub use renderer::{glyph, stat_line, Renderer};
