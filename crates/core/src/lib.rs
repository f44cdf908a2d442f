//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the game and nothing else. It has no
//! terminal or I/O dependencies, so every rule can be exercised headless.
//!
//! # Module Structure
//!
//! - [`pieces`]: piece geometry table, flattened to row-major offsets
//! - [`board`]: settled and overlay layers, collision, line detection and collapse
//! - [`player`]: per-seat state
//! - [`round`]: the per-tick state machine and landing settlement
//! - [`rng`]: piece selection without immediate repeats
//! - [`game_state`]: the two-player session and gravity cadence
//!
//! # Example
//!
//! ```
//! use std::convert::Infallible;
//!
//! use twotris_core::{Board, GameState, Outcome, PieceSource};
//! use twotris_core::types::{BoardSize, Buttons, TickInput};
//!
//! let mut game = GameState::new(BoardSize::default(), PieceSource::seeded(42)).unwrap();
//! let mut hold = |_: &Board, _: u32| Ok::<(), Infallible>(());
//!
//! let input = TickInput::new(Buttons::HARD_DROP, Buttons::empty());
//! assert_eq!(game.step(input, &mut hold).unwrap(), Outcome::Continue);
//! assert!(game.player(twotris_core::types::Seat::One).score() > 0);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod player;
pub mod rng;
pub mod round;

pub use twotris_types as types;

pub use board::{checked_size, Board, BoardError, Cell, Layer};
pub use game_state::{gravity_delay, GameState, Gravity, Outcome};
pub use pieces::{get_shape, offsets, Tetromino};
pub use player::{Player, PlayerState};
pub use rng::PieceSource;
pub use round::{advance, settle, settlement_score, Step};
