//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no I/O, so they can be shared by the
//! simulation, the input layer and the renderer alike.
//!
//! # Board Dimensions
//!
//! The player chooses a *playable* area (default 10x20). The engine adds a
//! one-cell wall on the left and right and a one-row floor at the bottom, so
//! the logical board is `(width + 2) x (height + 1)`.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK` | 100ms | One input window; the whole loop advances once per tick |
//! | `BASE_GRAVITY_TICKS` | 10 | Ticks between forced drops with no lines cleared |
//! | `LINES_PER_SPEEDUP` | 10 | Every 10 cleared lines remove one tick of delay |
//!
//! # Examples
//!
//! ```
//! use twotris_types::{Buttons, PieceKind, Rotation};
//!
//! let piece = PieceKind::from_char('t').unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
//!
//! let pressed = Buttons::LEFT | Buttons::ROTATE_RIGHT;
//! assert!(pressed.intersects(Buttons::MOVEMENT));
//! ```

use std::fmt;
use std::time::Duration;

/// Default playable width in columns.
pub const DEFAULT_WIDTH: u16 = 10;

/// Default playable height in rows.
pub const DEFAULT_HEIGHT: u16 = 20;

/// Upper bound on logical cells (walls and floor included) for one board.
pub const MAX_BOARD_CELLS: usize = 64 * 1024;

/// Length of one input window, and so of one loop iteration.
pub const TICK: Duration = Duration::from_millis(100);

/// Ticks between forced drops before any line has been cleared.
pub const BASE_GRAVITY_TICKS: u32 = 10;

/// Cleared lines needed to shave one tick off the gravity delay.
pub const LINES_PER_SPEEDUP: u32 = 10;

/// Points for a settlement clearing `n` lines are `n * n * LINE_SCORE_UNIT`.
pub const LINE_SCORE_UNIT: u32 = 100;

/// The seven tetromino piece kinds
///
/// The declaration order is the ordinal used for uniform random selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    L,
    J,
    S,
    Z,
    I,
    T,
}

impl PieceKind {
    /// Number of piece kinds.
    pub const COUNT: usize = 7;

    /// All kinds in ordinal order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
        PieceKind::T,
    ];

    /// Map an ordinal in `0..7` to a kind.
    ///
    /// Panics on any other value: an out-of-range ordinal is a programming error.
    pub fn from_index(index: usize) -> Self {
        assert!(
            index < Self::COUNT,
            "piece ordinal {index} outside 0..{}",
            Self::COUNT
        );
        Self::ALL[index]
    }

    /// Ordinal of this kind.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter name shown in the "next piece" readout.
    pub fn as_char(self) -> char {
        match self {
            PieceKind::O => 'O',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::I => 'I',
            PieceKind::T => 'T',
        }
    }

    /// Parse piece kind from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use twotris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('i'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('O'), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_char() == c.to_ascii_uppercase())
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Piece orientation
///
/// Always cycles through four states. Kinds with fewer visually distinct
/// shapes fold the index in the geometry table instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (one step forward)
    pub fn rotate_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise, expressed as three steps forward so the
    /// arithmetic never goes negative.
    pub fn rotate_ccw(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Index in `0..4`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Build from any index, reduced modulo 4.
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// One of the two participants sharing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub const BOTH: [Seat; 2] = [Seat::One, Seat::Two];

    /// Zero-based index, used for array storage and stat-line placement.
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }

    /// One-based player number as printed on screen.
    pub fn number(self) -> usize {
        self.index() + 1
    }
}

bitflags::bitflags! {
    /// Logical actions observed for one seat during one tick.
    ///
    /// Several can be set at once; the round state machine resolves them in a
    /// fixed order rather than by arrival order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Buttons: u8 {
        const GHOST = 1 << 0;
        const QUIT = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const ROTATE_LEFT = 1 << 4;
        const ROTATE_RIGHT = 1 << 5;
        const HARD_DROP = 1 << 6;
        const SOFT_DROP = 1 << 7;

        /// Keys that wake an idle player.
        const MOVEMENT = Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

/// Buttons for both seats during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    buttons: [Buttons; 2],
}

impl TickInput {
    pub fn new(one: Buttons, two: Buttons) -> Self {
        Self { buttons: [one, two] }
    }

    pub fn get(&self, seat: Seat) -> Buttons {
        self.buttons[seat.index()]
    }

    pub fn insert(&mut self, seat: Seat, buttons: Buttons) {
        self.buttons[seat.index()] |= buttons;
    }

    /// Add everything pressed in `other`.
    pub fn merge(&mut self, other: TickInput) {
        for seat in Seat::BOTH {
            self.insert(seat, other.get(seat));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.iter().all(|b| b.is_empty())
    }
}

/// Playable area requested at startup, before walls and floor are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSize {
    pub width: u16,
    pub height: u16,
}

impl BoardSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Logical width including both wall columns.
    pub fn logical_width(&self) -> usize {
        self.width as usize + 2
    }

    /// Logical height including the floor row.
    pub fn logical_height(&self) -> usize {
        self.height as usize + 1
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_ordinals_round_trip() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_index(i), *kind);
        }
    }

    #[test]
    #[should_panic(expected = "piece ordinal")]
    fn piece_ordinal_out_of_range_panics() {
        PieceKind::from_index(7);
    }

    #[test]
    fn rotation_cycles_in_both_directions() {
        let mut r = Rotation::North;
        for _ in 0..4 {
            r = r.rotate_cw();
        }
        assert_eq!(r, Rotation::North);

        assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
        assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
        assert_eq!(Rotation::East.rotate_ccw().rotate_cw(), Rotation::East);
    }

    #[test]
    fn tick_input_keeps_seats_apart() {
        let mut input = TickInput::default();
        assert!(input.is_empty());
        input.insert(Seat::Two, Buttons::HARD_DROP);
        assert_eq!(input.get(Seat::One), Buttons::empty());
        assert_eq!(input.get(Seat::Two), Buttons::HARD_DROP);
    }

    #[test]
    fn default_board_size_adds_walls_and_floor() {
        let size = BoardSize::default();
        assert_eq!(size.logical_width(), 12);
        assert_eq!(size.logical_height(), 21);
    }
}
