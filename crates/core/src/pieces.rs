//! Pieces module - tetromino geometry
//!
//! Shapes are authored as `(dx, dy)` cell coordinates relative to the piece
//! anchor and flattened to row-major offsets (`dy * width + dx`) for a given
//! board width. Offsets may be negative; callers range-check before indexing.
//!
//! There are no wall kicks: a rotation either fits where it is or is rejected.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to piece anchor
pub type MinoOffset = (isize, isize);

/// Shape of a piece - 4 mino offsets from piece anchor
pub type PieceShape = [MinoOffset; 4];

/// Flattened offsets of the 4 minos for one board width.
pub type CellOffsets = [isize; 4];

const O_SHAPES: [PieceShape; 1] = [[(0, 0), (1, 0), (0, 1), (1, 1)]];

const L_SHAPES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 1), (1, 1), (1, 2), (1, 3)],
    [(1, 1), (1, 2), (0, 2), (-1, 2)],
];

const J_SHAPES: [PieceShape; 4] = [
    [(1, -1), (1, 0), (0, 1), (1, 1)],
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (1, 0), (0, 1), (0, 2)],
    [(-1, 0), (0, 0), (1, 0), (1, 1)],
];

const T_SHAPES: [PieceShape; 4] = [
    [(0, -1), (-1, 0), (0, 0), (1, 0)],
    [(0, -1), (0, 0), (1, 0), (0, 1)],
    [(-1, 0), (0, 0), (1, 0), (0, 1)],
    [(0, -1), (0, 0), (-1, 0), (0, 1)],
];

// S, Z and I only have two distinct orientations; the rotation index folds
// onto them modulo 2.
const S_SHAPES: [PieceShape; 2] = [
    [(1, 1), (2, 1), (0, 2), (1, 2)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_SHAPES: [PieceShape; 2] = [
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

const I_SHAPES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    [(1, -2), (1, -1), (1, 0), (1, 1)],
];

/// Every distinct orientation of a piece kind.
fn shapes(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::O => &O_SHAPES,
        PieceKind::L => &L_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::I => &I_SHAPES,
        PieceKind::T => &T_SHAPES,
    }
}

/// Get the shape (mino coordinates) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let table = shapes(kind);
    table[rotation.index() % table.len()]
}

/// Flattened mino offsets for a board `width` columns wide.
///
/// Panics if `width <= 2`: the shapes span up to four columns around the
/// anchor and the flattening is meaningless on narrower boards.
pub fn offsets(kind: PieceKind, rotation: Rotation, width: usize) -> CellOffsets {
    assert!(width > 2, "piece geometry needs a board wider than 2, got {width}");
    let w = width as isize;
    get_shape(kind, rotation).map(|(dx, dy)| dy * w + dx)
}

/// A piece placed on a board: kind, orientation and anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl Tetromino {
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Flattened mino offsets on a board of `width` columns
    pub fn offsets(&self, width: usize) -> CellOffsets {
        offsets(self.kind, self.rotation, width)
    }

    /// Flat index of the anchor cell (may be negative or past the end).
    pub fn anchor_index(&self, width: usize) -> isize {
        self.y as isize * width as isize + self.x as isize
    }

    /// Same piece moved to row `y`.
    pub fn at_y(self, y: i32) -> Self {
        Self { y, ..self }
    }
}
