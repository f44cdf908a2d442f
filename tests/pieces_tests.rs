//! Piece geometry tests

use std::collections::HashSet;

use twotris::core::{get_shape, offsets};
use twotris::types::{PieceKind, Rotation};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

#[test]
fn test_every_shape_has_four_distinct_cells() {
    for width in [3, 4, 7, 12, 14, 200] {
        for kind in PieceKind::ALL {
            for rotation in ROTATIONS {
                let cells = offsets(kind, rotation, width);
                let unique: HashSet<isize> = cells.iter().copied().collect();
                assert_eq!(unique.len(), 4, "{kind} {rotation:?} width {width}: {cells:?}");
            }
        }
    }
}

#[test]
fn test_offsets_are_pure() {
    for kind in PieceKind::ALL {
        for rotation in ROTATIONS {
            let first = offsets(kind, rotation, 12);
            for _ in 0..3 {
                assert_eq!(offsets(kind, rotation, 12), first);
            }
        }
    }
}

#[test]
fn test_spawn_orientations() {
    assert_eq!(get_shape(PieceKind::O, Rotation::North), [(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(get_shape(PieceKind::L, Rotation::North), [(0, 0), (0, 1), (0, 2), (1, 2)]);
    assert_eq!(get_shape(PieceKind::J, Rotation::North), [(1, -1), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(get_shape(PieceKind::S, Rotation::North), [(1, 1), (2, 1), (0, 2), (1, 2)]);
    assert_eq!(get_shape(PieceKind::Z, Rotation::North), [(0, 1), (1, 1), (1, 2), (2, 2)]);
    assert_eq!(get_shape(PieceKind::I, Rotation::North), [(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert_eq!(get_shape(PieceKind::T, Rotation::North), [(0, -1), (-1, 0), (0, 0), (1, 0)]);
}

#[test]
fn test_four_state_pieces_have_four_shapes() {
    for kind in [PieceKind::L, PieceKind::J, PieceKind::T] {
        let shapes: HashSet<_> = ROTATIONS.iter().map(|&r| get_shape(kind, r)).collect();
        assert_eq!(shapes.len(), 4, "{kind}");
    }
}

#[test]
fn test_later_rotations() {
    assert_eq!(get_shape(PieceKind::L, Rotation::West), [(1, 1), (1, 2), (0, 2), (-1, 2)]);
    assert_eq!(get_shape(PieceKind::J, Rotation::South), [(0, 0), (1, 0), (0, 1), (0, 2)]);
    assert_eq!(get_shape(PieceKind::T, Rotation::East), [(0, -1), (0, 0), (1, 0), (0, 1)]);
    assert_eq!(get_shape(PieceKind::I, Rotation::West), [(1, -2), (1, -1), (1, 0), (1, 1)]);
}
