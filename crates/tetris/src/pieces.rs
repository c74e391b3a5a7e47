//! Piece catalog - the closed set of rotation masks
//!
//! Every piece kind has exactly four pre-enumerated 4x4 occupancy masks.
//! The masks are fixed data, not matrix rotations computed at runtime: some
//! kinds are intentionally not 90-degree images of one another (the T piece's
//! East and West masks hug opposite columns), and that asymmetry is part of
//! the contract with existing renderers and replays.

use brick_game_types::{PieceKind, Rotation};

/// A 4x4 occupancy mask; 1 = filled, 0 = empty
pub type Mask = [[u8; 4]; 4];

/// Horizontal spawn anchor (centers the 4x4 mask on a 10-wide board)
pub const SPAWN_X: i8 = 3;

/// Vertical anchor of the very first piece of a game
pub const FIRST_SPAWN_Y: i8 = -2;

/// Vertical anchor of every piece spawned after a lock; the gravity step
/// that performed the lock moves it to -2 before the piece is next visible
pub const RESPAWN_Y: i8 = -3;

/// Rotation masks indexed `[kind][rotation]` in catalog order
/// I, L, J, O, S, T, Z / North, East, South, West
const SHAPES: [[Mask; 4]; 7] = [
    // I
    [
        [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 1]],
        [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
        [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 1]],
        [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
    ],
    // L
    [
        [[0, 0, 0, 0], [0, 0, 0, 0], [1, 0, 0, 0], [1, 1, 1, 0]],
        [[0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
        [[0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 0], [0, 0, 1, 0]],
        [[0, 0, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [1, 1, 0, 0]],
    ],
    // J
    [
        [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 1, 0], [1, 1, 1, 0]],
        [[0, 0, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 1, 0]],
        [[0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 0], [1, 0, 0, 0]],
        [[0, 0, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
    ],
    // O
    [
        [[0, 0, 0, 0], [0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0]],
        [[0, 0, 0, 0], [0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0]],
        [[0, 0, 0, 0], [0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0]],
        [[0, 0, 0, 0], [0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0]],
    ],
    // S
    [
        [[0, 0, 0, 0], [0, 0, 0, 0], [0, 1, 1, 0], [1, 1, 0, 0]],
        [[0, 0, 0, 0], [0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 1, 0]],
        [[0, 0, 0, 0], [0, 0, 0, 0], [0, 1, 1, 0], [1, 1, 0, 0]],
        [[0, 0, 0, 0], [0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 1, 0]],
    ],
    // T
    [
        [[0, 0, 0, 0], [0, 0, 0, 0], [0, 1, 0, 0], [1, 1, 1, 0]],
        [[0, 0, 0, 0], [1, 0, 0, 0], [1, 1, 0, 0], [1, 0, 0, 0]],
        [[0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 0], [0, 1, 0, 0]],
        [[0, 0, 0, 0], [0, 0, 1, 0], [0, 1, 1, 0], [0, 0, 1, 0]],
    ],
    // Z
    [
        [[0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 0, 0], [0, 1, 1, 0]],
        [[0, 0, 0, 0], [0, 0, 1, 0], [0, 1, 1, 0], [0, 1, 0, 0]],
        [[0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 0, 0], [0, 1, 1, 0]],
        [[0, 0, 0, 0], [0, 0, 1, 0], [0, 1, 1, 0], [0, 1, 0, 0]],
    ],
];

/// Get the occupancy mask for a kind and rotation
pub fn mask(kind: PieceKind, rotation: Rotation) -> &'static Mask {
    &SHAPES[kind.index()][rotation.index()]
}

/// Offsets of the four filled cells of a mask, as (dx, dy) from the anchor
pub fn offsets(kind: PieceKind, rotation: Rotation) -> [(i8, i8); 4] {
    let mask = mask(kind, rotation);
    let mut out = [(0i8, 0i8); 4];
    let mut n = 0;
    for (dy, row) in mask.iter().enumerate() {
        for (dx, cell) in row.iter().enumerate() {
            if *cell != 0 && n < 4 {
                out[n] = (dx as i8, dy as i8);
                n += 1;
            }
        }
    }
    debug_assert_eq!(n, 4, "every mask has exactly four filled cells");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_count(mask: &Mask) -> usize {
        mask.iter().flatten().filter(|&&c| c != 0).count()
    }

    #[test]
    fn test_every_mask_has_four_cells() {
        for kind in PieceKind::ALL {
            for rotation in [
                Rotation::North,
                Rotation::East,
                Rotation::South,
                Rotation::West,
            ] {
                assert_eq!(
                    filled_count(mask(kind, rotation)),
                    4,
                    "{:?} {:?}",
                    kind,
                    rotation
                );
            }
        }
    }

    #[test]
    fn test_every_mask_touches_its_bottom_row() {
        // Bottom-row lock detection relies on row 3 always carrying cells.
        for kind in PieceKind::ALL {
            for rotation in [
                Rotation::North,
                Rotation::East,
                Rotation::South,
                Rotation::West,
            ] {
                let m = mask(kind, rotation);
                assert!(
                    m[3].iter().any(|&c| c != 0),
                    "{:?} {:?} has an empty bottom row",
                    kind,
                    rotation
                );
            }
        }
    }

    #[test]
    fn test_i_piece_masks() {
        assert_eq!(
            mask(PieceKind::I, Rotation::North),
            &[[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 1]]
        );
        assert_eq!(
            mask(PieceKind::I, Rotation::East),
            &[[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]]
        );
        // Only two distinct orientations
        assert_eq!(
            mask(PieceKind::I, Rotation::North),
            mask(PieceKind::I, Rotation::South)
        );
        assert_eq!(
            mask(PieceKind::I, Rotation::East),
            mask(PieceKind::I, Rotation::West)
        );
    }

    #[test]
    fn test_o_piece_never_changes() {
        let north = mask(PieceKind::O, Rotation::North);
        for rotation in [Rotation::East, Rotation::South, Rotation::West] {
            assert_eq!(mask(PieceKind::O, rotation), north);
        }
    }

    #[test]
    fn test_s_and_z_have_two_orientations() {
        for kind in [PieceKind::S, PieceKind::Z] {
            assert_eq!(mask(kind, Rotation::North), mask(kind, Rotation::South));
            assert_eq!(mask(kind, Rotation::East), mask(kind, Rotation::West));
            assert_ne!(mask(kind, Rotation::North), mask(kind, Rotation::East));
        }
    }

    #[test]
    fn test_t_side_masks_are_asymmetric() {
        // East hugs column 0, West hugs column 2; they are deliberately not
        // mirror images around the mask center.
        assert_eq!(
            mask(PieceKind::T, Rotation::East),
            &[[0, 0, 0, 0], [1, 0, 0, 0], [1, 1, 0, 0], [1, 0, 0, 0]]
        );
        assert_eq!(
            mask(PieceKind::T, Rotation::West),
            &[[0, 0, 0, 0], [0, 0, 1, 0], [0, 1, 1, 0], [0, 0, 1, 0]]
        );
    }

    #[test]
    fn test_offsets_match_mask() {
        let offs = offsets(PieceKind::I, Rotation::North);
        assert_eq!(offs, [(0, 3), (1, 3), (2, 3), (3, 3)]);

        let offs = offsets(PieceKind::L, Rotation::North);
        assert_eq!(offs, [(0, 2), (0, 3), (1, 3), (2, 3)]);
    }
}
