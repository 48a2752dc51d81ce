//! The eighteen face turns, each stored as the `Cube` it produces from the
//! solved state.

use std::{fmt, sync::LazyLock};

use log::debug;

use crate::{
    cube::{Cube, CubeError},
    tables::Face,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Turn {
    /// A clockwise quarter turn, written without a suffix.
    Quarter,
    /// A half turn, written with a `2` suffix.
    Double,
    /// A counter-clockwise quarter turn, written with a `'` suffix.
    Inverse,
}

impl Turn {
    pub const ALL: [Self; 3] = [Turn::Quarter, Turn::Double, Turn::Inverse];

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Turn::Quarter => "",
            Turn::Double => "2",
            Turn::Inverse => "'",
        }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Turn::Quarter => Turn::Inverse,
            Turn::Double => Turn::Double,
            Turn::Inverse => Turn::Quarter,
        }
    }
}

/// A named catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub name: String,
    pub face: Face,
    pub turn: Turn,
    pub cube: Cube,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// `(slot, slot the piece comes from, orientation change)` for each slot a
/// quarter turn disturbs. Every other slot keeps its own piece.
type SparseOrbit = &'static [(u8, u8, u8)];

struct BaseTurn {
    face: Face,
    edges: SparseOrbit,
    corners: SparseOrbit,
}

const BASE_TURNS: [BaseTurn; 6] = [
    BaseTurn {
        face: Face::U,
        edges: &[(0, 3, 0), (1, 0, 0), (2, 1, 0), (3, 2, 0)],
        corners: &[(0, 3, 0), (1, 0, 0), (2, 1, 0), (3, 2, 0)],
    },
    BaseTurn {
        face: Face::D,
        edges: &[(8, 9, 0), (9, 10, 0), (10, 11, 0), (11, 8, 0)],
        corners: &[(4, 5, 0), (5, 6, 0), (6, 7, 0), (7, 4, 0)],
    },
    BaseTurn {
        face: Face::L,
        edges: &[(0, 4, 0), (4, 8, 0), (7, 0, 0), (8, 7, 0)],
        corners: &[(0, 4, 1), (3, 0, 2), (4, 7, 2), (7, 3, 1)],
    },
    BaseTurn {
        face: Face::R,
        edges: &[(2, 6, 1), (5, 2, 1), (6, 10, 1), (10, 5, 1)],
        corners: &[(1, 2, 2), (2, 6, 1), (5, 1, 1), (6, 5, 2)],
    },
    BaseTurn {
        face: Face::F,
        edges: &[(3, 7, 1), (6, 3, 0), (7, 11, 1), (11, 6, 0)],
        corners: &[(2, 3, 2), (3, 7, 1), (6, 2, 1), (7, 6, 2)],
    },
    BaseTurn {
        face: Face::B,
        edges: &[(1, 5, 0), (4, 1, 1), (5, 9, 0), (9, 4, 1)],
        corners: &[(0, 1, 2), (1, 5, 1), (4, 0, 1), (5, 4, 2)],
    },
];

/// Start from the identity and overlay the listed slots. Bijectivity is left
/// for `Cube::new` to check.
#[allow(clippy::cast_possible_truncation)]
fn overlay<const N: usize>(sparse: SparseOrbit) -> ([u8; N], [u8; N]) {
    let mut perm: [u8; N] = std::array::from_fn(|i| i as u8);
    let mut ori = [0; N];
    for &(slot, from, twist) in sparse {
        perm[slot as usize] = from;
        ori[slot as usize] = twist;
    }
    (perm, ori)
}

impl BaseTurn {
    fn cube(&self) -> Result<Cube, CubeError> {
        let (edge_perm, edge_align) = overlay::<12>(self.edges);
        let (corner_perm, corner_align) = overlay::<8>(self.corners);
        Cube::new(&edge_perm, &edge_align, &corner_perm, &corner_align)
    }
}

#[derive(Debug)]
pub struct MoveCatalog {
    // Indexed by `face * 3 + turn`
    moves: Box<[Move]>,
}

/// The process-wide catalog, built on first use.
pub static MOVES: LazyLock<MoveCatalog> = LazyLock::new(|| {
    // The base turns are constants that the tests check, so this cannot fail
    // outside of a broken build.
    let catalog = MoveCatalog::new().expect("base turn tables describe valid cubes");
    debug!("Built move catalog with {} moves", catalog.moves.len());
    catalog
});

impl MoveCatalog {
    /// Build all eighteen moves. Double and inverse turns are derived from the
    /// quarter turn rather than tabulated.
    ///
    /// # Errors
    ///
    /// If a base turn table is not a valid cube.
    pub fn new() -> Result<Self, CubeError> {
        let mut moves = Vec::with_capacity(BASE_TURNS.len() * Turn::ALL.len());

        for base in &BASE_TURNS {
            let face = base.face;
            let quarter = base.cube()?;

            for turn in Turn::ALL {
                let cube = match turn {
                    Turn::Quarter => quarter,
                    Turn::Double => quarter.apply(&quarter),
                    Turn::Inverse => quarter.invert(),
                };
                moves.push(Move {
                    name: format!("{face}{}", turn.suffix()),
                    face,
                    turn,
                    cube,
                });
            }
        }

        Ok(MoveCatalog {
            moves: moves.into_boxed_slice(),
        })
    }

    #[must_use]
    pub fn get(&self, face: Face, turn: Turn) -> &Move {
        &self.moves[face as usize * Turn::ALL.len() + turn as usize]
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Move> {
        self.moves.iter().find(|move_| move_.name == name)
    }

    /// The move whose effect on the solved cube is exactly `cube`.
    #[must_use]
    pub fn find_cube(&self, cube: &Cube) -> Option<&Move> {
        self.moves.iter().find(|move_| move_.cube == *cube)
    }

    #[must_use]
    pub fn name_of(&self, cube: &Cube) -> Option<&str> {
        self.find_cube(cube).map(|move_| move_.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// Quarter turns in both directions, without half turns.
    pub fn quarter_turn_metric(&self) -> impl Iterator<Item = &Move> {
        self.moves
            .iter()
            .filter(|move_| move_.turn != Turn::Double)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test_log::test]
    fn catalog_has_every_move() {
        assert_eq!(MOVES.len(), 18);
        assert!(MOVES.iter().map(|move_| &move_.name).all_unique());
        assert!(MOVES.iter().map(|move_| move_.cube).all_unique());
        for face in Face::ALL {
            for turn in Turn::ALL {
                let move_ = MOVES.get(face, turn);
                assert_eq!((move_.face, move_.turn), (face, turn));
                assert_eq!(MOVES.find(&move_.name), Some(move_));
                assert_eq!(MOVES.find_cube(&move_.cube), Some(move_));
                assert_eq!(MOVES.name_of(&move_.cube), Some(move_.name.as_str()));
            }
        }
        assert_eq!(MOVES.find("U").unwrap().to_string(), "U");
        assert_eq!(MOVES.find("R'").unwrap().turn, Turn::Inverse);
        assert_eq!(MOVES.find("F2").unwrap().turn, Turn::Double);
        assert!(MOVES.find("X").is_none());
        assert!(MOVES.name_of(&Cube::SOLVED).is_none());
        let u = MOVES.get(Face::U, Turn::Quarter).cube;
        let d = MOVES.get(Face::D, Turn::Quarter).cube;
        let two_faces = u.apply(&d);
        assert!(MOVES.find_cube(&two_faces).is_none());
    }

    #[test_log::test]
    fn quarter_turns_have_order_four() {
        for face in Face::ALL {
            let quarter = MOVES.get(face, Turn::Quarter).cube;
            assert_eq!(quarter, BASE_TURNS[face as usize].cube().unwrap());
            assert_eq!(Cube::SOLVED.apply(&quarter), quarter);
            assert_eq!(quarter.apply(&Cube::SOLVED), quarter);
            assert!(!quarter.is_solved());
            assert!(!quarter.pow(2).is_solved());
            assert!(
                quarter
                    .apply(&quarter)
                    .apply(&quarter)
                    .apply(&quarter)
                    .is_solved()
            );
        }
    }

    #[test]
    fn derived_moves_agree_with_quarter_turns() {
        for face in Face::ALL {
            let quarter = MOVES.get(face, Turn::Quarter).cube;
            let double = MOVES.get(face, Turn::Double).cube;
            let inverse = MOVES.get(face, Turn::Inverse).cube;
            assert_eq!(double, quarter.pow(2));
            assert_eq!(inverse, quarter.pow(3));
            assert!(quarter.apply(&inverse).is_solved());
            assert!(double.apply(&double).is_solved());
        }
    }

    #[test]
    fn quarter_turn_moves_four_of_each() {
        for move_ in MOVES.quarter_turn_metric() {
            let cube = move_.cube;
            let moved_edges = (0..12).filter(|&i| cube.edge_perm()[i] as usize != i).count();
            let moved_corners = (0..8).filter(|&i| cube.corner_perm()[i] as usize != i).count();
            assert_eq!(moved_edges, 4, "{move_}");
            assert_eq!(moved_corners, 4, "{move_}");
            // Twists on a single face cancel out
            assert_eq!(cube.corner_align().iter().map(|&a| u32::from(a)).sum::<u32>() % 3, 0);
            assert_eq!(cube.edge_align().iter().map(|&a| u32::from(a)).sum::<u32>() % 2, 0);
        }
        assert_eq!(MOVES.quarter_turn_metric().count(), 12);
    }

    #[test]
    fn opposite_faces_commute() {
        let pairs = [(Face::U, Face::D), (Face::L, Face::R), (Face::F, Face::B)];
        for (a, b) in pairs {
            let a = MOVES.get(a, Turn::Quarter).cube;
            let b = MOVES.get(b, Turn::Quarter).cube;
            assert_eq!(a.apply(&b), b.apply(&a));
        }

        let u = MOVES.get(Face::U, Turn::Quarter).cube;
        let r = MOVES.get(Face::R, Turn::Quarter).cube;
        assert_ne!(u.apply(&r), r.apply(&u));
    }

    #[test]
    fn turning_a_face_keeps_it_solid() {
        for move_ in MOVES.iter() {
            for position in 0..9 {
                assert_eq!(
                    move_.cube.facelet_color(move_.face, position),
                    move_.face.center(),
                    "{move_}"
                );
            }
        }

        let u = MOVES.get(Face::U, Turn::Quarter).cube;
        assert_eq!(
            u.facelets(),
            "RRRRRRRRROOOOOOOOOYYYGGGGGGWWWBBBBBBBBBYYYYYYGGGWWWWWW"
        );
    }

    #[test]
    fn sexy_move_has_order_six() {
        let r = MOVES.find("R").unwrap().cube;
        let u = MOVES.find("U").unwrap().cube;
        let sexy = r.apply(&u).apply(&r.invert()).apply(&u.invert());
        for n in 1..6 {
            assert!(!sexy.pow(n).is_solved());
        }
        assert!(sexy.pow(6).is_solved());
    }

    #[test]
    fn base_turns_follow_face_order() {
        for (base, face) in BASE_TURNS.iter().zip(Face::ALL) {
            assert_eq!(base.face, face);
        }
    }

    #[test]
    fn turn_inverse_is_involution() {
        for turn in Turn::ALL {
            assert_eq!(turn.inverse().inverse(), turn);
        }
        assert_eq!(Turn::Double.inverse(), Turn::Double);
    }
}
