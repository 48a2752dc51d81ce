use std::fmt::{self, Display};

use thiserror::Error;

use crate::tables::{CORNER_COLORS, Color, EDGE_COLORS, FACE_MAP, Face, Facelet};

/// One of the two independent sets of pieces on a 3x3 cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orbit {
    Edges,
    Corners,
}

impl Orbit {
    #[must_use]
    pub const fn piece_count(self) -> usize {
        match self {
            Orbit::Edges => 12,
            Orbit::Corners => 8,
        }
    }

    #[must_use]
    pub const fn orientation_count(self) -> u8 {
        match self {
            Orbit::Edges => 2,
            Orbit::Corners => 3,
        }
    }
}

impl Display for Orbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orbit::Edges => f.write_str("edge"),
            Orbit::Corners => f.write_str("corner"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermutationDefect {
    #[error("expected {expected} entries but got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("slot {slot} holds {value}, which is not a piece index")]
    OutOfRange { slot: usize, value: u8 },
    #[error("piece {value} appears more than once")]
    Duplicate { value: u8 },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationDefect {
    #[error("expected {expected} entries but got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("slot {slot} has orientation {value}, expected a value below {orientation_count}")]
    OutOfRange {
        slot: usize,
        value: u8,
        orientation_count: u8,
    },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeError {
    #[error("Invalid {orbit} permutation: {defect}")]
    InvalidPermutation {
        orbit: Orbit,
        defect: PermutationDefect,
    },
    #[error("Invalid {orbit} orientation: {defect}")]
    InvalidOrientation {
        orbit: Orbit,
        defect: OrientationDefect,
    },
}

/// Permutation and orientation of one orbit. `perm[i]` is the piece sitting
/// in slot `i`, `ori[i]` its twist relative to the solved state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
struct OrbitState<const N: usize> {
    perm: [u8; N],
    ori: [u8; N],
}

impl<const N: usize> OrbitState<N> {
    #[allow(clippy::cast_possible_truncation)]
    const fn identity() -> Self {
        let mut perm = [0; N];
        let mut i = 0;
        while i < N {
            perm[i] = i as u8;
            i += 1;
        }
        OrbitState { perm, ori: [0; N] }
    }

    fn try_new(orbit: Orbit, perm: &[u8], ori: &[u8]) -> Result<Self, CubeError> {
        let invalid_perm = |defect| CubeError::InvalidPermutation { orbit, defect };
        let invalid_ori = |defect| CubeError::InvalidOrientation { orbit, defect };

        let perm: [u8; N] = perm.try_into().map_err(|_| {
            invalid_perm(PermutationDefect::WrongLength {
                expected: N,
                actual: perm.len(),
            })
        })?;
        let ori: [u8; N] = ori.try_into().map_err(|_| {
            invalid_ori(OrientationDefect::WrongLength {
                expected: N,
                actual: ori.len(),
            })
        })?;

        let mut covered = [false; N];
        for (slot, &value) in perm.iter().enumerate() {
            match covered.get_mut(value as usize) {
                Some(true) => return Err(invalid_perm(PermutationDefect::Duplicate { value })),
                Some(seen) => *seen = true,
                None => return Err(invalid_perm(PermutationDefect::OutOfRange { slot, value })),
            }
        }

        let orientation_count = orbit.orientation_count();
        if let Some((slot, &value)) = ori
            .iter()
            .enumerate()
            .find(|&(_, &value)| value >= orientation_count)
        {
            return Err(invalid_ori(OrientationDefect::OutOfRange {
                slot,
                value,
                orientation_count,
            }));
        }

        Ok(OrbitState { perm, ori })
    }

    /// `self` followed by `other`: slot `j` receives whatever `self` had in
    /// slot `other.perm[j]`, twisted further by `other.ori[j]`.
    fn compose(&self, other: &Self, orientation_count: u8) -> Self {
        let mut perm = [0; N];
        let mut ori = [0; N];
        for j in 0..N {
            let from = other.perm[j] as usize;
            let sum = self.ori[from] + other.ori[j];
            perm[j] = self.perm[from];
            ori[j] = sum.min(sum.wrapping_sub(orientation_count));
        }
        OrbitState { perm, ori }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn inverse(&self, orientation_count: u8) -> Self {
        let mut perm = [0; N];
        let mut ori = [0; N];
        for (i, (&piece, &twist)) in self.perm.iter().zip(&self.ori).enumerate() {
            perm[piece as usize] = i as u8;
            ori[piece as usize] = (orientation_count - twist) % orientation_count;
        }
        OrbitState { perm, ori }
    }
}

/// A position of the cube, or equivalently the transformation that takes the
/// solved cube to that position.
///
/// Every `Cube` is well formed: both permutations are bijections and every
/// orientation is in range. The only way to obtain one from raw sequences is
/// [`Cube::new`], which checks this.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cube {
    edges: OrbitState<12>,
    corners: OrbitState<8>,
}

impl Default for Cube {
    fn default() -> Self {
        Cube::SOLVED
    }
}

impl Cube {
    pub const SOLVED: Cube = Cube {
        edges: OrbitState::identity(),
        corners: OrbitState::identity(),
    };

    /// Create a cube from explicit permutations and orientations.
    ///
    /// # Errors
    ///
    /// `InvalidPermutation` if a permutation is not a bijection on its orbit's
    /// slots, `InvalidOrientation` if an orientation sequence has the wrong
    /// length or a value outside `0..2` (edges) or `0..3` (corners).
    pub fn new(
        edge_perm: &[u8],
        edge_align: &[u8],
        corner_perm: &[u8],
        corner_align: &[u8],
    ) -> Result<Self, CubeError> {
        Ok(Cube {
            edges: OrbitState::try_new(Orbit::Edges, edge_perm, edge_align)?,
            corners: OrbitState::try_new(Orbit::Corners, corner_perm, corner_align)?,
        })
    }

    #[must_use]
    pub fn identity() -> Self {
        Cube::SOLVED
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Cube::SOLVED
    }

    #[must_use]
    pub fn edge_perm(&self) -> &[u8; 12] {
        &self.edges.perm
    }

    #[must_use]
    pub fn edge_align(&self) -> &[u8; 12] {
        &self.edges.ori
    }

    #[must_use]
    pub fn corner_perm(&self) -> &[u8; 8] {
        &self.corners.perm
    }

    #[must_use]
    pub fn corner_align(&self) -> &[u8; 8] {
        &self.corners.ori
    }

    /// Get the (permutation, orientation) pair of one orbit.
    #[must_use]
    pub fn orbit(&self, orbit: Orbit) -> (&[u8], &[u8]) {
        match orbit {
            Orbit::Edges => (&self.edges.perm, &self.edges.ori),
            Orbit::Corners => (&self.corners.perm, &self.corners.ori),
        }
    }

    /// Perform `other` on top of `self`.
    #[must_use]
    pub fn apply(&self, other: &Cube) -> Cube {
        Cube {
            edges: self
                .edges
                .compose(&other.edges, Orbit::Edges.orientation_count()),
            corners: self
                .corners
                .compose(&other.corners, Orbit::Corners.orientation_count()),
        }
    }

    #[must_use]
    pub fn invert(&self) -> Cube {
        Cube {
            edges: self.edges.inverse(Orbit::Edges.orientation_count()),
            corners: self.corners.inverse(Orbit::Corners.orientation_count()),
        }
    }

    /// `self` applied to itself `exponent` times.
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Cube {
        (0..exponent).fold(Cube::SOLVED, |acc, _| acc.apply(self))
    }

    /// The colour showing at `position` (row-major, `0..9`) of `face`.
    ///
    /// # Panics
    ///
    /// If `position` is not below 9.
    #[must_use]
    pub fn facelet_color(&self, face: Face, position: usize) -> Color {
        assert!(position < 9, "facelet position {position} is out of range");

        match FACE_MAP[face as usize][position] {
            Facelet::Corner { slot, offset } => {
                let slot = slot as usize;
                let cubie = self.corners.perm[slot] as usize;
                CORNER_COLORS[cubie][((offset + self.corners.ori[slot]) % 3) as usize]
            }
            Facelet::Edge { slot, offset } => {
                let slot = slot as usize;
                let cubie = self.edges.perm[slot] as usize;
                EDGE_COLORS[cubie][((offset + self.edges.ori[slot]) % 2) as usize]
            }
            Facelet::Center(color) => color,
        }
    }

    /// All 54 facelet glyphs, faces in `U D L R F B` order and each face in
    /// row-major order. [`Cube::from_facelets`] reads this format back.
    #[must_use]
    pub fn facelets(&self) -> String {
        Face::ALL
            .into_iter()
            .flat_map(|face| (0..9).map(move |position| self.facelet_color(face, position).glyph()))
            .collect()
    }
}
