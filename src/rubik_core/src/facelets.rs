//! Reading a cube back from its 54 visible stickers.

use itertools::iproduct;
use thiserror::Error;

use crate::{
    cube::{Cube, CubeError},
    tables::{CORNER_COLORS, Color, EDGE_COLORS, FACE_MAP, Face, Facelet},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceletError {
    #[error("Expected 54 facelets but got {actual}")]
    WrongCount { actual: usize },
    #[error("Unknown facelet glyph `{glyph}` at facelet {index}")]
    UnknownGlyph { glyph: char, index: usize },
    #[error("The centre of face {face} must be {expected} but is {actual}")]
    CenterMismatch {
        face: Face,
        expected: Color,
        actual: Color,
    },
    #[error("No corner has the stickers {}{}{} (slot {slot})", .colors[0], .colors[1], .colors[2])]
    UnknownCorner { slot: usize, colors: [Color; 3] },
    #[error("No edge has the stickers {}{} (slot {slot})", .colors[0], .colors[1])]
    UnknownEdge { slot: usize, colors: [Color; 2] },
    #[error("The facelets do not describe a valid cube: {0}")]
    InvalidCube(#[from] CubeError),
}

impl Cube {
    /// Decode the format produced by [`Cube::facelets`]. Whitespace is
    /// ignored.
    ///
    /// # Errors
    ///
    /// If the string has the wrong number of glyphs, contains an unknown
    /// glyph or a misplaced centre, shows a sticker combination that no cubie
    /// has, or uses some cubie twice.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_facelets(facelets: &str) -> Result<Cube, FaceletError> {
        let colors = facelets
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(index, glyph)| {
                Color::from_glyph(glyph).ok_or(FaceletError::UnknownGlyph { glyph, index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if colors.len() != 54 {
            return Err(FaceletError::WrongCount {
                actual: colors.len(),
            });
        }

        let mut corner_stickers = [[Color::Red; 3]; 8];
        let mut edge_stickers = [[Color::Red; 2]; 12];

        for (face, (face_colors, face_map)) in Face::ALL
            .into_iter()
            .zip(colors.chunks_exact(9).zip(FACE_MAP))
        {
            for (&color, facelet) in face_colors.iter().zip(face_map) {
                match facelet {
                    Facelet::Corner { slot, offset } => {
                        corner_stickers[slot as usize][offset as usize] = color;
                    }
                    Facelet::Edge { slot, offset } => {
                        edge_stickers[slot as usize][offset as usize] = color;
                    }
                    Facelet::Center(expected) if expected != color => {
                        return Err(FaceletError::CenterMismatch {
                            face,
                            expected,
                            actual: color,
                        });
                    }
                    Facelet::Center(_) => {}
                }
            }
        }

        let mut corner_perm = [0; 8];
        let mut corner_align = [0; 8];
        for (slot, stickers) in corner_stickers.into_iter().enumerate() {
            let (cubie, align) = iproduct!(0..8, 0..3)
                .find(|&(cubie, align)| {
                    (0..3).all(|k| CORNER_COLORS[cubie][(k + align) % 3] == stickers[k])
                })
                .ok_or(FaceletError::UnknownCorner {
                    slot,
                    colors: stickers,
                })?;
            corner_perm[slot] = cubie as u8;
            corner_align[slot] = align as u8;
        }

        let mut edge_perm = [0; 12];
        let mut edge_align = [0; 12];
        for (slot, stickers) in edge_stickers.into_iter().enumerate() {
            let (cubie, align) = iproduct!(0..12, 0..2)
                .find(|&(cubie, align)| {
                    (0..2).all(|k| EDGE_COLORS[cubie][(k + align) % 2] == stickers[k])
                })
                .ok_or(FaceletError::UnknownEdge {
                    slot,
                    colors: stickers,
                })?;
            edge_perm[slot] = cubie as u8;
            edge_align[slot] = align as u8;
        }

        Ok(Cube::new(
            &edge_perm,
            &edge_align,
            &corner_perm,
            &corner_align,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cube::PermutationDefect, moves::MOVES};

    const SOLVED: &str = "RRRRRRRRROOOOOOOOOGGGGGGGGGBBBBBBBBBYYYYYYYYYWWWWWWWWW";

    #[test]
    fn solved_round_trip() {
        assert_eq!(Cube::from_facelets(SOLVED), Ok(Cube::SOLVED));
        assert_eq!(Cube::from_facelets(&Cube::SOLVED.facelets()), Ok(Cube::SOLVED));
    }

    #[test]
    fn whitespace_is_ignored() {
        let spaced = SOLVED
            .as_bytes()
            .chunks(9)
            .map(|face| std::str::from_utf8(face).unwrap())
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(Cube::from_facelets(&spaced), Ok(Cube::SOLVED));
    }

    #[test]
    fn moves_round_trip() {
        let mut cube = Cube::SOLVED;
        for move_ in MOVES.iter() {
            assert_eq!(Cube::from_facelets(&move_.cube.facelets()), Ok(move_.cube));
            cube = cube.apply(&move_.cube);
            assert_eq!(Cube::from_facelets(&cube.facelets()), Ok(cube));
        }
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(
            Cube::from_facelets("RRR"),
            Err(FaceletError::WrongCount { actual: 3 })
        );

        let mut unknown = SOLVED.to_owned();
        unknown.replace_range(10..11, "X");
        assert_eq!(
            Cube::from_facelets(&unknown),
            Err(FaceletError::UnknownGlyph {
                glyph: 'X',
                index: 10
            })
        );

        let mut center = SOLVED.to_owned();
        center.replace_range(4..5, "O");
        assert_eq!(
            Cube::from_facelets(&center),
            Err(FaceletError::CenterMismatch {
                face: Face::U,
                expected: Color::Red,
                actual: Color::Orange
            })
        );

        // U position 0 is sticker 0 of corner slot 0
        let mut corner = SOLVED.to_owned();
        corner.replace_range(0..1, "O");
        assert!(matches!(
            Cube::from_facelets(&corner),
            Err(FaceletError::UnknownCorner { slot: 0, .. })
        ));

        // U position 1 is sticker 0 of edge slot 1
        let mut edge = SOLVED.to_owned();
        edge.replace_range(1..2, "W");
        assert!(matches!(
            Cube::from_facelets(&edge),
            Err(FaceletError::UnknownEdge { slot: 1, .. })
        ));
    }

    #[test]
    fn reports_duplicate_cubie() {
        // Paint the stickers of edge slot 1 (R, W) onto edge slot 0 (R, G),
        // U position 3 and L position 1.
        let mut twice = SOLVED.to_owned();
        twice.replace_range(19..20, "W");
        assert!(matches!(
            Cube::from_facelets(&twice),
            Err(FaceletError::InvalidCube(CubeError::InvalidPermutation {
                defect: PermutationDefect::Duplicate { value: 1 },
                ..
            }))
        ));
    }
}
