//! Sticker colours of every cubie in the solved state, and the wiring from
//! each face position to the cubie slot that colours it.

use std::fmt::{self, Display};

/// One of the six sticker colours.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    White,
    Blue,
    Yellow,
    Orange,
}

impl Color {
    pub const ALL: [Self; 6] = {
        use Color::*;
        let v = [Red, Green, White, Blue, Yellow, Orange];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The single letter used for this colour in facelet strings and
    /// diagrams.
    #[must_use]
    pub fn glyph(self) -> char {
        b"RGWBYO"[self as usize] as char
    }

    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.glyph() == glyph)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    U,
    D,
    L,
    R,
    F,
    B,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, D, L, R, F, B];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub fn letter(self) -> char {
        b"UDLRFB"[self as usize] as char
    }

    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.letter() == letter)
    }

    /// The colour of this face's centre, which no move can change.
    #[must_use]
    pub fn center(self) -> Color {
        match FACE_MAP[self as usize][4] {
            Facelet::Center(color) => color,
            Facelet::Corner { .. } | Facelet::Edge { .. } => {
                unreachable!("position 4 of every face is a centre")
            }
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Sticker colours of each edge cubie. An edge sitting in its slot with
/// alignment `a` shows colour `(offset + a) % 2` at facelet offset `offset`.
pub const EDGE_COLORS: [[Color; 2]; 12] = {
    use Color::*;
    [
        [Red, Green],
        [Red, White],
        [Red, Blue],
        [Red, Yellow],
        [White, Green],
        [Blue, White],
        [Blue, Yellow],
        [Yellow, Green],
        [Orange, Green],
        [Orange, White],
        [Orange, Blue],
        [Orange, Yellow],
    ]
};

/// Sticker colours of each corner cubie, listed in rotational order.
pub const CORNER_COLORS: [[Color; 3]; 8] = {
    use Color::*;
    [
        [Red, Green, White],
        [Red, White, Blue],
        [Red, Blue, Yellow],
        [Red, Yellow, Green],
        [Orange, White, Green],
        [Orange, Blue, White],
        [Orange, Yellow, Blue],
        [Orange, Green, Yellow],
    ]
};

/// What determines the colour of a single facelet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Facelet {
    /// Sticker `offset` of whichever corner occupies `slot`.
    Corner { slot: u8, offset: u8 },
    /// Sticker `offset` of whichever edge occupies `slot`.
    Edge { slot: u8, offset: u8 },
    Center(Color),
}

const fn c(slot: u8, offset: u8) -> Facelet {
    Facelet::Corner { slot, offset }
}

const fn e(slot: u8, offset: u8) -> Facelet {
    Facelet::Edge { slot, offset }
}

const fn x(color: Color) -> Facelet {
    Facelet::Center(color)
}

/// For every face (indexed by `Face as usize`) the nine facelets in row-major
/// order. Corners sit at positions 0, 2, 6 and 8, edges at 1, 3, 5 and 7.
#[rustfmt::skip]
pub const FACE_MAP: [[Facelet; 9]; 6] = [
    // U
    [
        c(0, 0), e(1, 0), c(1, 0),
        e(0, 0), x(Color::Red), e(2, 0),
        c(3, 0), e(3, 0), c(2, 0),
    ],
    // D
    [
        c(6, 0), e(10, 0), c(5, 0),
        e(11, 0), x(Color::Orange), e(9, 0),
        c(7, 0), e(8, 0),  c(4, 0),
    ],
    // L
    [
        c(0, 1), e(0, 1), c(3, 2),
        e(4, 1), x(Color::Green), e(7, 1),
        c(4, 2), e(8, 1), c(7, 1),
    ],
    // R
    [
        c(2, 1), e(2, 1),  c(1, 2),
        e(6, 0), x(Color::Blue), e(5, 0),
        c(6, 2), e(10, 1), c(5, 1),
    ],
    // F
    [
        c(3, 1), e(3, 1),  c(2, 2),
        e(7, 0), x(Color::Yellow), e(6, 1),
        c(7, 2), e(11, 1), c(6, 1),
    ],
    // B
    [
        c(1, 1), e(1, 1), c(0, 2),
        e(5, 1), x(Color::White), e(4, 0),
        c(5, 2), e(9, 1), c(4, 1),
    ],
];
