#![warn(clippy::pedantic)]

//! Draws a cube as an unfolded cross: B on top, then L U R D side by side,
//! then F at the bottom.

mod scheme;

use std::fmt::{self, Display};

use rubik_core::{Cube, Face};

pub use scheme::{BaseColor, CellStyle, ColorScheme, ConfigError, Painted};

const INDENT: &str = "            ";
const BAND: [Face; 4] = [Face::L, Face::U, Face::R, Face::D];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub scheme: ColorScheme,
    /// Wrap every glyph in colour escapes. Without them the layout is
    /// unchanged.
    pub ansi: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            scheme: ColorScheme::default(),
            ansi: true,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn plain() -> Self {
        RenderOptions {
            ansi: false,
            ..Self::default()
        }
    }
}

/// Renders one cube. `render` takes the renderer by value, so each instance
/// produces exactly one diagram.
#[derive(Debug)]
pub struct Renderer<'a> {
    cube: &'a Cube,
    options: RenderOptions,
}

impl<'a> Renderer<'a> {
    #[must_use]
    pub fn new(cube: &'a Cube, options: RenderOptions) -> Self {
        Renderer { cube, options }
    }

    #[must_use]
    pub fn render(self) -> String {
        Diagram {
            cube: self.cube,
            options: &self.options,
        }
        .to_string()
    }
}

struct Diagram<'a> {
    cube: &'a Cube,
    options: &'a RenderOptions,
}

impl Diagram<'_> {
    fn cell(&self, f: &mut fmt::Formatter<'_>, face: Face, position: usize) -> fmt::Result {
        let cell = self.options.scheme[self.cube.facelet_color(face, position)];
        if self.options.ansi {
            write!(f, " {} ", cell.painted())
        } else {
            write!(f, " {} ", cell.glyph)
        }
    }

    fn face_row(&self, f: &mut fmt::Formatter<'_>, face: Face, row: usize) -> fmt::Result {
        write!(f, "|")?;
        for column in 0..3 {
            self.cell(f, face, 3 * row + column)?;
            if column != 2 {
                write!(f, " ")?;
            }
        }
        Ok(())
    }

    fn lone_face(&self, f: &mut fmt::Formatter<'_>, face: Face) -> fmt::Result {
        for row in 0..3 {
            write!(f, "{INDENT}")?;
            self.face_row(f, face, row)?;
            writeln!(f, "|")?;
            if row != 2 {
                writeln!(f, "{INDENT}+ - + - + - +")?;
            }
        }
        Ok(())
    }
}

impl Display for Diagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{INDENT}+===+===+===+")?;
        self.lone_face(f, Face::B)?;

        let border = "+===".repeat(BAND.len() * 3);
        writeln!(f, "{border}+")?;
        for row in 0..3 {
            for face in BAND {
                self.face_row(f, face, row)?;
            }
            writeln!(f, "|")?;
            if row != 2 {
                writeln!(f, "{}+", "+---".repeat(BAND.len() * 3))?;
            }
        }
        writeln!(f, "{border}+")?;

        self.lone_face(f, Face::F)?;
        writeln!(f, "{INDENT}+===+===+===+")
    }
}

/// Render with the default colour scheme.
#[must_use]
pub fn render(cube: &Cube) -> String {
    Renderer::new(cube, RenderOptions::default()).render()
}

/// Remove ANSI escape sequences, leaving the bare diagram.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Control sequences end at their first letter
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            stripped.push(c);
        }
    }
    stripped
}
