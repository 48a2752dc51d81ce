//! How each sticker colour is drawn: its glyph and terminal colour.

use std::{
    fmt::{self, Display},
    ops::Index,
    path::Path,
};

use log::debug;
use owo_colors::{AnsiColors, DynColor};
use rubik_core::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read the colour scheme: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse the colour scheme: {0}")]
    Toml(#[from] toml::de::Error),
}

/// The eight basic ANSI foreground colours.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl From<BaseColor> for AnsiColors {
    fn from(color: BaseColor) -> Self {
        match color {
            BaseColor::Black => AnsiColors::Black,
            BaseColor::Red => AnsiColors::Red,
            BaseColor::Green => AnsiColors::Green,
            BaseColor::Yellow => AnsiColors::Yellow,
            BaseColor::Blue => AnsiColors::Blue,
            BaseColor::Magenta => AnsiColors::Magenta,
            BaseColor::Cyan => AnsiColors::Cyan,
            BaseColor::White => AnsiColors::White,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellStyle {
    pub glyph: char,
    pub color: BaseColor,
    /// Bold text shows as the bright variant on most terminals.
    #[serde(default)]
    pub bold: bool,
}

impl CellStyle {
    #[must_use]
    pub const fn new(glyph: char, color: BaseColor, bold: bool) -> Self {
        CellStyle { glyph, color, bold }
    }

    /// The glyph wrapped in colour escapes, bold before colour:
    /// `ESC[1;32m` `G` `ESC[0m`.
    #[must_use]
    pub fn painted(self) -> Painted {
        Painted(self)
    }
}

/// A glyph that displays with its colour escapes. `owo_colors::Style` always
/// puts the colour code before the bold flag, so the prefix is built here.
#[derive(Debug, Copy, Clone)]
pub struct Painted(CellStyle);

impl Display for Painted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\x1b[")?;
        if self.0.bold {
            f.write_str("1;")?;
        }
        AnsiColors::from(self.0.color).fmt_raw_ansi_fg(f)?;
        write!(f, "m{}\x1b[0m", self.0.glyph)
    }
}

/// One `CellStyle` per sticker colour.
///
/// In TOML every colour is an optional table keyed by its lowercase name:
///
/// ```toml
/// [orange]
/// glyph = "O"
/// color = "magenta"
/// bold = true
/// ```
///
/// Colours that are left out keep their default style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ColorSchemeRepr", into = "ColorSchemeRepr")]
pub struct ColorScheme([CellStyle; 6]);

impl Default for ColorScheme {
    fn default() -> Self {
        use BaseColor as B;

        ColorScheme([
            CellStyle::new('R', B::Red, true),
            CellStyle::new('G', B::Green, true),
            CellStyle::new('W', B::White, true),
            CellStyle::new('B', B::Blue, true),
            CellStyle::new('Y', B::Yellow, true),
            // There is no orange among the basic colours
            CellStyle::new('O', B::Yellow, false),
        ])
    }
}

impl Index<Color> for ColorScheme {
    type Output = CellStyle;

    fn index(&self, index: Color) -> &Self::Output {
        &self.0[index as usize]
    }
}

impl ColorScheme {
    #[must_use]
    pub fn cell(&self, color: Color) -> CellStyle {
        self[color]
    }

    /// # Errors
    ///
    /// If `source` is not valid TOML or names an unknown colour or field.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// # Errors
    ///
    /// If the file cannot be read or does not parse, see
    /// [`ColorScheme::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let scheme = Self::from_toml_str(&std::fs::read_to_string(path)?)?;
        debug!("Loaded colour scheme from {}", path.display());
        Ok(scheme)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ColorSchemeRepr {
    red: CellStyle,
    green: CellStyle,
    white: CellStyle,
    blue: CellStyle,
    yellow: CellStyle,
    orange: CellStyle,
}

impl Default for ColorSchemeRepr {
    fn default() -> Self {
        ColorScheme::default().into()
    }
}

impl From<ColorSchemeRepr> for ColorScheme {
    fn from(repr: ColorSchemeRepr) -> Self {
        ColorScheme([
            repr.red,
            repr.green,
            repr.white,
            repr.blue,
            repr.yellow,
            repr.orange,
        ])
    }
}

impl From<ColorScheme> for ColorSchemeRepr {
    fn from(scheme: ColorScheme) -> Self {
        let [red, green, white, blue, yellow, orange] = scheme.0;
        ColorSchemeRepr {
            red,
            green,
            white,
            blue,
            yellow,
            orange,
        }
    }
}
