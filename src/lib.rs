#![warn(clippy::pedantic)]

//! A 3x3 cube as an algebraic object: validated states, the face turn
//! catalog, move notation and a terminal diagram.

pub use notation::{self, Algorithm, MoveToken, NotationError, apply_algorithm};
pub use render::{self, ColorScheme, RenderOptions, Renderer};
pub use rubik_core::*;
