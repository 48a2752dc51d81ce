#![warn(clippy::pedantic)]

//! State algebra of the 3x3 cube: positions as permutation plus orientation
//! of the edge and corner orbits, composition, inversion, and the face turn
//! catalog.

mod cube;
pub mod distance;
mod facelets;
pub mod moves;
pub mod tables;

pub use cube::{Cube, CubeError, Orbit, OrientationDefect, PermutationDefect};
pub use distance::{DistanceTable, PieceState};
pub use facelets::FaceletError;
pub use moves::{MOVES, Move, MoveCatalog, Turn};
pub use tables::{Color, Face, Facelet};
