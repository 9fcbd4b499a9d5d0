#![warn(clippy::pedantic)]
#![allow(
    clippy::too_many_lines,
    clippy::similar_names,
    clippy::missing_panics_doc
)]

//! Sticker-level model of a 3x3x3 cube and the engine that turns its faces.

mod color;
mod cube;
mod engine;
mod moves;
pub mod scan;

pub use color::{Color, ColorScheme, Face};
pub use cube::{Cube, CubeError};
pub use moves::{Algorithm, Move, MoveParseError, Turn};
