//! Intake of per-face color readings from a scanner.
//!
//! A scanner delivers nine stickers per face, one face at a time. The cube is only built once
//! all six readings are present and well formed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Color, Cube, CubeError, Face};

/// The order the scanner asks for faces
pub const SCAN_ORDER: [Face; 6] = [
    Face::Front,
    Face::Right,
    Face::Back,
    Face::Left,
    Face::Up,
    Face::Down,
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("No reading for the {0} face")]
    MissingFace(Face),
    #[error("The {face} face has {len} stickers, expected 9")]
    WrongLength { face: Face, len: usize },
    #[error("Bad sticker on the {face} face: {source}")]
    Color {
        face: Face,
        #[source]
        source: CubeError,
    },
}

/// One reading per face, each a string of nine color letters such as `"GGWGGGOGG"`.
///
/// Whitespace inside a reading is ignored so rows may be written apart.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Scan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down: Option<String>,
}

impl Scan {
    fn slot(&self, face: Face) -> &Option<String> {
        match face {
            Face::Front => &self.front,
            Face::Right => &self.right,
            Face::Back => &self.back,
            Face::Left => &self.left,
            Face::Up => &self.up,
            Face::Down => &self.down,
        }
    }

    fn slot_mut(&mut self, face: Face) -> &mut Option<String> {
        match face {
            Face::Front => &mut self.front,
            Face::Right => &mut self.right,
            Face::Back => &mut self.back,
            Face::Left => &mut self.left,
            Face::Up => &mut self.up,
            Face::Down => &mut self.down,
        }
    }

    #[must_use]
    pub fn reading(&self, face: Face) -> Option<&str> {
        self.slot(face).as_deref()
    }

    /// Record the scanner's reading of one face, replacing any earlier one
    pub fn record(&mut self, face: Face, reading: &[Color; 9]) {
        *self.slot_mut(face) = Some(reading.iter().map(|color| color.letter()).collect());
    }

    /// The first face in scan order that has not been read yet
    #[must_use]
    pub fn next_missing(&self) -> Option<Face> {
        SCAN_ORDER
            .into_iter()
            .find(|&face| self.reading(face).is_none())
    }

    /// The readings of every face of `cube`
    #[must_use]
    pub fn of_cube(cube: &Cube) -> Scan {
        let mut scan = Scan::default();
        for face in Face::ALL {
            scan.record(face, cube.face(face));
        }
        scan
    }

    /// Build the cube once every face has been read.
    ///
    /// # Errors
    ///
    /// Fails if a face is missing, has other than nine stickers, or has a letter that is not a
    /// color. Deeper checks are left to `Cube::check_invariants`.
    pub fn to_cube(&self) -> Result<Cube, ScanError> {
        let mut faces = [[Color::White; 9]; 6];

        for face in SCAN_ORDER {
            let reading = self.reading(face).ok_or(ScanError::MissingFace(face))?;
            faces[face as usize] = parse_reading(face, reading)?;
        }

        Ok(Cube::from_faces(faces))
    }
}

/// Parse one face's reading.
///
/// # Errors
///
/// Fails if the reading does not hold exactly nine color letters
pub fn parse_reading(face: Face, reading: &str) -> Result<[Color; 9], ScanError> {
    let colors = reading
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Color::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| ScanError::Color { face, source })?;

    let len = colors.len();
    colors
        .try_into()
        .map_err(|_| ScanError::WrongLength { face, len })
}
