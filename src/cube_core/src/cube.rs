use std::{
    array,
    fmt::{self, Display},
    ops::Index,
};

use itertools::Itertools;
use thiserror::Error;

use crate::{Color, ColorScheme, Face};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Unknown color letter `{0}`, expected one of W Y G B R O")]
    UnknownColor(char),
    #[error("Color {color} appears {count} times, expected 9")]
    ColorCount { color: Color, count: usize },
    #[error("Color {0} is the center of more than one face")]
    DuplicateCenter(Color),
}

/// The sticker colors of all six faces.
///
/// Each face is stored row by row as it is seen from outside the cube:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
///
/// Side faces are viewed with up on top, so row 0 borders up and row 2 borders down. Up is
/// viewed from above with front along its bottom edge and down is viewed from below with front
/// along its top edge. In both, column 0 borders left.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Cube {
    pub(crate) faces: [[Color; 9]; 6],
}

impl Cube {
    /// A solved cube colored by `scheme`
    #[must_use]
    pub fn solved(scheme: &ColorScheme) -> Cube {
        Cube {
            faces: Face::ALL.map(|face| [scheme.color_of(face); 9]),
        }
    }

    /// Build a cube from one reading per face, in `Face::ALL` order
    #[must_use]
    pub fn from_faces(faces: [[Color; 9]; 6]) -> Cube {
        Cube { faces }
    }

    #[must_use]
    pub fn face(&self, face: Face) -> &[Color; 9] {
        &self.faces[face as usize]
    }

    #[must_use]
    pub fn sticker(&self, face: Face, index: usize) -> Color {
        self.faces[face as usize][index]
    }

    /// The center sticker, which names the face's color
    #[must_use]
    pub fn center(&self, face: Face) -> Color {
        self.sticker(face, 4)
    }

    pub fn set(&mut self, face: Face, index: usize, color: Color) {
        self.faces[face as usize][index] = color;
    }

    /// Whether every face is a single color
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|face| face.iter().all_equal())
    }

    /// How many stickers of each color are on the cube, in `Color::ALL` order
    #[must_use]
    pub fn color_counts(&self) -> [(Color, usize); 6] {
        let counts = self.faces.iter().flatten().copied().counts();

        Color::ALL.map(|color| (color, counts.get(&color).copied().unwrap_or(0)))
    }

    /// Check that the six centers differ and that every color shows up exactly nine times.
    ///
    /// # Errors
    ///
    /// Returns the first violation found
    pub fn check_invariants(&self) -> Result<(), CubeError> {
        let centers = Face::ALL.map(|face| self.center(face));

        if let Some(color) = centers.into_iter().duplicates().next() {
            return Err(CubeError::DuplicateCenter(color));
        }

        for (color, count) in self.color_counts() {
            if count != 9 {
                return Err(CubeError::ColorCount { color, count });
            }
        }

        Ok(())
    }

    /// The same physical cube after turning it over half way about the front-back axis.
    ///
    /// Up and down trade places, as do left and right, and every face reads backwards.
    #[must_use]
    pub fn rotated_z2(&self) -> Cube {
        Cube {
            faces: Face::ALL.map(|face| {
                let from = self.face(face.rotated_z2());
                array::from_fn(|i| from[8 - i])
            }),
        }
    }

    fn row(&self, face: Face, row: usize) -> String {
        self.face(face)[row * 3..row * 3 + 3]
            .iter()
            .map(|color| color.letter())
            .collect()
    }
}

impl Index<(Face, usize)> for Cube {
    type Output = Color;

    fn index(&self, (face, index): (Face, usize)) -> &Color {
        &self.faces[face as usize][index]
    }
}

impl Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            writeln!(f, "    {}", self.row(Face::Up, row))?;
        }
        for row in 0..3 {
            writeln!(
                f,
                "{}",
                [Face::Left, Face::Front, Face::Right, Face::Back]
                    .into_iter()
                    .map(|face| self.row(face, row))
                    .join(" ")
            )?;
        }
        for row in 0..3 {
            writeln!(f, "    {}", self.row(Face::Down, row))?;
        }
        Ok(())
    }
}
