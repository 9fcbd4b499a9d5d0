use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::CubeError;

/// One of the six sticker colors. The wire format is a single uppercase letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::Orange,
    ];

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Orange => "orange",
        }
    }
}

impl TryFrom<char> for Color {
    type Error = CubeError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Ok(match letter {
            'W' => Color::White,
            'Y' => Color::Yellow,
            'G' => Color::Green,
            'B' => Color::Blue,
            'R' => Color::Red,
            'O' => Color::Orange,
            _ => return Err(CubeError::UnknownColor(letter)),
        })
    }
}

impl From<Color> for char {
    fn from(color: Color) -> char {
        color.letter()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The six face slots of the cube, named by position rather than by color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// The four side faces, each one followed by the face on its right.
    pub const SIDES: [Face; 4] = [Face::Front, Face::Right, Face::Back, Face::Left];

    #[must_use]
    pub fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        }
    }

    /// The side face to the right of this one, looking at it from outside with up on top.
    ///
    /// This is a quarter rotation about the vertical axis, so up and down map to themselves.
    #[must_use]
    pub fn right_of(self) -> Face {
        match self {
            Face::Front => Face::Right,
            Face::Right => Face::Back,
            Face::Back => Face::Left,
            Face::Left => Face::Front,
            Face::Up | Face::Down => self,
        }
    }

    #[must_use]
    pub fn left_of(self) -> Face {
        match self {
            Face::Front => Face::Left,
            Face::Left => Face::Back,
            Face::Back => Face::Right,
            Face::Right => Face::Front,
            Face::Up | Face::Down => self,
        }
    }

    /// Where this face ends up after the whole cube is turned half way around the front-back axis
    #[must_use]
    pub fn rotated_z2(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front | Face::Back => self,
        }
    }

    /// Where this face ends up after turning the whole cube about the vertical axis until the
    /// front face sits where `front` was.
    #[must_use]
    pub fn around(self, front: Face) -> Face {
        let quarter_turns = match front {
            Face::Front | Face::Up | Face::Down => 0,
            Face::Right => 1,
            Face::Back => 2,
            Face::Left => 3,
        };

        (0..quarter_turns).fold(self, |face, _| face.right_of())
    }

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }

    #[must_use]
    pub fn from_letter(letter: char) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.letter() == letter)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Face::Up => "up",
            Face::Down => "down",
            Face::Front => "front",
            Face::Back => "back",
            Face::Left => "left",
            Face::Right => "right",
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which color belongs on which face. Fixed when the cube is scanned and kept for the whole
/// solve.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub up: Color,
    pub down: Color,
    pub front: Color,
    pub back: Color,
    pub left: Color,
    pub right: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            up: Color::White,
            down: Color::Yellow,
            front: Color::Green,
            back: Color::Blue,
            left: Color::Orange,
            right: Color::Red,
        }
    }
}

impl ColorScheme {
    #[must_use]
    pub fn color_of(&self, face: Face) -> Color {
        match face {
            Face::Up => self.up,
            Face::Down => self.down,
            Face::Front => self.front,
            Face::Back => self.back,
            Face::Left => self.left,
            Face::Right => self.right,
        }
    }

    /// The scheme of the same cube held upside down, see `Cube::rotated_z2`
    #[must_use]
    pub fn rotated_z2(&self) -> ColorScheme {
        ColorScheme {
            up: self.down,
            down: self.up,
            left: self.right,
            right: self.left,
            ..*self
        }
    }

    /// Whether a nine sticker reading has the center this scheme expects for `face`
    #[must_use]
    pub fn center_matches(&self, face: Face, reading: &[Color; 9]) -> bool {
        reading[4] == self.color_of(face)
    }
}
