use std::{
    fmt::{self, Display},
    str::FromStr,
};

use itertools::Itertools;
use thiserror::Error;

use crate::Face;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Unknown face in move `{0}`, expected one of U D F B L R")]
    UnknownFace(String),
    #[error("Unknown turn in move `{0}`, expected nothing, `2`, or `'`")]
    UnknownTurn(String),
}

/// How far a face is turned, always measured clockwise looking at the face
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Turn {
    Clockwise,
    Double,
    CounterClockwise,
}

impl Turn {
    /// The number of clockwise quarter turns this turn is made of
    #[must_use]
    pub fn quarter_turns(self) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::Double => 2,
            Turn::CounterClockwise => 3,
        }
    }

    #[must_use]
    pub fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::Double => Turn::Double,
            Turn::CounterClockwise => Turn::Clockwise,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::Double => "2",
            Turn::CounterClockwise => "'",
        }
    }
}

/// A single face turn such as `R`, `U2` or `F'`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    #[must_use]
    pub const fn new(face: Face, turn: Turn) -> Move {
        Move { face, turn }
    }

    #[must_use]
    pub fn inverse(self) -> Move {
        Move::new(self.face, self.turn.inverse())
    }

    /// The same physical turn named from a cube that has been turned over by `Cube::rotated_z2`
    #[must_use]
    pub fn rotated_z2(self) -> Move {
        Move::new(self.face.rotated_z2(), self.turn)
    }

    /// The same turn performed on a cube that has been turned about the vertical axis so that
    /// `front` is where the front face was
    #[must_use]
    pub fn around(self, front: Face) -> Move {
        Move::new(self.face.around(front), self.turn)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();

        let face = chars
            .next()
            .and_then(Face::from_letter)
            .ok_or_else(|| MoveParseError::UnknownFace(token.to_owned()))?;

        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "2" | "2'" => Turn::Double,
            "'" | "prime" => Turn::CounterClockwise,
            _ => return Err(MoveParseError::UnknownTurn(token.to_owned())),
        };

        Ok(Move { face, turn })
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.turn.suffix())
    }
}

/// A sequence of moves performed left to right
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Algorithm {
    moves: Vec<Move>,
}

impl Algorithm {
    #[must_use]
    pub fn new(moves: Vec<Move>) -> Algorithm {
        Algorithm { moves }
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The algorithm that undoes this one
    #[must_use]
    pub fn inverse(&self) -> Algorithm {
        self.moves.iter().rev().map(|mv| mv.inverse()).collect()
    }

    /// See `Move::rotated_z2`
    #[must_use]
    pub fn rotated_z2(&self) -> Algorithm {
        self.moves.iter().map(|mv| mv.rotated_z2()).collect()
    }

    /// See `Move::around`
    #[must_use]
    pub fn around(&self, front: Face) -> Algorithm {
        self.moves.iter().map(|mv| mv.around(front)).collect()
    }
}

impl From<Move> for Algorithm {
    fn from(mv: Move) -> Algorithm {
        Algorithm { moves: vec![mv] }
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Algorithm {
            moves: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl FromStr for Algorithm {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<Move>).collect()
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.moves.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_suffix() {
        for (token, face, turn) in [
            ("U", Face::Up, Turn::Clockwise),
            ("D2", Face::Down, Turn::Double),
            ("F'", Face::Front, Turn::CounterClockwise),
            ("B2'", Face::Back, Turn::Double),
            ("Lprime", Face::Left, Turn::CounterClockwise),
        ] {
            assert_eq!(token.parse::<Move>(), Ok(Move::new(face, turn)));
        }
    }

    #[test]
    fn rejects_bad_tokens() {
        assert_eq!(
            "X".parse::<Move>(),
            Err(MoveParseError::UnknownFace("X".to_owned()))
        );
        assert_eq!(
            "R3".parse::<Move>(),
            Err(MoveParseError::UnknownTurn("R3".to_owned()))
        );
        assert_eq!(
            "R U x".parse::<Algorithm>(),
            Err(MoveParseError::UnknownFace("x".to_owned()))
        );
    }

    #[test]
    fn algorithm_display_and_inverse() {
        let alg: Algorithm = "R U R' U'".parse().unwrap();
        assert_eq!(alg.len(), 4);
        assert_eq!(alg.to_string(), "R U R' U'");
        assert_eq!(alg.inverse().to_string(), "U R U' R'");
        assert_eq!(alg.rotated_z2().to_string(), "L D L' D'");
        assert_eq!(alg.around(Face::Left).to_string(), "F U F' U'");
        assert!("".parse::<Algorithm>().unwrap().is_empty());
    }
}
