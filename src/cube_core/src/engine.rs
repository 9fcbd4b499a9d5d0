use log::trace;

use crate::{Algorithm, Cube, Face, Move, MoveParseError};

/// Where each sticker of a face goes when that face turns clockwise. The center stays put.
const CLOCKWISE: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

type Strip = (Face, [usize; 3]);

/// The four rows of neighboring stickers dragged along by a clockwise turn of each face.
///
/// Strip `i` moves into strip `i + 1` (wrapping), sticker by sticker in the listed order. These
/// are the only adjacency definitions; double and counterclockwise turns repeat the clockwise one.
const STRIPS: [[Strip; 4]; 6] = [
    // Up: the top rows move from front to left
    [
        (Face::Front, [0, 1, 2]),
        (Face::Left, [0, 1, 2]),
        (Face::Back, [0, 1, 2]),
        (Face::Right, [0, 1, 2]),
    ],
    // Down: the bottom rows move from front to right
    [
        (Face::Front, [6, 7, 8]),
        (Face::Right, [6, 7, 8]),
        (Face::Back, [6, 7, 8]),
        (Face::Left, [6, 7, 8]),
    ],
    // Front
    [
        (Face::Up, [6, 7, 8]),
        (Face::Right, [0, 3, 6]),
        (Face::Down, [2, 1, 0]),
        (Face::Left, [8, 5, 2]),
    ],
    // Back
    [
        (Face::Up, [0, 1, 2]),
        (Face::Left, [6, 3, 0]),
        (Face::Down, [8, 7, 6]),
        (Face::Right, [2, 5, 8]),
    ],
    // Left
    [
        (Face::Up, [0, 3, 6]),
        (Face::Front, [0, 3, 6]),
        (Face::Down, [0, 3, 6]),
        (Face::Back, [8, 5, 2]),
    ],
    // Right
    [
        (Face::Front, [2, 5, 8]),
        (Face::Up, [2, 5, 8]),
        (Face::Back, [6, 3, 0]),
        (Face::Down, [2, 5, 8]),
    ],
];

impl Cube {
    fn quarter_turn(&mut self, face: Face) {
        let old = self.faces[face as usize];
        for (from, &to) in CLOCKWISE.iter().enumerate() {
            self.faces[face as usize][to] = old[from];
        }

        let strips = STRIPS[face as usize];
        let saved =
            strips.map(|(strip_face, indices)| indices.map(|i| self.sticker(strip_face, i)));

        for (i, (strip_face, indices)) in strips.iter().enumerate() {
            let incoming = saved[(i + 3) % 4];
            for (&index, color) in indices.iter().zip(incoming) {
                self.faces[*strip_face as usize][index] = color;
            }
        }
    }

    /// Turn one face of the cube
    pub fn apply_move(&mut self, mv: Move) {
        for _ in 0..mv.turn.quarter_turns() {
            self.quarter_turn(mv.face);
        }
    }

    /// Perform every move of `alg` in order
    pub fn apply(&mut self, alg: &Algorithm) {
        trace!("Applying {alg}");

        for &mv in alg {
            self.apply_move(mv);
        }
    }

    /// Parse a move token, or a space separated sequence of them, and perform it.
    ///
    /// # Errors
    ///
    /// Returns an error without touching the cube if any token is not a valid move
    pub fn apply_str(&mut self, moves: &str) -> Result<(), MoveParseError> {
        let alg = moves.parse::<Algorithm>()?;
        self.apply(&alg);
        Ok(())
    }

    /// A copy of the cube with `alg` performed on it
    #[must_use]
    pub fn after(&self, alg: &Algorithm) -> Cube {
        let mut cube = self.clone();
        cube.apply(alg);
        cube
    }
}
