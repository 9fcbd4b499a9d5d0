//! The fixed move sequences played by the phases.

use cube_core::{
    Algorithm,
    Face::{self, Back, Down, Front, Left, Right, Up},
    Move,
    Turn::{Clockwise as Cw, CounterClockwise as Ccw, Double},
};

const fn mv(face: Face, turn: cube_core::Turn) -> Move {
    Move::new(face, turn)
}

/// Second layer insertion toward the left, at the front slot of the view
pub const INSERT_LEFT: [Move; 8] = [
    mv(Down, Cw),
    mv(Left, Cw),
    mv(Down, Ccw),
    mv(Left, Ccw),
    mv(Down, Ccw),
    mv(Front, Ccw),
    mv(Down, Cw),
    mv(Front, Cw),
];

/// Second layer insertion toward the right, at the front slot of the view
pub const INSERT_RIGHT: [Move; 8] = [
    mv(Down, Ccw),
    mv(Right, Ccw),
    mv(Down, Cw),
    mv(Right, Cw),
    mv(Down, Cw),
    mv(Front, Cw),
    mv(Down, Ccw),
    mv(Front, Ccw),
];

// The last layer sequences are written with the last layer on top

pub const SLEDGEHAMMER: [Move; 6] = [
    mv(Front, Cw),
    mv(Right, Cw),
    mv(Up, Cw),
    mv(Right, Ccw),
    mv(Up, Ccw),
    mv(Front, Ccw),
];

pub const SUNE: [Move; 7] = [
    mv(Right, Cw),
    mv(Up, Cw),
    mv(Right, Ccw),
    mv(Up, Cw),
    mv(Right, Cw),
    mv(Up, Double),
    mv(Right, Ccw),
];

/// Cycles three last layer corners, leaving the two back corners in place
pub const A_PERM: [Move; 9] = [
    mv(Right, Ccw),
    mv(Front, Cw),
    mv(Right, Ccw),
    mv(Back, Double),
    mv(Right, Cw),
    mv(Front, Ccw),
    mv(Right, Ccw),
    mv(Back, Double),
    mv(Right, Double),
];

/// Cycles three last layer edges, keeping the back edge
pub const U_PERM: [Move; 9] = [
    mv(Front, Double),
    mv(Up, Cw),
    mv(Left, Cw),
    mv(Right, Ccw),
    mv(Front, Double),
    mv(Left, Ccw),
    mv(Right, Cw),
    mv(Up, Cw),
    mv(Front, Double),
];

pub fn alg(moves: &[Move]) -> Algorithm {
    moves.iter().copied().collect()
}

pub fn single(face: Face, turn: cube_core::Turn) -> Algorithm {
    Move::new(face, turn).into()
}
