#![allow(dead_code)]

use beginner_solver::{Outcome, Step, StepKind};
use cube_core::{Algorithm, ColorScheme, Cube};

pub fn solved() -> Cube {
    Cube::solved(&ColorScheme::default())
}

pub fn alg(moves: &str) -> Algorithm {
    moves.parse().unwrap()
}

/// A solved cube after `moves`
pub fn after(moves: &str) -> Cube {
    solved().after(&alg(moves))
}

/// A solved cube set up so that `moves` solves it
pub fn before(moves: &str) -> Cube {
    solved().after(&alg(moves).inverse())
}

/// The same as `before`, for a sequence written with the last layer on top
pub fn before_from_top(moves: &str) -> Cube {
    before(&alg(moves).rotated_z2().to_string())
}

#[track_caller]
pub fn expect_step(outcome: Outcome, kind: StepKind, moves: &str) -> Step {
    let Outcome::Step(step) = outcome else {
        panic!("expected a {kind:?} step, got {outcome:?}");
    };
    assert_eq!(step.kind, kind);
    assert_eq!(step.moves.to_string(), moves);
    step
}
