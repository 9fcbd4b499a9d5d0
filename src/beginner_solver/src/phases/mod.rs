//! One solver per phase of the method, all answering through [`PhaseSolver`].

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use cube_core::{Algorithm, Cube, Face, Turn};
use enum_dispatch::enum_dispatch;
use thiserror::Error;

use crate::{Orientation, Outcome, StepKind, algs};

mod corners;
mod cross;
mod daisy;
mod final_layer;
mod second_layer;
mod yellow;

pub use corners::FirstLayerCorners;
pub use cross::Cross;
pub use daisy::Daisy;
pub use final_layer::{FinalCorners, FinalEdges};
pub use second_layer::SecondLayer;
pub use yellow::{YellowCross, YellowFace};

/// Whether a phase is finished, together with what to do next
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Detection {
    pub complete: bool,
    pub outcome: Outcome,
}

/// A solver for a single phase. Both methods take the cube as seen by the solver, with the
/// layer being built on `Up`.
#[enum_dispatch]
pub trait PhaseSolver {
    /// Whether the phase's goal holds. This only reads the cube.
    fn is_complete(&self, view: &Cube) -> bool;

    /// The next step toward the phase's goal, or `Outcome::Done` once it holds
    fn next_step(&mut self, view: &Cube) -> Outcome;

    fn detect(&mut self, view: &Cube) -> Detection {
        Detection {
            complete: self.is_complete(view),
            outcome: self.next_step(view),
        }
    }
}

#[enum_dispatch(PhaseSolver)]
#[derive(Clone, Debug)]
pub enum Solver {
    Daisy,
    Cross,
    FirstLayerCorners,
    SecondLayer,
    YellowCross,
    YellowFace,
    FinalCorners,
    FinalEdges,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Phase {
    Daisy,
    Cross,
    FirstLayerCorners,
    SecondLayer,
    YellowCross,
    YellowFace,
    FinalCorners,
    FinalEdges,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown phase `{0}`, expected one of daisy, cross, corners, second-layer, yellow-cross, yellow-face, final-corners, final-edges")]
pub struct PhaseParseError(String);

impl Phase {
    pub const ALL: [Phase; 8] = [
        Phase::Daisy,
        Phase::Cross,
        Phase::FirstLayerCorners,
        Phase::SecondLayer,
        Phase::YellowCross,
        Phase::YellowFace,
        Phase::FinalCorners,
        Phase::FinalEdges,
    ];

    #[must_use]
    pub fn next(self) -> Option<Phase> {
        Phase::ALL.get(self as usize + 1).copied()
    }

    /// How the cube is held while a human follows this phase's steps: first layer on top until
    /// the last layer, which is built on top after turning the cube over
    #[must_use]
    pub fn orientation(self) -> Orientation {
        match self {
            Phase::Daisy | Phase::Cross | Phase::FirstLayerCorners | Phase::SecondLayer => {
                Orientation::Inverted
            }
            Phase::YellowCross | Phase::YellowFace | Phase::FinalCorners | Phase::FinalEdges => {
                Orientation::Standard
            }
        }
    }

    /// A fresh solver for this phase
    #[must_use]
    pub fn solver(self) -> Solver {
        match self {
            Phase::Daisy => Daisy.into(),
            Phase::Cross => Cross::default().into(),
            Phase::FirstLayerCorners => FirstLayerCorners.into(),
            Phase::SecondLayer => SecondLayer.into(),
            Phase::YellowCross => YellowCross.into(),
            Phase::YellowFace => YellowFace.into(),
            Phase::FinalCorners => FinalCorners.into(),
            Phase::FinalEdges => FinalEdges.into(),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Phase::Daisy => "daisy",
            Phase::Cross => "cross",
            Phase::FirstLayerCorners => "corners",
            Phase::SecondLayer => "second-layer",
            Phase::YellowCross => "yellow-cross",
            Phase::YellowFace => "yellow-face",
            Phase::FinalCorners => "final-corners",
            Phase::FinalEdges => "final-edges",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Phase {
    type Err = PhaseParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|phase| phase.name() == s)
            .ok_or_else(|| PhaseParseError(s.to_owned()))
    }
}

/// Turn the working layer and look again
fn search() -> Outcome {
    Outcome::step(StepKind::Search, algs::single(Face::Down, Turn::Clockwise))
}

/// A step worked out with the last layer on top, named in the solver's view
fn from_top(kind: StepKind, moves: Algorithm) -> Outcome {
    Outcome::step(kind, moves.rotated_z2())
}

#[cfg(test)]
mod tests {
    use cube_core::ColorScheme;

    use super::*;

    #[test]
    fn solved_cube_finishes_every_phase() {
        let solved = Cube::solved(&ColorScheme::default());

        for phase in Phase::ALL {
            let mut solver = phase.solver();
            let detection = solver.detect(&solved);
            assert!(detection.complete, "{phase}");
            assert_eq!(detection.outcome, Outcome::Done, "{phase}");
        }
    }

    #[test]
    fn phases_run_in_order() {
        assert_eq!(Phase::Daisy.next(), Some(Phase::Cross));
        assert_eq!(Phase::SecondLayer.next(), Some(Phase::YellowCross));
        assert_eq!(Phase::FinalEdges.next(), None);
        assert_eq!("yellow-face".parse::<Phase>(), Ok(Phase::YellowFace));
        assert!("oll".parse::<Phase>().is_err());
    }
}
