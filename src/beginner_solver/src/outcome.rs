use std::fmt::{self, Display};

use cube_core::Algorithm;

/// A state the current phase cannot get out of on its own
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Blocked {
    /// No first layer edge shows its color on the working layer. The missing edges are either in
    /// the middle layer or sitting sideways on the working layer, and one has to be brought out
    /// by hand
    CheckMiddleLayer,
}

impl Display for Blocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Blocked::CheckMiddleLayer => f.write_str("Check Middle Layer"),
        }
    }
}

/// What kind of situation a step was chosen for, so a narrator can say something sensible
/// about it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum StepKind {
    /// A single turn that makes direct progress
    Turn,
    /// Turn the working layer to look for a match
    Search,
    /// Turn the working layer further because the same position came back after a search
    ForcedAdvance,
    LeftTrigger,
    RightTrigger,
    /// A first layer sticker faces straight out of the working layer
    WhiteOnTop,
    /// A first layer sticker is stuck in the wrong slot of the finished layer
    StuckBottom,
    InsertLeft,
    InsertRight,
    /// Knock a wrong edge out of the middle layer
    EjectEdge,
    Sledgehammer,
    Sune,
    Headlights,
    EdgeCycle,
    /// Turn the last layer to line it up before the next algorithm
    Align,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Step {
    pub kind: StepKind,
    pub moves: Algorithm,
}

impl Step {
    #[must_use]
    pub fn new(kind: StepKind, moves: impl Into<Algorithm>) -> Step {
        Step {
            kind,
            moves: moves.into(),
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StepKind::LeftTrigger => f.write_str("Left Trigger"),
            StepKind::RightTrigger => f.write_str("Right Trigger"),
            StepKind::WhiteOnTop => f.write_str("WhiteOnTop"),
            StepKind::StuckBottom => f.write_str("StuckBottom"),
            _ => write!(f, "{}", self.moves),
        }
    }
}

/// The answer of a phase solver to "what now?"
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Outcome {
    Done,
    Step(Step),
    Blocked(Blocked),
}

impl Outcome {
    #[must_use]
    pub fn step(kind: StepKind, moves: impl Into<Algorithm>) -> Outcome {
        Outcome::Step(Step::new(kind, moves))
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done)
    }

    /// Rewrite the moves of a step, leaving sentinels alone
    #[must_use]
    pub fn map_moves(self, f: impl FnOnce(&Algorithm) -> Algorithm) -> Outcome {
        match self {
            Outcome::Step(Step { kind, moves }) => Outcome::step(kind, f(&moves)),
            other => other,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done => f.write_str("DONE"),
            Outcome::Step(step) => step.fmt(f),
            Outcome::Blocked(blocked) => blocked.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_use_their_wire_names() {
        let alg: Algorithm = "F D F'".parse().unwrap();

        assert_eq!(Outcome::Done.to_string(), "DONE");
        assert_eq!(
            Outcome::Blocked(Blocked::CheckMiddleLayer).to_string(),
            "Check Middle Layer"
        );
        assert_eq!(
            Outcome::step(StepKind::LeftTrigger, alg.clone()).to_string(),
            "Left Trigger"
        );
        assert_eq!(Outcome::step(StepKind::Turn, alg).to_string(), "F D F'");
    }
}
