#![warn(clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::module_name_repetitions)]

//! Layer-by-layer beginner method over a [`cube_core::Cube`].
//!
//! Every phase looks at the cube through a view in which the layer being built is on top and
//! the layer being searched is on the bottom, and answers with the single next step to take.

mod algs;
mod geometry;
mod orientation;
mod outcome;
pub mod phases;
mod session;

pub use orientation::Orientation;
pub use outcome::{Blocked, Outcome, Step, StepKind};
pub use phases::{Detection, Phase, PhaseParseError, PhaseSolver, Solver};
pub use session::{Performer, Session, SessionError, Simulated};
