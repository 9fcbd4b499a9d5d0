use std::{convert::Infallible, error::Error as StdError};

use cube_core::{Algorithm, Cube};
use log::{debug, trace};
use thiserror::Error;

use crate::{Blocked, Orientation, Outcome, Phase, PhaseSolver, Solver, Step};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("The {phase} phase is stuck: {blocked}")]
    Blocked { phase: Phase, blocked: Blocked },
    #[error("The {phase} phase did not finish within {limit} steps")]
    StepLimit { phase: Phase, limit: usize },
    #[error("Could not perform a step")]
    Performer(#[source] Box<dyn StdError + Send + Sync>),
}

/// Whoever is actually turning the cube: a simulation, or a human being told what to do
pub trait Performer {
    type Error: StdError + Send + Sync + 'static;

    /// Carry out `step`, whose moves name the faces of the stored cube. Returns whether the
    /// step was actually performed; a skipped step leaves the session's cube alone.
    fn perform(&mut self, phase: Phase, step: &Step) -> Result<bool, Self::Error>;

    /// The session is about to run `phase` with the cube held as `held`
    fn start(&mut self, _phase: Phase, _held: &Cube) -> Result<(), Self::Error> {
        Ok(())
    }

    /// The session turned the cube over before starting `phase`, and it is now held as `held`
    fn flip(&mut self, _phase: Phase, _held: &Cube) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Performs every step instantly and without complaint
#[derive(Clone, Copy, Debug, Default)]
pub struct Simulated;

impl Performer for Simulated {
    type Error = Infallible;

    fn perform(&mut self, _: Phase, _: &Step) -> Result<bool, Infallible> {
        Ok(true)
    }
}

/// A solve in progress. This is the only owner of the cube while solving; every move made on
/// the physical cube has to be mirrored here with [`Session::apply`].
#[derive(Clone, Debug)]
pub struct Session {
    cube: Cube,
    orientation: Orientation,
    phase: Phase,
    solver: Solver,
}

impl Session {
    /// Start solving a freshly scanned cube. It is held with its first layer color on top, so
    /// the scan's `Up` face is the first layer.
    #[must_use]
    pub fn new(cube: Cube) -> Session {
        Session::starting_at(cube, Phase::Daisy, Orientation::Inverted)
    }

    /// Pick up a solve at `phase`, with `cube` held in `orientation`. The cube is turned over if
    /// `phase` expects it to be held the other way.
    #[must_use]
    pub fn starting_at(cube: Cube, phase: Phase, orientation: Orientation) -> Session {
        let mut session = Session {
            cube,
            orientation,
            phase,
            solver: phase.solver(),
        };

        if phase.orientation() != orientation {
            session.flip();
        }

        session
    }

    /// The stored cube, faces named the way the human is currently holding it
    #[must_use]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The cube as the phase solvers see it
    #[must_use]
    pub fn view(&self) -> Cube {
        self.orientation.view(&self.cube)
    }

    #[must_use]
    pub fn is_phase_complete(&self) -> bool {
        self.solver.is_complete(&self.view())
    }

    /// The next step of the current phase, named by the faces of the stored cube
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Outcome {
        let outcome = self.solver.next_step(&self.view());
        trace!("{}: {outcome:?}", self.phase);
        outcome.map_moves(|moves| self.orientation.relabel(moves))
    }

    /// Record moves made on the physical cube
    pub fn apply(&mut self, alg: &Algorithm) {
        self.cube.apply(alg);
    }

    /// Turn the cube over, top to bottom. What the solver sees doesn't change.
    pub fn flip(&mut self) {
        self.cube = self.cube.rotated_z2();
        self.orientation = self.orientation.flipped();
        debug!("Flipped the cube, now {:?}", self.orientation);
    }

    /// Move on to the next phase, turning the cube over if that phase holds it the other way.
    /// Returns `None` without changing anything if this was the last phase.
    pub fn advance(&mut self) -> Option<Phase> {
        let next = self.phase.next()?;
        debug!("Finished {}, starting {next}", self.phase);

        self.phase = next;
        self.solver = next.solver();
        if next.orientation() != self.orientation {
            self.flip();
        }

        Some(next)
    }

    /// Run the current phase to completion, returning how many steps it took.
    ///
    /// Skipped steps count toward `limit`.
    ///
    /// # Errors
    ///
    /// Fails if the phase is blocked, takes more than `limit` steps, or the performer fails
    pub fn run_phase(
        &mut self,
        performer: &mut impl Performer,
        limit: usize,
    ) -> Result<usize, SessionError> {
        let mut steps = 0;

        loop {
            let step = match self.next() {
                Outcome::Done => return Ok(steps),
                Outcome::Blocked(blocked) => {
                    return Err(SessionError::Blocked {
                        phase: self.phase,
                        blocked,
                    });
                }
                Outcome::Step(step) => step,
            };

            if steps == limit {
                return Err(SessionError::StepLimit {
                    phase: self.phase,
                    limit,
                });
            }
            steps += 1;

            let performed = performer
                .perform(self.phase, &step)
                .map_err(|err| SessionError::Performer(Box::new(err)))?;

            if performed {
                self.apply(&step.moves);
            }
        }
    }

    /// Run every remaining phase, allowing `limit` steps for each. Returns the total number of
    /// steps.
    ///
    /// # Errors
    ///
    /// See [`Session::run_phase`]
    pub fn run(
        &mut self,
        performer: &mut impl Performer,
        limit: usize,
    ) -> Result<usize, SessionError> {
        let mut total = 0;

        performer
            .start(self.phase, &self.cube)
            .map_err(|err| SessionError::Performer(Box::new(err)))?;

        loop {
            total += self.run_phase(performer, limit)?;

            let orientation = self.orientation;
            let Some(next) = self.advance() else {
                return Ok(total);
            };

            if self.orientation != orientation {
                performer
                    .flip(next, &self.cube)
                    .map_err(|err| SessionError::Performer(Box::new(err)))?;
            }
        }
    }
}
