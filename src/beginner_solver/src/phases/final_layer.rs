use cube_core::{Cube, Face, Turn};
use itertools::Itertools;

use super::{PhaseSolver, from_top};
use crate::{Outcome, StepKind, algs};

/// Puts the last layer corners in place with the A permutation.
///
/// Like the yellow phases this works on the cube with the last layer on top. A side has
/// headlights when both of its last layer corner stickers are the same color.
#[derive(Clone, Copy, Debug, Default)]
pub struct FinalCorners;

fn has_headlights(top: &Cube, side: Face) -> bool {
    top[(side, 0)] == top[(side, 2)]
}

impl PhaseSolver for FinalCorners {
    fn is_complete(&self, view: &Cube) -> bool {
        let top = view.rotated_z2();
        Face::SIDES
            .into_iter()
            .all(|side| has_headlights(&top, side) && top[(side, 0)] == top.center(side))
    }

    fn next_step(&mut self, view: &Cube) -> Outcome {
        if self.is_complete(view) {
            return Outcome::Done;
        }

        let top = view.rotated_z2();
        let align = || from_top(StepKind::Align, algs::single(Face::Up, Turn::Clockwise));
        let a_perm = algs::alg(&algs::A_PERM);

        let headlights = Face::SIDES
            .into_iter()
            .filter(|&side| has_headlights(&top, side))
            .collect_vec();

        match headlights.as_slice() {
            // Every corner is in place relative to the others
            [_, _, _, _] => align(),
            [side, ..] if top[(*side, 0)] != top.center(*side) => align(),
            // Keep the headlights at the back while the other corners cycle
            [side, ..] => from_top(StepKind::Headlights, a_perm.around(side.opposite())),
            [] => from_top(StepKind::Headlights, a_perm),
        }
    }
}

/// Cycles the last layer edges with the U permutation until the cube is solved
#[derive(Clone, Copy, Debug, Default)]
pub struct FinalEdges;

impl PhaseSolver for FinalEdges {
    fn is_complete(&self, view: &Cube) -> bool {
        view.is_solved()
    }

    fn next_step(&mut self, view: &Cube) -> Outcome {
        if self.is_complete(view) {
            return Outcome::Done;
        }

        let top = view.rotated_z2();
        let u_perm = algs::alg(&algs::U_PERM);

        match Face::SIDES
            .into_iter()
            .find(|&side| top[(side, 1)] == top.center(side))
        {
            Some(solved) => from_top(StepKind::EdgeCycle, u_perm.around(solved.opposite())),
            None => from_top(StepKind::EdgeCycle, u_perm),
        }
    }
}
