use cube_core::{Cube, Face};

use super::{PhaseSolver, search};
use crate::{
    Outcome, StepKind, algs,
    geometry::{down_edge, middle_edge},
};

/// Inserts the four middle layer edges from the working layer
#[derive(Clone, Copy, Debug, Default)]
pub struct SecondLayer;

fn edge_solved(view: &Cube, x: Face) -> bool {
    let [left, right] = middle_edge(x);
    view[left] == view.center(x) && view[right] == view.center(x.right_of())
}

impl PhaseSolver for SecondLayer {
    fn is_complete(&self, view: &Cube) -> bool {
        Face::SIDES.into_iter().all(|x| edge_solved(view, x))
    }

    fn next_step(&mut self, view: &Cube) -> Outcome {
        if self.is_complete(view) {
            return Outcome::Done;
        }

        let yellow = view.center(Face::Down);
        let mut clean_edge = false;

        for side in Face::SIDES {
            let on_side = view[(side, 7)];
            let on_bottom = view[(Face::Down, down_edge(side))];

            // Edges showing the working layer's color belong to the last layer
            if on_side == yellow || on_bottom == yellow {
                continue;
            }
            clean_edge = true;

            if on_side != view.center(side) {
                continue;
            }

            if on_bottom == view.center(side.left_of()) {
                let insert = algs::alg(&algs::INSERT_LEFT).around(side);
                return Outcome::step(StepKind::InsertLeft, insert);
            }

            if on_bottom == view.center(side.right_of()) {
                let insert = algs::alg(&algs::INSERT_RIGHT).around(side);
                return Outcome::step(StepKind::InsertRight, insert);
            }
        }

        if clean_edge {
            return search();
        }

        // Every middle layer edge is still in the middle layer, so one of them is in the wrong
        // slot or flipped
        match Face::SIDES.into_iter().find(|&x| !edge_solved(view, x)) {
            Some(x) => {
                let eject = algs::alg(&algs::INSERT_LEFT).around(x.right_of());
                Outcome::step(StepKind::EjectEdge, eject)
            }
            None => search(),
        }
    }
}
