use cube_core::{Cube, Face, Turn};

use super::{PhaseSolver, from_top};
use crate::{Outcome, StepKind, algs};

/// Makes a cross on the last layer with the sledgehammer.
///
/// The last layer phases reason with the last layer on top, the way the algorithms are
/// usually written down. `top` below is that picture of the cube.
#[derive(Clone, Copy, Debug, Default)]
pub struct YellowCross;

/// Which of the last layer's edges show yellow on top: back, left, right, front
fn lit_edges(top: &Cube) -> [bool; 4] {
    let yellow = top.center(Face::Up);
    [1, 3, 5, 7].map(|i| top[(Face::Up, i)] == yellow)
}

impl PhaseSolver for YellowCross {
    fn is_complete(&self, view: &Cube) -> bool {
        lit_edges(&view.rotated_z2()) == [true; 4]
    }

    fn next_step(&mut self, view: &Cube) -> Outcome {
        let top = view.rotated_z2();
        let sledgehammer = || from_top(StepKind::Sledgehammer, algs::alg(&algs::SLEDGEHAMMER));
        let align = || from_top(StepKind::Align, algs::single(Face::Up, Turn::Clockwise));

        match lit_edges(&top) {
            [true, true, true, true] => Outcome::Done,
            // A horizontal line, or an L pointing to the back left
            [false, true, true, false] | [true, true, false, false] => sledgehammer(),
            // Any other line or L has to be turned into place first
            lit if lit.iter().filter(|&&lit| lit).count() == 2 => align(),
            // The dot, and anything the method shouldn't produce
            _ => sledgehammer(),
        }
    }
}

/// Turns the whole last layer yellow with the sune
#[derive(Clone, Copy, Debug, Default)]
pub struct YellowFace;

impl PhaseSolver for YellowFace {
    fn is_complete(&self, view: &Cube) -> bool {
        let top = view.rotated_z2();
        top.face(Face::Up)
            .iter()
            .all(|&color| color == top.center(Face::Up))
    }

    fn next_step(&mut self, view: &Cube) -> Outcome {
        if self.is_complete(view) {
            return Outcome::Done;
        }

        let top = view.rotated_z2();
        let yellow = top.center(Face::Up);
        let sune = || from_top(StepKind::Sune, algs::alg(&algs::SUNE));
        let align = || from_top(StepKind::Align, algs::single(Face::Up, Turn::Clockwise));

        let yellow_corners = [0, 2, 6, 8]
            .into_iter()
            .filter(|&i| top[(Face::Up, i)] == yellow)
            .count();

        match yellow_corners {
            // The fish, with its one yellow corner at the front left
            1 if top[(Face::Up, 6)] == yellow => sune(),
            // Otherwise a yellow sticker has to face left from the front left corner
            0 | 2 if top[(Face::Left, 2)] == yellow => sune(),
            _ => align(),
        }
    }
}
