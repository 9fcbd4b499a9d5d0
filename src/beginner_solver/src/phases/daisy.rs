use cube_core::{Cube, Face, Move, Turn};

use super::{PhaseSolver, cross, search};
use crate::{
    Outcome, StepKind,
    geometry::{down_edge, up_edge},
};

/// Gathers the four first layer edges around the center of the working layer, petals of a
/// daisy, with their first layer color facing down.
///
/// A cube whose cross is already built has nothing to gather and counts as complete.
#[derive(Clone, Copy, Debug, Default)]
pub struct Daisy;

fn has_petal(view: &Cube, side: Face) -> bool {
    view[(Face::Down, down_edge(side))] == view.center(Face::Up)
}

fn turn(face: Face, turn: Turn) -> Outcome {
    Outcome::step(StepKind::Turn, Move::new(face, turn))
}

impl PhaseSolver for Daisy {
    fn is_complete(&self, view: &Cube) -> bool {
        Face::SIDES.into_iter().all(|side| has_petal(view, side))
            || Face::SIDES
                .into_iter()
                .all(|side| cross::edge_solved(view, side))
    }

    fn next_step(&mut self, view: &Cube) -> Outcome {
        if self.is_complete(view) {
            return Outcome::Done;
        }

        let white = view.center(Face::Up);

        // Flip edges down from the target layer, making room under them first
        for side in Face::SIDES {
            if view[(Face::Up, up_edge(side))] == white {
                return if has_petal(view, side) {
                    search()
                } else {
                    turn(side, Turn::Double)
                };
            }
        }

        // Middle layer edges drop down with a quarter turn of the face they don't show white on
        for side in Face::SIDES {
            for (index, neighbor) in [(5, side.right_of()), (3, side.left_of())] {
                if view[(side, index)] != white {
                    continue;
                }

                if has_petal(view, neighbor) {
                    return search();
                }

                for direction in [Turn::Clockwise, Turn::CounterClockwise] {
                    let mv = Move::new(neighbor, direction);
                    if has_petal(&view.after(&mv.into()), neighbor) {
                        return turn(neighbor, direction);
                    }
                }
            }
        }

        // Edges showing white sideways get lifted into the middle layer
        for side in Face::SIDES {
            if view[(side, 7)] == white {
                return turn(side, Turn::Clockwise);
            }
        }

        for side in Face::SIDES {
            if view[(side, 1)] == white {
                return if has_petal(view, side) {
                    search()
                } else {
                    turn(side, Turn::Clockwise)
                };
            }
        }

        search()
    }
}
