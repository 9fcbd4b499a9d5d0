use cube_core::{Algorithm, Cube, Face, Move, Turn};

use super::{PhaseSolver, search};
use crate::{
    Outcome, StepKind,
    geometry::{bottom_corner, top_corner},
};

/// Seats the four first layer corners with triggers.
///
/// This only recognizes the positions a human following the method runs into. Anything else is
/// answered with a working layer turn, which can loop on a cube that was not set up by the
/// earlier phases.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLayerCorners;

fn corner_solved(view: &Cube, x: Face) -> bool {
    let [up, left, right] = top_corner(x);
    view[up] == view.center(Face::Up)
        && view[left] == view.center(x)
        && view[right] == view.center(x.right_of())
}

fn moves(moves: &[(Face, Turn)]) -> Algorithm {
    moves
        .iter()
        .map(|&(face, turn)| Move::new(face, turn))
        .collect()
}

impl PhaseSolver for FirstLayerCorners {
    fn is_complete(&self, view: &Cube) -> bool {
        Face::SIDES.into_iter().all(|x| corner_solved(view, x))
    }

    fn next_step(&mut self, view: &Cube) -> Outcome {
        use Turn::{Clockwise as Cw, CounterClockwise as Ccw, Double};

        if self.is_complete(view) {
            return Outcome::Done;
        }

        let white = view.center(Face::Up);

        // A white sticker on the side of the working layer whose neighbor already matches the
        // side it sits under goes up with the trigger on the white sticker's side
        for x in Face::SIDES {
            let y = x.right_of();
            let [_, left, right] = bottom_corner(x);

            if view[left] == white && view[right] == view.center(y) {
                let trigger = moves(&[(x, Cw), (Face::Down, Cw), (x, Ccw)]);
                return Outcome::step(StepKind::LeftTrigger, trigger);
            }

            if view[right] == white && view[left] == view.center(x) {
                let trigger = moves(&[(y, Ccw), (Face::Down, Ccw), (y, Cw)]);
                return Outcome::step(StepKind::RightTrigger, trigger);
            }
        }

        let white_on_side = Face::SIDES.into_iter().any(|x| {
            let [_, left, right] = bottom_corner(x);
            view[left] == white || view[right] == white
        });

        if white_on_side {
            return search();
        }

        // A white sticker facing straight down gets turned under a slot that needs it
        let facing_down = |x: Face| view[bottom_corner(x)[0]] == white;

        if Face::SIDES.into_iter().any(facing_down) {
            let Some(x) = Face::SIDES
                .into_iter()
                .find(|&x| facing_down(x) && !corner_solved(view, x))
            else {
                return search();
            };

            let y = x.right_of();
            let white_on_top = moves(&[
                (y, Ccw),
                (Face::Down, Double),
                (y, Cw),
                (Face::Down, Cw),
                (y, Ccw),
                (Face::Down, Ccw),
                (y, Cw),
            ]);
            return Outcome::step(StepKind::WhiteOnTop, white_on_top);
        }

        // No white left in the working layer, so one is stuck in a wrong slot of the target
        // layer. Push it back down.
        let stuck = Face::SIDES.into_iter().find(|&x| {
            !corner_solved(view, x)
                && top_corner(x)
                    .into_iter()
                    .any(|sticker| view[sticker] == white)
        });

        match stuck {
            Some(x) => {
                let y = x.right_of();
                Outcome::step(
                    StepKind::StuckBottom,
                    moves(&[(y, Ccw), (Face::Down, Ccw), (y, Cw)]),
                )
            }
            None => search(),
        }
    }
}
