use cube_core::{Cube, Face, Move, Turn};

use super::PhaseSolver;
use crate::{
    Blocked, Outcome, StepKind,
    geometry::{down_edge, up_edge},
};

/// The working layer turns tried in order when the same position comes back after a search
const SEARCH_TURNS: [Turn; 3] = [Turn::Clockwise, Turn::Double, Turn::CounterClockwise];

/// Plants the daisy's petals into a cross on the target layer.
///
/// Searching turns the working layer, which a human may not actually do. To avoid telling them
/// the same thing forever, the solver remembers the last search it emitted and the view it
/// emitted it for. Seeing that view again moves on to the next turn in `SEARCH_TURNS`.
#[derive(Clone, Debug, Default)]
pub struct Cross {
    last_search: Option<(Cube, usize)>,
}

pub(super) fn edge_solved(view: &Cube, side: Face) -> bool {
    view[(Face::Up, up_edge(side))] == view.center(Face::Up)
        && view[(side, 1)] == view.center(side)
}

impl PhaseSolver for Cross {
    fn is_complete(&self, view: &Cube) -> bool {
        Face::SIDES.into_iter().all(|side| edge_solved(view, side))
    }

    fn next_step(&mut self, view: &Cube) -> Outcome {
        if self.is_complete(view) {
            self.last_search = None;
            return Outcome::Done;
        }

        let white = view.center(Face::Up);
        let on_working_layer = |side: Face| view[(Face::Down, down_edge(side))] == white;

        let plantable = Face::SIDES.into_iter().find(|&side| {
            !edge_solved(view, side)
                && on_working_layer(side)
                && view[(side, 7)] == view.center(side)
        });

        if let Some(side) = plantable {
            self.last_search = None;
            return Outcome::step(StepKind::Turn, Move::new(side, Turn::Double));
        }

        if !Face::SIDES.into_iter().any(on_working_layer) {
            self.last_search = None;
            return Outcome::Blocked(Blocked::CheckMiddleLayer);
        }

        let (kind, index) = match &self.last_search {
            Some((seen, index)) if seen == view => {
                (StepKind::ForcedAdvance, (index + 1) % SEARCH_TURNS.len())
            }
            _ => (StepKind::Search, 0),
        };

        self.last_search = Some((view.clone(), index));
        Outcome::step(kind, Move::new(Face::Down, SEARCH_TURNS[index]))
    }
}
