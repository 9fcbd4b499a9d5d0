//! Where the pieces of each layer sit, in the solver's view.
//!
//! The view always has the layer being built on `Up` and the layer being searched on `Down`.
//! Corner and middle edge slots are named by the side face `x` on their left, looking at `x`
//! from outside, so the other side face of the slot is `x.right_of()`.

use cube_core::Face;

pub type Sticker = (Face, usize);

fn side_index(side: Face) -> usize {
    match side {
        Face::Front => 0,
        Face::Right => 1,
        Face::Back => 2,
        Face::Left => 3,
        Face::Up | Face::Down => unreachable!("{side} is not a side face"),
    }
}

/// The up sticker of the edge between up and `side`
pub fn up_edge(side: Face) -> usize {
    [7, 5, 1, 3][side_index(side)]
}

/// The down sticker of the edge between down and `side`
pub fn down_edge(side: Face) -> usize {
    [1, 5, 7, 3][side_index(side)]
}

/// The corner slot on top of `x` and `x.right_of()`, up sticker first
pub fn top_corner(x: Face) -> [Sticker; 3] {
    let up = [8, 2, 0, 6][side_index(x)];
    [(Face::Up, up), (x, 2), (x.right_of(), 0)]
}

/// The corner slot below `x` and `x.right_of()`, down sticker first
pub fn bottom_corner(x: Face) -> [Sticker; 3] {
    let down = [2, 8, 6, 0][side_index(x)];
    [(Face::Down, down), (x, 8), (x.right_of(), 6)]
}

/// The middle layer edge slot between `x` and `x.right_of()`
pub fn middle_edge(x: Face) -> [Sticker; 2] {
    [(x, 5), (x.right_of(), 3)]
}
