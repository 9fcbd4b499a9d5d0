use cube_core::{Algorithm, Cube};

/// How the cube is held, relative to the way the solver looks at it.
///
/// The stored cube always names faces the way the human is holding the cube. The solver always
/// builds its current layer on `Up` and searches on `Down`. The first layer is built with the
/// cube held upside down compared to the finished solve: first layer color on top, working
/// layer underneath. Before the last layer the human turns the cube over, so the last layer is
/// on top and the solver's view becomes the held cube turned over.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Orientation {
    /// Last layer on top. The solver's view is the held cube turned over.
    Standard,
    /// First layer on top. The solver's view is the held cube as it is.
    Inverted,
}

impl Orientation {
    #[must_use]
    pub fn flipped(self) -> Orientation {
        match self {
            Orientation::Standard => Orientation::Inverted,
            Orientation::Inverted => Orientation::Standard,
        }
    }

    /// The cube as the solver sees it
    #[must_use]
    pub fn view(self, stored: &Cube) -> Cube {
        match self {
            Orientation::Standard => stored.rotated_z2(),
            Orientation::Inverted => stored.clone(),
        }
    }

    /// Name a move sequence found in the view by the faces of the stored cube. The relabelling
    /// is its own inverse, so this also goes the other way.
    #[must_use]
    pub fn relabel(self, alg: &Algorithm) -> Algorithm {
        match self {
            Orientation::Standard => alg.rotated_z2(),
            Orientation::Inverted => alg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use cube_core::ColorScheme;

    use super::*;

    #[test]
    fn views_commute_with_moves() {
        let mut stored = Cube::solved(&ColorScheme::default());
        stored.apply_str("R U F' L2 D B").unwrap();

        let alg: Algorithm = "F R U R' U' F'".parse().unwrap();
        for orientation in [Orientation::Standard, Orientation::Inverted] {
            let viewed_then_moved = orientation.view(&stored).after(&alg);
            let moved_then_viewed = orientation.view(&stored.after(&orientation.relabel(&alg)));
            assert_eq!(viewed_then_moved, moved_then_viewed);
        }
    }
}
