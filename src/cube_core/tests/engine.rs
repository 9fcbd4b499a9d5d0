use cube_core::{Algorithm, Color, ColorScheme, Cube, Face, Move, MoveParseError, Turn};
use pretty_assertions::assert_eq;

const SCRAMBLES: [&str; 3] = [
    "R U F' L2 D B R' U2 F D' L B2",
    "F R U R' U' F' L2 D2 B U' R2 F'",
    "D L2 F' U R B2 D' L U2 F R' B",
];

fn every_move() -> impl Iterator<Item = Move> {
    Face::ALL.into_iter().flat_map(|face| {
        [Turn::Clockwise, Turn::Double, Turn::CounterClockwise]
            .map(|turn| Move::new(face, turn))
    })
}

fn scrambled(moves: &str) -> Cube {
    let mut cube = Cube::solved(&ColorScheme::default());
    cube.apply_str(moves).unwrap();
    cube
}

#[test_log::test]
fn colors_are_conserved() {
    for scramble in SCRAMBLES {
        let mut cube = Cube::solved(&ColorScheme::default());

        for mv in scramble.parse::<Algorithm>().unwrap().moves() {
            cube.apply_move(*mv);
            assert_eq!(cube.check_invariants(), Ok(()), "after {mv} in {scramble}");
            assert!(cube.color_counts().iter().all(|&(_, count)| count == 9));
        }
    }
}

#[test_log::test]
fn centers_never_move() {
    let solved = Cube::solved(&ColorScheme::default());
    for mv in every_move() {
        let turned = solved.after(&mv.into());
        for face in Face::ALL {
            assert_eq!(turned.center(face), solved.center(face));
        }
    }
}

#[test_log::test]
fn moves_undo_and_compose() {
    for scramble in SCRAMBLES {
        let cube = scrambled(scramble);

        for face in Face::ALL {
            let quarter = Algorithm::from(Move::new(face, Turn::Clockwise));
            let prime = Algorithm::from(Move::new(face, Turn::CounterClockwise));
            let double = Algorithm::from(Move::new(face, Turn::Double));

            assert_eq!(cube.after(&prime).after(&quarter), cube);
            assert_eq!(cube.after(&quarter).after(&quarter), cube.after(&double));
            assert_eq!(cube.after(&double).after(&double), cube);
            assert_ne!(cube.after(&quarter), cube);
        }

        let undo = scramble.parse::<Algorithm>().unwrap().inverse();
        assert!(cube.after(&undo).is_solved());
    }
}

#[test_log::test]
fn four_quarter_turns_are_nothing() {
    let cube = scrambled(SCRAMBLES[0]);

    for face in Face::ALL {
        let mut turned = cube.clone();
        for _ in 0..4 {
            turned.apply_move(Move::new(face, Turn::Clockwise));
        }
        assert_eq!(turned, cube);
    }
}

#[test_log::test]
fn turning_over_commutes_with_moves() {
    let cube = scrambled(SCRAMBLES[1]);

    for mv in every_move() {
        let alg = Algorithm::from(mv);
        assert_eq!(
            cube.after(&alg).rotated_z2(),
            cube.rotated_z2().after(&alg.rotated_z2()),
            "{mv}"
        );
    }
}

#[test_log::test]
fn turns_follow_the_net() {
    let solved = Cube::solved(&ColorScheme::default());

    // Front's top row moves onto left when up turns
    let up = solved.after(&"U".parse().unwrap());
    assert_eq!(up.face(Face::Left)[..3], [Color::Green; 3]);
    assert_eq!(up.face(Face::Front)[..3], [Color::Red; 3]);

    // and onto right when down turns
    let down = solved.after(&"D".parse().unwrap());
    assert_eq!(down.face(Face::Right)[6..], [Color::Green; 3]);
    assert_eq!(down.face(Face::Front)[6..], [Color::Orange; 3]);

    // Up's front row moves onto right's left column when front turns
    let front = solved.after(&"F".parse().unwrap());
    for i in [0, 3, 6] {
        assert_eq!(front.sticker(Face::Right, i), Color::White);
        assert_eq!(front.sticker(Face::Left, i + 2), Color::Yellow);
    }
    assert_eq!(front.face(Face::Up)[6..], [Color::Orange; 3]);
}

#[test_log::test]
fn bad_tokens_leave_the_cube_alone() {
    let mut cube = scrambled(SCRAMBLES[2]);
    let before = cube.clone();

    assert_eq!(
        cube.apply_str("R U X2"),
        Err(MoveParseError::UnknownFace("X2".to_owned()))
    );
    assert_eq!(
        cube.apply_str("R4"),
        Err(MoveParseError::UnknownTurn("R4".to_owned()))
    );
    assert_eq!(cube, before);

    assert_eq!(cube.apply_str(""), Ok(()));
    assert_eq!(cube, before);
}
