mod common;

use beginner_solver::{
    Blocked, Outcome, PhaseSolver, StepKind,
    phases::{Cross, Daisy, FirstLayerCorners},
};
use common::{after, alg, before, expect_step, solved};
use cube_core::{Color, Cube, Face};

fn run(solver: &mut impl PhaseSolver, cube: &mut Cube, limit: usize) -> usize {
    for steps in 0..=limit {
        match solver.next_step(cube) {
            Outcome::Done => return steps,
            Outcome::Step(step) => cube.apply(&step.moves),
            Outcome::Blocked(blocked) => panic!("blocked: {blocked}"),
        }
    }
    panic!("not done after {limit} steps");
}

#[test_log::test]
fn daisy_flips_target_edges_down() {
    let cube = after("F2");
    expect_step(Daisy.next_step(&cube), StepKind::Turn, "R2");

    let daisy = after("F2 R2 B2 L2");
    assert!(Daisy.is_complete(&daisy));
    assert_eq!(Daisy.next_step(&daisy), Outcome::Done);
}

#[test_log::test]
fn daisy_drops_middle_layer_edges() {
    // A petal's white shows on the front face of the middle layer
    let cube = after("F2 R2 B2 L2 F");
    expect_step(Daisy.next_step(&cube), StepKind::Turn, "F'");

    // The petal spot under it is taken, so look for a free one
    let cube = after("F2 R2 B2 L2 F D");
    expect_step(Daisy.next_step(&cube), StepKind::Search, "D");
}

#[test_log::test]
fn daisy_lifts_sideways_edges() {
    let working = after("F2 R2 B2 L2 F D' L");
    assert_eq!(working.sticker(Face::Left, 7), Color::White);
    expect_step(Daisy.next_step(&working), StepKind::Turn, "L");

    let target = after("F2 R2 B2 L2 F D' L'");
    assert_eq!(target.sticker(Face::Left, 1), Color::White);
    expect_step(Daisy.next_step(&target), StepKind::Turn, "L");

    // Lifting this one would knock a petal off
    let blocked = after("F2 R2 B2 L2 F R F'");
    expect_step(Daisy.next_step(&blocked), StepKind::Search, "D");
}

#[test_log::test]
fn daisy_then_cross_from_a_scramble() {
    let mut cube = after("R U F' L2 D B R' U2 F D' L B2");

    run(&mut Daisy, &mut cube, 64);
    for i in [1, 3, 5, 7] {
        assert_eq!(cube.sticker(Face::Down, i), Color::White);
    }

    run(&mut Cross::default(), &mut cube, 64);
    for i in [1, 3, 5, 7] {
        assert_eq!(cube.sticker(Face::Up, i), Color::White);
    }
    for side in Face::SIDES {
        assert_eq!(cube.sticker(side, 1), cube.center(side));
    }
}

#[test_log::test]
fn cross_plants_an_aligned_petal() {
    let mut cube = after("F2");
    assert_eq!(cube.sticker(Face::Down, 1), Color::White);
    assert_eq!(cube.sticker(Face::Front, 7), cube.center(Face::Front));

    let step = expect_step(Cross::default().next_step(&cube), StepKind::Turn, "F2");
    cube.apply(&step.moves);

    assert_eq!(cube.sticker(Face::Up, 7), Color::White);
    assert_eq!(cube.sticker(Face::Front, 1), cube.center(Face::Front));
    assert!(Cross::default().is_complete(&cube));
}

#[test_log::test]
fn cross_searches_then_forces_progress() {
    let cube = after("F2 D");
    let mut cross = Cross::default();

    expect_step(cross.next_step(&cube), StepKind::Search, "D");
    // Nobody turned the cube
    expect_step(cross.next_step(&cube), StepKind::ForcedAdvance, "D2");
    expect_step(cross.next_step(&cube), StepKind::ForcedAdvance, "D'");
    expect_step(cross.next_step(&cube), StepKind::ForcedAdvance, "D");

    // A new position starts the search over
    let turned = after("F2 D2");
    expect_step(cross.next_step(&turned), StepKind::Search, "D");
}

#[test_log::test]
fn cross_reports_buried_edges() {
    let cube = after("F");
    assert_eq!(
        Cross::default().next_step(&cube),
        Outcome::Blocked(Blocked::CheckMiddleLayer)
    );
    assert_eq!(
        Cross::default().next_step(&cube).to_string(),
        "Check Middle Layer"
    );
}

#[test_log::test]
fn cross_reports_sideways_edges() {
    let cube = after("F R'");
    assert_eq!(
        Cross::default().next_step(&cube),
        Outcome::Blocked(Blocked::CheckMiddleLayer)
    );
}

#[test_log::test]
fn triggers_point_the_right_way() {
    let left = after("F D' F'");
    assert_eq!(left.sticker(Face::Front, 8), Color::White);
    assert_eq!(left.sticker(Face::Right, 6), left.center(Face::Right));
    let step = expect_step(
        FirstLayerCorners.next_step(&left),
        StepKind::LeftTrigger,
        "F D F'",
    );
    assert_eq!(step.to_string(), "Left Trigger");
    assert!(left.after(&step.moves).is_solved());

    let right = after("R' D R");
    assert_eq!(right.sticker(Face::Right, 6), Color::White);
    assert_eq!(right.sticker(Face::Front, 8), right.center(Face::Front));
    let step = expect_step(
        FirstLayerCorners.next_step(&right),
        StepKind::RightTrigger,
        "R' D' R",
    );
    assert_eq!(step.to_string(), "Right Trigger");
    assert!(right.after(&step.moves).is_solved());

    expect_step(
        FirstLayerCorners.next_step(&after("L D' L'")),
        StepKind::LeftTrigger,
        "L D L'",
    );
    expect_step(
        FirstLayerCorners.next_step(&after("F' D F")),
        StepKind::RightTrigger,
        "F' D' F",
    );
}

#[test_log::test]
fn white_on_top_corner() {
    let white_on_top = "R' D2 R D R' D' R";
    let cube = before(white_on_top);
    assert_eq!(cube.sticker(Face::Down, 2), Color::White);

    let step = expect_step(
        FirstLayerCorners.next_step(&cube),
        StepKind::WhiteOnTop,
        white_on_top,
    );
    assert_eq!(step.to_string(), "WhiteOnTop");
    assert!(cube.after(&step.moves).is_solved());
}

#[test_log::test]
fn white_on_top_under_a_solved_slot_searches() {
    let mut cube = before("R' D2 R D R' D' R");
    cube.apply(&alg("D"));
    assert_eq!(cube.sticker(Face::Down, 8), Color::White);

    expect_step(FirstLayerCorners.next_step(&cube), StepKind::Search, "D");
}

#[test_log::test]
fn unrecognized_corner_searches() {
    let mut cube = solved();
    cube.set(Face::Up, 8, Color::Yellow);
    assert!(!FirstLayerCorners.is_complete(&cube));

    expect_step(FirstLayerCorners.next_step(&cube), StepKind::Search, "D");
}

#[test_log::test]
fn stuck_corner_is_pushed_out() {
    let mut cube = after("R' D' R D R' D' R");
    assert!(!FirstLayerCorners.is_complete(&cube));

    let step = expect_step(
        FirstLayerCorners.next_step(&cube),
        StepKind::StuckBottom,
        "R' D' R",
    );
    assert_eq!(step.to_string(), "StuckBottom");

    assert_eq!(run(&mut FirstLayerCorners, &mut cube, 16), 3);
    assert!(FirstLayerCorners.is_complete(&cube));
}

#[test_log::test]
fn completion_is_a_pure_read() {
    let cube = solved();
    let mut cross = Cross::default();

    for _ in 0..3 {
        assert!(cross.is_complete(&cube));
        assert!(cross.detect(&cube).complete);
        assert!(FirstLayerCorners.detect(&cube).outcome.is_done());
    }
}
