use text_invaders::entities::{Position, Size};
use text_invaders::ufo::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

const WINDOW: Size = Size::new(80, 40);

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn new_ufo_is_idle_with_valid_points() {
    let mut rng = seeded_rng();
    for _ in 0..50 {
        let ufo = init_ufo(&mut rng);
        assert_eq!(ufo.position, None);
        assert!([50, 100, 150, 200].contains(&ufo.points));
    }
}

#[test]
fn launch_timing() {
    assert!(should_launch(13, 500, 13));
    assert!(should_launch(513, 500, 13));
    assert!(!should_launch(512, 500, 13));
    assert!(!should_launch(13, 0, 13));
}

#[test]
fn launch_enters_from_the_left() {
    let mut ufo = init_ufo(&mut seeded_rng());
    launch_ufo(&mut ufo);
    assert_eq!(ufo.position, Some(Position::new(0, 2)));
}

#[test]
fn advance_moves_right() {
    let mut rng = seeded_rng();
    let mut ufo = init_ufo(&mut rng);
    launch_ufo(&mut ufo);
    advance_ufo(WINDOW, &mut ufo, &mut rng);
    advance_ufo(WINDOW, &mut ufo, &mut rng);
    assert_eq!(ufo.position, Some(Position::new(2, 2)));
}

#[test]
fn leaves_play_past_the_right_edge() {
    let mut rng = seeded_rng();
    let mut ufo = init_ufo(&mut rng);
    ufo.position = Some(Position::new(78, 2));
    advance_ufo(WINDOW, &mut ufo, &mut rng);
    assert_eq!(ufo.position, Some(Position::new(79, 2)));
    advance_ufo(WINDOW, &mut ufo, &mut rng);
    assert_eq!(ufo.position, None);
    assert!([50, 100, 150, 200].contains(&ufo.points));
}

#[test]
fn idle_ufo_does_not_move() {
    let mut rng = seeded_rng();
    let mut ufo = init_ufo(&mut rng);
    advance_ufo(WINDOW, &mut ufo, &mut rng);
    assert_eq!(ufo.position, None);
}

#[test]
fn missile_hits_only_an_active_ufo() {
    let mut ufo = init_ufo(&mut seeded_rng());
    let missile = Some(Position::new(3, 3));
    assert!(!missile_hits_ufo(missile, &ufo));

    ufo.position = Some(Position::new(0, 2));
    assert!(missile_hits_ufo(missile, &ufo));
    assert!(!missile_hits_ufo(Some(Position::new(6, 2)), &ufo));
    assert!(!missile_hits_ufo(None, &ufo));
}
