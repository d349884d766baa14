use text_invaders::entities::{Player, Position, Size};
use text_invaders::player::*;

const WINDOW: Size = Size::new(80, 40);

fn make_player() -> Player {
    init_player(WINDOW, 3)
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_player_centred_at_bottom() {
    let p = make_player();
    assert_eq!(p.position, Position::new(38, 37));
    assert_eq!(p.sprite_size, Size::new(5, 2));
    assert_eq!(p.lives, 3);
    assert_eq!(p.score, 0);
    assert_eq!(p.missile, None);
}

#[test]
fn reset_player_keeps_lives_and_score() {
    let mut p = make_player();
    p.lives = 1;
    p.score = 250;
    p.position.x = 3;
    p.missile = Some(Position::new(3, 10));
    p.animation = 1;

    reset_player(WINDOW, &mut p);
    assert_eq!(p.position, Position::new(38, 37));
    assert_eq!(p.missile, None);
    assert_eq!(p.animation, 0);
    assert_eq!(p.lives, 1);
    assert_eq!(p.score, 250);
}

// ── move ──────────────────────────────────────────────────────────────────────

#[test]
fn move_normal() {
    let mut p = make_player();
    move_player(WINDOW, &mut p, -2);
    assert_eq!(p.position.x, 36);
    move_player(WINDOW, &mut p, 2);
    assert_eq!(p.position.x, 38);
}

#[test]
fn move_left_clamps_at_zero() {
    let mut p = make_player();
    p.position.x = 1;
    move_player(WINDOW, &mut p, -2);
    assert_eq!(p.position.x, 0);
}

#[test]
fn move_right_clamps_sprite_inside_window() {
    let mut p = make_player();
    p.position.x = 74;
    move_player(WINDOW, &mut p, 2);
    assert_eq!(p.position.x, 75);
}

#[test]
fn move_never_leaves_window() {
    for start in 0..=75 {
        for dx in -12..=12 {
            let mut p = make_player();
            p.position.x = start;
            move_player(WINDOW, &mut p, dx);
            assert!(p.position.x >= 0);
            assert!(p.position.x + p.sprite_size.width <= WINDOW.width);
        }
    }
}

#[test]
fn move_is_horizontal_only() {
    let mut p = make_player();
    move_player(WINDOW, &mut p, 4);
    assert_eq!(p.position.y, 37);
}

// ── shoot ─────────────────────────────────────────────────────────────────────

#[test]
fn shoot_spawns_centred_above_player() {
    let mut p = make_player();
    player_shoot(&mut p);
    assert_eq!(p.missile, Some(Position::new(40, 36)));
}

#[test]
fn shoot_while_missile_in_flight_is_noop() {
    let mut p = make_player();
    player_shoot(&mut p);
    advance_missile(&mut p);
    let in_flight = p.missile;
    move_player(WINDOW, &mut p, 10);
    player_shoot(&mut p);
    assert_eq!(p.missile, in_flight);
}

// ── missile ───────────────────────────────────────────────────────────────────

#[test]
fn missile_moves_up_each_tick() {
    let mut p = make_player();
    player_shoot(&mut p);
    advance_missile(&mut p);
    assert_eq!(p.missile, Some(Position::new(40, 35)));
}

#[test]
fn missile_expires_past_top() {
    let mut p = make_player();
    p.missile = Some(Position::new(10, 0));
    advance_missile(&mut p);
    assert_eq!(p.missile, None);
}

#[test]
fn advance_without_missile_is_noop() {
    let mut p = make_player();
    advance_missile(&mut p);
    assert_eq!(p.missile, None);
}
