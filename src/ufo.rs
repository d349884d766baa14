//! The bonus flyer that crosses the top of the screen.

use rand::Rng;

use crate::constants::{ALIEN_UFO_SPRITE_HEIGHT, ALIEN_UFO_SPRITE_WIDTH, UFO_POINT_STEP};
use crate::entities::{AlienUfo, Position, Size};
use crate::geometry::rect_overlap;

pub fn init_ufo(rng: &mut impl Rng) -> AlienUfo {
    let mut ufo = AlienUfo {
        position: None,
        size: Size::new(ALIEN_UFO_SPRITE_WIDTH, ALIEN_UFO_SPRITE_HEIGHT),
        points: 0,
    };
    reset_ufo(&mut ufo, rng);
    ufo
}

/// Take the UFO out of play and roll a new point value (50, 100, 150 or 200).
pub fn reset_ufo(ufo: &mut AlienUfo, rng: &mut impl Rng) {
    ufo.points = rng.gen_range(1..=4) * UFO_POINT_STEP;
    ufo.position = None;
}

/// True on the ticks where an idle UFO should take off.
pub fn should_launch(game_timer: u64, period: u64, offset: u64) -> bool {
    period > 0 && game_timer % period == offset
}

/// Enter from the left edge, one sprite-height below the top.
pub fn launch_ufo(ufo: &mut AlienUfo) {
    ufo.position = Some(Position::new(0, ufo.size.height));
}

/// Move one cell right; leave play once fully past the right edge.
pub fn advance_ufo(window: Size, ufo: &mut AlienUfo, rng: &mut impl Rng) {
    let Some(pos) = ufo.position.as_mut() else {
        return;
    };
    pos.x += 1;
    if pos.x >= window.width {
        reset_ufo(ufo, rng);
    }
}

pub fn missile_hits_ufo(missile: Option<Position>, ufo: &AlienUfo) -> bool {
    match (missile, ufo.position) {
        (Some(m), Some(pos)) => rect_overlap(m, pos, ufo.size),
        _ => false,
    }
}
