//! Destructible barriers.
//!
//! A shield is a small character bitmap. Any non-blank glyph is intact
//! material; erasing writes [`SHIELD_EMPTY`]. Nothing ever writes material
//! back, so damage is monotonic for the life of a round.

use crate::constants::{
    PLAYER_SPRITE_HEIGHT, SHIELD_EMPTY, SHIELD_SPRITE, SHIELD_SPRITE_HEIGHT, SHIELD_SPRITE_WIDTH,
};
use crate::entities::{Position, Shield, ShieldSprite, Size};
use crate::geometry::{rect_overlap, rects_intersect};

pub const SHIELD_SIZE: Size = Size::new(SHIELD_SPRITE_WIDTH as i32, SHIELD_SPRITE_HEIGHT as i32);

// ── Constructors ─────────────────────────────────────────────────────────────

fn fresh_sprite() -> ShieldSprite {
    let mut sprite = [[SHIELD_EMPTY; SHIELD_SPRITE_WIDTH]; SHIELD_SPRITE_HEIGHT];
    for (row, line) in sprite.iter_mut().zip(SHIELD_SPRITE.iter()) {
        for (cell, glyph) in row.iter_mut().zip(line.chars()) {
            *cell = glyph;
        }
    }
    sprite
}

/// Lay out `count` undamaged shields evenly across the window, just above
/// the player's row.
pub fn init_shields(window: Size, count: usize) -> Vec<Shield> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as i32;
    let spare = window.width - n * SHIELD_SIZE.width;
    let gap = spare.div_euclid(n + 1);
    let first_gap = if spare.rem_euclid(n + 1) == 0 { gap } else { gap + 1 };
    let y = window.height - PLAYER_SPRITE_HEIGHT - 1 - SHIELD_SIZE.height - 2;

    (0..n)
        .map(|i| Shield {
            position: Position::new(first_gap + i * (SHIELD_SIZE.width + gap), y),
            sprite: fresh_sprite(),
        })
        .collect()
}

// ── Queries ──────────────────────────────────────────────────────────────────

/// The glyph at a shield-local coordinate, or `None` outside the bitmap.
pub fn cell_at(shield: &Shield, local: Position) -> Option<char> {
    if local.x < 0 || local.y < 0 {
        return None;
    }
    shield
        .sprite
        .get(local.y as usize)
        .and_then(|row| row.get(local.x as usize))
        .copied()
}

pub fn is_intact(shield: &Shield, local: Position) -> bool {
    cell_at(shield, local).is_some_and(|c| c != SHIELD_EMPTY)
}

/// Count of intact cells.
pub fn intact_cells(shield: &Shield) -> usize {
    shield
        .sprite
        .iter()
        .flatten()
        .filter(|&&c| c != SHIELD_EMPTY)
        .count()
}

/// First shield (by index) whose intact material contains `projectile`,
/// along with the shield-local hit point. Inactive projectiles never hit.
pub fn point_hits_shield(
    projectile: Option<Position>,
    shields: &[Shield],
) -> Option<(usize, Position)> {
    let p = projectile?;
    shields.iter().enumerate().find_map(|(i, shield)| {
        if !rect_overlap(p, shield.position, SHIELD_SIZE) {
            return None;
        }
        let local = Position::new(p.x - shield.position.x, p.y - shield.position.y);
        is_intact(shield, local).then_some((i, local))
    })
}

// ── Damage ───────────────────────────────────────────────────────────────────

/// Blank one cell. Out-of-range or already-empty cells are left alone.
pub fn erase_point(shield: &mut Shield, local: Position) {
    if local.x < 0 || local.y < 0 {
        return;
    }
    if let Some(cell) = shield
        .sprite
        .get_mut(local.y as usize)
        .and_then(|row| row.get_mut(local.x as usize))
    {
        *cell = SHIELD_EMPTY;
    }
}

/// Crushing damage: blank every shield cell covered by the rectangle.
pub fn erase_rect(shields: &mut [Shield], origin: Position, size: Size) {
    for shield in shields.iter_mut() {
        if !rects_intersect(origin, size, shield.position, SHIELD_SIZE) {
            continue;
        }
        let x0 = (origin.x - shield.position.x).max(0);
        let y0 = (origin.y - shield.position.y).max(0);
        let x1 = (origin.x + size.width - shield.position.x).min(SHIELD_SIZE.width);
        let y1 = (origin.y + size.height - shield.position.y).min(SHIELD_SIZE.height);
        for y in y0..y1 {
            for x in x0..x1 {
                erase_point(shield, Position::new(x, y));
            }
        }
    }
}
