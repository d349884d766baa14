//! The alien swarm: formation movement, explosions, and bombs.
//!
//! The formation steps one cell sideways whenever its movement countdown
//! runs out. When the next step would carry the occupied columns past a
//! screen edge it drops one row instead and reverses. Each drop spends one
//! of the remaining `lines`; spending the last one means the swarm has
//! reached the player. The countdown shrinks with both `lines` and the
//! number of survivors, which is what makes the swarm speed up.
//!
//! Explosions share one timer. Every cell hit while the timer is running
//! clears on the same tick.

use rand::Rng;
use tracing::debug;

use crate::constants::{
    ALIENS_X_PADDING, ALIENS_Y_PADDING, ALIEN_BOMB_SPEED, ALIEN_BOMB_SPRITE,
    ALIEN_EXPLOSION_TIME, ALIEN_ROW_POINTS, ALIEN_SPRITE_HEIGHT, ALIEN_SPRITE_WIDTH,
    ALIEN_START_LINES, BOMB_FIDUCIAL, BOMB_ODDS_BASE, MAX_NUMBER_OF_ALIEN_BOMBS,
    NUM_ALIENS, NUM_ALIEN_COLUMNS, NUM_ALIEN_ROWS,
};
use crate::entities::{
    AlienSwarm, Bomb, Cell, CellState, Player, Position, Shield, Size, SwarmEvent,
};
use crate::geometry::rect_overlap;
use crate::shield::{erase_point, erase_rect, point_hits_shield};

/// Height of the whole formation in rows, padding included.
pub const FORMATION_HEIGHT: i32 =
    NUM_ALIEN_ROWS as i32 * ALIEN_SPRITE_HEIGHT + ALIENS_Y_PADDING * (NUM_ALIEN_ROWS as i32 - 1);

// ── Constructors ─────────────────────────────────────────────────────────────

/// A full swarm for `level`. Higher levels start lower and have fewer lines
/// left to descend.
pub fn init_aliens(window: Size, level: u32) -> AlienSwarm {
    let level = level.max(1) as i32;
    let stride = ALIEN_SPRITE_WIDTH + ALIENS_X_PADDING;
    let lines = (ALIEN_START_LINES - (level - 1)).max(1);

    let mut swarm = AlienSwarm {
        cells: [[CellState::Alive; NUM_ALIEN_COLUMNS]; NUM_ALIEN_ROWS],
        position: Position::new(
            (window.width - NUM_ALIEN_COLUMNS as i32 * stride) / 2,
            window.height - ALIEN_START_LINES - FORMATION_HEIGHT - 3 + level,
        ),
        direction: 1,
        movement_time: 0,
        animation: 0,
        alive: NUM_ALIENS,
        lines,
        sprite_size: Size::new(ALIEN_SPRITE_WIDTH, ALIEN_SPRITE_HEIGHT),
        explosion_timer: None,
        bombs: [Bomb::default(); MAX_NUMBER_OF_ALIEN_BOMBS],
    };
    reset_movement_time(&mut swarm);
    swarm
}

// ── Layout helpers ───────────────────────────────────────────────────────────

/// Screen position of one alien's top-left corner.
pub fn alien_position(swarm: &AlienSwarm, cell: Cell) -> Position {
    Position::new(
        swarm.position.x + cell.col as i32 * (swarm.sprite_size.width + ALIENS_X_PADDING),
        swarm.position.y + cell.row as i32 * (swarm.sprite_size.height + ALIENS_Y_PADDING),
    )
}

pub fn cell_state(swarm: &AlienSwarm, cell: Cell) -> Option<CellState> {
    swarm.cells.get(cell.row).and_then(|r| r.get(cell.col)).copied()
}

fn cells() -> impl Iterator<Item = Cell> {
    (0..NUM_ALIEN_ROWS).flat_map(|row| (0..NUM_ALIEN_COLUMNS).map(move |col| Cell { row, col }))
}

/// Points for a kill in `row`; rows past the table score like the last one.
pub fn points_for_row(row: usize) -> u32 {
    ALIEN_ROW_POINTS
        .get(row)
        .or(ALIEN_ROW_POINTS.last())
        .copied()
        .unwrap_or(0)
}

fn column_is_dead(swarm: &AlienSwarm, col: usize) -> bool {
    swarm.cells.iter().all(|row| row[col] == CellState::Dead)
}

/// Number of fully dead columns on the left and right of the formation.
pub fn empty_columns(swarm: &AlienSwarm) -> (usize, usize) {
    let left = (0..NUM_ALIEN_COLUMNS)
        .take_while(|&col| column_is_dead(swarm, col))
        .count();
    if left == NUM_ALIEN_COLUMNS {
        return (left, 0);
    }
    let right = (0..NUM_ALIEN_COLUMNS)
        .rev()
        .take_while(|&col| column_is_dead(swarm, col))
        .count();
    (left, right)
}

/// Horizontal extent `[left, right)` of the occupied columns, or `None`
/// once every column is dead.
pub fn footprint(swarm: &AlienSwarm) -> Option<(i32, i32)> {
    let (empty_left, empty_right) = empty_columns(swarm);
    let columns = NUM_ALIEN_COLUMNS.checked_sub(empty_left + empty_right)? as i32;
    if columns == 0 {
        return None;
    }
    let left = swarm.position.x + empty_left as i32 * (swarm.sprite_size.width + ALIENS_X_PADDING);
    let right = left + columns * swarm.sprite_size.width + (columns - 1) * ALIENS_X_PADDING;
    Some((left, right))
}

/// Columns that still hold at least one living alien, left to right.
pub fn active_columns(swarm: &AlienSwarm) -> Vec<usize> {
    (0..NUM_ALIEN_COLUMNS)
        .filter(|&col| swarm.cells.iter().any(|row| row[col] == CellState::Alive))
        .collect()
}

pub fn bombs_in_play(swarm: &AlienSwarm) -> usize {
    swarm.bombs.iter().filter(|b| b.position.is_some()).count()
}

// ── Movement timing ──────────────────────────────────────────────────────────

/// Ticks between formation steps for the given state of the swarm.
pub fn movement_delay(lines: i32, alive: usize) -> i32 {
    lines * 2 + (5 * alive / NUM_ALIENS) as i32
}

pub fn reset_movement_time(swarm: &mut AlienSwarm) {
    swarm.movement_time = movement_delay(swarm.lines, swarm.alive);
}

// ── Missile hits ─────────────────────────────────────────────────────────────

/// The first living alien whose sprite contains the missile.
pub fn missile_hits_alien(missile: Option<Position>, swarm: &AlienSwarm) -> Option<Cell> {
    let missile = missile?;
    cells().find(|&cell| {
        cell_state(swarm, cell) == Some(CellState::Alive)
            && rect_overlap(missile, alien_position(swarm, cell), swarm.sprite_size)
    })
}

/// Start the alien at `cell` exploding and return the points it is worth.
/// Cells that are not alive score nothing and are left untouched.
pub fn resolve_alien_hit(swarm: &mut AlienSwarm, cell: Cell) -> u32 {
    let Some(state) = swarm
        .cells
        .get_mut(cell.row)
        .and_then(|r| r.get_mut(cell.col))
    else {
        return 0;
    };
    if *state != CellState::Alive {
        return 0;
    }
    *state = CellState::Exploding;
    swarm.alive = swarm.alive.saturating_sub(1);
    if swarm.explosion_timer.is_none() {
        swarm.explosion_timer = Some(ALIEN_EXPLOSION_TIME);
    }
    points_for_row(cell.row)
}

/// Count the shared explosion timer down; when it lapses every exploding
/// cell becomes dead at once.
pub fn tick_explosions(swarm: &mut AlienSwarm) {
    swarm.explosion_timer = match swarm.explosion_timer {
        Some(t) if t > 0 => Some(t - 1),
        _ => None,
    };
    if swarm.explosion_timer.is_none() {
        for state in swarm.cells.iter_mut().flatten() {
            if *state == CellState::Exploding {
                *state = CellState::Dead;
            }
        }
    }
}

// ── Shields ──────────────────────────────────────────────────────────────────

/// Erase shield material under every living alien.
pub fn crush_shields(swarm: &AlienSwarm, shields: &mut [Shield]) {
    for cell in cells() {
        if cell_state(swarm, cell) == Some(CellState::Alive) {
            erase_rect(shields, alien_position(swarm, cell), swarm.sprite_size);
        }
    }
}

// ── Bombs ────────────────────────────────────────────────────────────────────

/// One draw against odds that improve as the swarm thins out.
pub fn should_shoot_bomb(swarm: &AlienSwarm, rng: &mut impl Rng) -> bool {
    let modulus = BOMB_ODDS_BASE - (NUM_ALIENS / (swarm.alive + 1)) as u32;
    rng.gen_range(0..modulus) == BOMB_FIDUCIAL
}

/// Drop a bomb from the lowest living alien in `col`. Returns false when
/// the pool is full or the column is empty.
pub fn shoot_bomb(swarm: &mut AlienSwarm, col: usize) -> bool {
    let Some(slot) = swarm.bombs.iter().position(|b| b.position.is_none()) else {
        return false;
    };
    let Some(row) = (0..NUM_ALIEN_ROWS)
        .rev()
        .find(|&row| cell_state(swarm, Cell { row, col }) == Some(CellState::Alive))
    else {
        return false;
    };
    let alien = alien_position(swarm, Cell { row, col });
    swarm.bombs[slot] = Bomb {
        position: Some(Position::new(
            alien.x + swarm.sprite_size.width / 2,
            alien.y + swarm.sprite_size.height,
        )),
        animation: 0,
    };
    true
}

/// Maybe launch a volley of up to three bombs in total.
pub fn fire_bombs(swarm: &mut AlienSwarm, rng: &mut impl Rng) {
    if !should_shoot_bomb(swarm, rng) {
        return;
    }
    let columns = active_columns(swarm);
    if columns.is_empty() {
        return;
    }
    let volley = rng.gen_range(1..=MAX_NUMBER_OF_ALIEN_BOMBS);
    let shots = volley.saturating_sub(bombs_in_play(swarm));
    for _ in 0..shots {
        let col = columns[rng.gen_range(0..columns.len())];
        shoot_bomb(swarm, col);
    }
}

/// Move every live bomb down and resolve it against shields, the player,
/// and the bottom of the screen, in that order. Returns true if any bomb
/// struck the player; every bomb is still processed so the pool stays
/// consistent, but a tick never reports more than one hit.
pub fn update_bombs(
    window: Size,
    swarm: &mut AlienSwarm,
    player: &Player,
    shields: &mut [Shield],
) -> bool {
    let mut player_hit = false;

    for bomb in swarm.bombs.iter_mut() {
        let Some(mut pos) = bomb.position else {
            continue;
        };
        pos.y += ALIEN_BOMB_SPEED;
        bomb.animation = (bomb.animation + 1) % ALIEN_BOMB_SPRITE.len();

        if let Some((index, local)) = point_hits_shield(Some(pos), shields) {
            erase_point(&mut shields[index], local);
            *bomb = Bomb::default();
        } else if rect_overlap(pos, player.position, player.sprite_size) {
            *bomb = Bomb::default();
            player_hit = true;
        } else if pos.y >= window.height {
            *bomb = Bomb::default();
        } else {
            bomb.position = Some(pos);
        }
    }

    player_hit
}

// ── Per-tick ─────────────────────────────────────────────────────────────────

fn at_edge(window: Size, swarm: &AlienSwarm) -> bool {
    match footprint(swarm) {
        Some((left, right)) => {
            (right >= window.width && swarm.direction > 0) || (left <= 0 && swarm.direction < 0)
        }
        None => false,
    }
}

/// Advance the swarm by one tick: bombs, explosions, then formation
/// movement. Bombs are only launched on ticks where the formation holds
/// still horizontally.
pub fn update_aliens(
    window: Size,
    swarm: &mut AlienSwarm,
    player: &Player,
    shields: &mut [Shield],
    rng: &mut impl Rng,
) -> SwarmEvent {
    if update_bombs(window, swarm, player, shields) {
        return SwarmEvent::PlayerHit;
    }

    tick_explosions(swarm);

    swarm.movement_time -= 1;
    let mut move_horizontal = swarm.movement_time <= 0;

    if move_horizontal && swarm.lines > 0 && at_edge(window, swarm) {
        move_horizontal = false;
        swarm.position.y += 1;
        swarm.lines -= 1;
        swarm.direction = -swarm.direction;
        reset_movement_time(swarm);
        crush_shields(swarm, shields);
        debug!(lines = swarm.lines, y = swarm.position.y, "swarm descended");

        if swarm.lines == 0 {
            return SwarmEvent::ReachedBottom;
        }
    }

    if move_horizontal {
        swarm.position.x += swarm.direction;
        reset_movement_time(swarm);
        swarm.animation ^= 1;
        crush_shields(swarm, shields);
    } else {
        fire_bombs(swarm, rng);
    }

    SwarmEvent::Nothing
}
