//! The player's cannon and its single missile.

use crate::constants::{PLAYER_MISSILE_SPEED, PLAYER_SPRITE_HEIGHT, PLAYER_SPRITE_WIDTH};
use crate::entities::{Player, Position, Size};

// ── Constructors ─────────────────────────────────────────────────────────────

/// A fresh player with full lives and no score, centred at the bottom.
pub fn init_player(window: Size, lives: u32) -> Player {
    let mut player = Player {
        position: Position::default(),
        sprite_size: Size::new(PLAYER_SPRITE_WIDTH, PLAYER_SPRITE_HEIGHT),
        lives,
        score: 0,
        missile: None,
        animation: 0,
    };
    reset_player(window, &mut player);
    player
}

/// Recentre the player and clear its missile; lives and score survive.
pub fn reset_player(window: Size, player: &mut Player) {
    player.position = Position::new(
        window.width / 2 - player.sprite_size.width / 2,
        window.height - player.sprite_size.height - 1,
    );
    player.animation = 0;
    player.missile = None;
}

// ── Input-driven actions ─────────────────────────────────────────────────────

/// Shift horizontally, keeping the whole sprite inside `[0, window.width]`.
pub fn move_player(window: Size, player: &mut Player, dx: i32) {
    let max_x = (window.width - player.sprite_size.width).max(0);
    player.position.x = (player.position.x + dx).clamp(0, max_x);
}

/// Fire from the centre of the cannon, one row above it. No-op while a
/// missile is already in flight.
pub fn player_shoot(player: &mut Player) {
    if player.missile.is_some() {
        return;
    }
    player.missile = Some(Position::new(
        player.position.x + player.sprite_size.width / 2,
        player.position.y - 1,
    ));
}

// ── Per-tick ─────────────────────────────────────────────────────────────────

pub fn advance_missile(player: &mut Player) {
    if let Some(missile) = player.missile.as_mut() {
        missile.y -= PLAYER_MISSILE_SPEED;
        if missile.y < 0 {
            player.missile = None;
        }
    }
}
