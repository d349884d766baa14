//! Scene composition: turns a read-only view of the world into canvas
//! calls. No game logic happens here.

use std::io;

use crate::aliens::{alien_position, cell_state, points_for_row};
use crate::canvas::{Canvas, Tint};
use crate::constants::{
    ALIEN10_SPRITE, ALIEN20_SPRITE, ALIEN30_SPRITE, ALIEN_BOMB_SPRITE, ALIEN_EXPLOSION_SPRITE,
    ALIEN_UFO_SPRITE, MAX_NUMBER_OF_CHARACTERS_IN_NAME, NUM_ALIEN_COLUMNS, NUM_ALIEN_ROWS,
    PLAYER_EXPLOSION_SPRITE, PLAYER_MISSILE_SPRITE, PLAYER_SPRITE,
};
use crate::entities::{Cell, CellState, Game, GameState, GameWorld, HighScoreTable, Player};

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render(canvas: &mut impl Canvas, world: &GameWorld) -> io::Result<()> {
    canvas.clear()?;

    match world.game.state {
        GameState::Play | GameState::PlayerDead | GameState::Wait => draw_play(canvas, world)?,
        GameState::GameOver => draw_game_over(canvas, &world.game)?,
        GameState::Intro => draw_intro(canvas, &world.game)?,
        GameState::HighScore => draw_high_scores(canvas, &world.game, &world.table)?,
    }

    canvas.set_tint(Tint::Plain)?;
    canvas.present()
}

fn centered_x(width: i32, text: &str) -> i32 {
    width / 2 - text.chars().count() as i32 / 2
}

// ── Play field ────────────────────────────────────────────────────────────────

fn draw_play(canvas: &mut impl Canvas, world: &GameWorld) -> io::Result<()> {
    draw_player(canvas, &world.player, world.game.state == GameState::PlayerDead)?;
    draw_shields(canvas, world)?;
    draw_aliens(canvas, world)?;
    draw_ufo(canvas, world)?;
    draw_hud(canvas, world)?;

    if world.game.wait_timer > 0 && world.game.state != GameState::PlayerDead {
        let banner = "GET READY";
        canvas.set_tint(Tint::Title)?;
        canvas.draw_str(
            centered_x(world.game.window.width, banner),
            world.game.window.height / 2,
            banner,
        )?;
    }
    Ok(())
}

fn draw_hud(canvas: &mut impl Canvas, world: &GameWorld) -> io::Result<()> {
    canvas.set_tint(Tint::Hud)?;
    canvas.draw_str(
        0,
        0,
        &format!(
            "SCORE: {}, LIVES: {}, LEVEL: {}",
            world.player.score, world.player.lives, world.game.level
        ),
    )
}

fn draw_player(canvas: &mut impl Canvas, player: &Player, dead: bool) -> io::Result<()> {
    let height = player.sprite_size.height as usize;
    canvas.set_tint(Tint::Player)?;
    if dead {
        canvas.draw_sprite(
            player.position.x,
            player.position.y,
            &PLAYER_EXPLOSION_SPRITE,
            height,
            player.animation * height,
        )?;
    } else {
        canvas.draw_sprite(player.position.x, player.position.y, &PLAYER_SPRITE, height, 0)?;
    }

    if let Some(missile) = player.missile {
        canvas.set_tint(Tint::Missile)?;
        canvas.draw_char(missile.x, missile.y, PLAYER_MISSILE_SPRITE)?;
    }
    Ok(())
}

fn draw_shields(canvas: &mut impl Canvas, world: &GameWorld) -> io::Result<()> {
    canvas.set_tint(Tint::Shield)?;
    for shield in &world.shields {
        for (dy, row) in shield.sprite.iter().enumerate() {
            let line: String = row.iter().collect();
            canvas.draw_str(shield.position.x, shield.position.y + dy as i32, &line)?;
        }
    }
    Ok(())
}

fn draw_aliens(canvas: &mut impl Canvas, world: &GameWorld) -> io::Result<()> {
    let swarm = &world.aliens;
    let height = swarm.sprite_size.height as usize;

    for row in 0..NUM_ALIEN_ROWS {
        let (sheet, tint): (&[&str], Tint) = match points_for_row(row) {
            30 => (&ALIEN30_SPRITE[..], Tint::Alien30),
            20 => (&ALIEN20_SPRITE[..], Tint::Alien20),
            _ => (&ALIEN10_SPRITE[..], Tint::Alien10),
        };
        for col in 0..NUM_ALIEN_COLUMNS {
            let cell = Cell { row, col };
            let pos = alien_position(swarm, cell);
            match cell_state(swarm, cell) {
                Some(CellState::Alive) => {
                    canvas.set_tint(tint)?;
                    canvas.draw_sprite(pos.x, pos.y, sheet, height, swarm.animation * height)?;
                }
                Some(CellState::Exploding) => {
                    canvas.set_tint(Tint::Explosion)?;
                    canvas.draw_sprite(pos.x, pos.y, &ALIEN_EXPLOSION_SPRITE, height, 0)?;
                }
                _ => {}
            }
        }
    }

    canvas.set_tint(Tint::Bomb)?;
    for bomb in &swarm.bombs {
        if let Some(pos) = bomb.position {
            let glyph = ALIEN_BOMB_SPRITE[bomb.animation % ALIEN_BOMB_SPRITE.len()];
            canvas.draw_char(pos.x, pos.y, glyph)?;
        }
    }
    Ok(())
}

fn draw_ufo(canvas: &mut impl Canvas, world: &GameWorld) -> io::Result<()> {
    if let Some(pos) = world.ufo.position {
        canvas.set_tint(Tint::Ufo)?;
        canvas.draw_sprite(
            pos.x,
            pos.y,
            &ALIEN_UFO_SPRITE,
            world.ufo.size.height as usize,
            0,
        )?;
    }
    Ok(())
}

// ── Menus ─────────────────────────────────────────────────────────────────────

fn draw_intro(canvas: &mut impl Canvas, game: &Game) -> io::Result<()> {
    let lines = [
        "WELCOME TO TEXT INVADERS!",
        "Press Space Bar to continue",
        "Press (s) to go to the high scores",
    ];
    let y = game.window.height / 2 - 2;

    canvas.set_tint(Tint::Title)?;
    for (i, line) in lines.iter().enumerate() {
        canvas.draw_str(centered_x(game.window.width, line), y + i as i32, line)?;
    }
    Ok(())
}

fn draw_game_over(canvas: &mut impl Canvas, game: &Game) -> io::Result<()> {
    let y = game.window.height / 3;
    let width = game.window.width;

    canvas.set_tint(Tint::Title)?;
    for (dy, line) in [
        (0, "GAME OVER!"),
        (1, "Press Space Bar to continue"),
        (3, "Please Enter your name: "),
    ] {
        canvas.draw_str(centered_x(width, line), y + dy, line)?;
    }

    canvas.set_tint(Tint::Plain)?;
    let x = width / 2 - MAX_NUMBER_OF_CHARACTERS_IN_NAME as i32 / 2;
    for slot in 0..MAX_NUMBER_OF_CHARACTERS_IN_NAME {
        let selected = slot == game.name_entry.cursor;
        if selected {
            canvas.set_underline(true)?;
        }
        canvas.draw_char(x + slot as i32, y + 5, game.name_entry.letter(slot))?;
        if selected {
            canvas.set_underline(false)?;
        }
    }
    Ok(())
}

fn draw_high_scores(
    canvas: &mut impl Canvas,
    game: &Game,
    table: &HighScoreTable,
) -> io::Result<()> {
    let title = "High Scores";
    let x = centered_x(game.window.width, title);
    let y = 5;
    let spacing = 2;

    canvas.set_tint(Tint::Title)?;
    canvas.set_underline(true)?;
    canvas.draw_str(x, y, title)?;
    canvas.set_underline(false)?;

    canvas.set_tint(Tint::Hud)?;
    for (i, score) in table.scores.iter().take(table.capacity).enumerate() {
        canvas.draw_str(
            x - MAX_NUMBER_OF_CHARACTERS_IN_NAME as i32,
            y + (i as i32 + 1) * spacing,
            &format!("{:<8}{:>8}", score.name, score.score),
        )?;
    }
    Ok(())
}
