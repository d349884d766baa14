//! Fixed dimensions, sprites and tuning values.
//!
//! Anything that sizes a fixed grid lives here as a `const`; values a player
//! may want to tweak without recompiling are mirrored in
//! [`crate::config::Rules`], which uses these as its defaults.

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_SPRITE_WIDTH: i32 = 5;
pub const PLAYER_SPRITE_HEIGHT: i32 = 2;
pub const PLAYER_MOVEMENT_AMOUNT: i32 = 2;
pub const PLAYER_MISSILE_SPEED: i32 = 1;
pub const MAX_NUMBER_OF_LIVES: u32 = 3;

pub const PLAYER_SPRITE: [&str; 2] = [" =A= ", "====="];
/// Two frames stacked vertically; the frame index selects the row offset.
pub const PLAYER_EXPLOSION_SPRITE: [&str; 4] = [",~^~,", "=====", "'~v~'", "====="];
pub const PLAYER_MISSILE_SPRITE: char = '|';

// ── Shields ───────────────────────────────────────────────────────────────────

pub const NUM_SHIELDS: usize = 4;
pub const SHIELD_SPRITE_WIDTH: usize = 7;
pub const SHIELD_SPRITE_HEIGHT: usize = 3;
pub const SHIELD_SPRITE: [&str; SHIELD_SPRITE_HEIGHT] = ["/IIIII\\", "IIIIIII", "I/   \\I"];
pub const SHIELD_EMPTY: char = ' ';

// ── Alien swarm ───────────────────────────────────────────────────────────────

pub const NUM_ALIEN_ROWS: usize = 5;
pub const NUM_ALIEN_COLUMNS: usize = 11;
pub const NUM_ALIENS: usize = NUM_ALIEN_ROWS * NUM_ALIEN_COLUMNS;

pub const ALIEN_SPRITE_WIDTH: i32 = 3;
pub const ALIEN_SPRITE_HEIGHT: i32 = 2;
pub const ALIENS_X_PADDING: i32 = 1;
pub const ALIENS_Y_PADDING: i32 = 1;

/// How many rows the formation may descend on level 1.
pub const ALIEN_START_LINES: i32 = 11;
pub const ALIEN_EXPLOSION_TIME: u32 = 4;

/// Points awarded per row, top row first. Must stay non-increasing.
pub const ALIEN_ROW_POINTS: [u32; NUM_ALIEN_ROWS] = [30, 20, 20, 10, 10];

pub const ALIEN30_SPRITE: [&str; 4] = ["/M\\", "\\\"/", "/M\\", "/\"\\"];
pub const ALIEN20_SPRITE: [&str; 4] = ["dOb", "^^^", "dOb", "~^~"];
pub const ALIEN10_SPRITE: [&str; 4] = ["{@}", "/\"\\", "{@}", "\\\"/"];
pub const ALIEN_EXPLOSION_SPRITE: [&str; 2] = ["\\|/", "/|\\"];

// ── Bombs ─────────────────────────────────────────────────────────────────────

pub const MAX_NUMBER_OF_ALIEN_BOMBS: usize = 3;
pub const ALIEN_BOMB_SPEED: i32 = 1;
pub const ALIEN_BOMB_SPRITE: [char; 4] = ['\\', '|', '/', '-'];

/// Base of the fire-odds modulus; the odds sharpen as the swarm thins.
pub const BOMB_ODDS_BASE: u32 = 70;
/// The draw value that counts as "fire".
pub const BOMB_FIDUCIAL: u32 = 1;

// ── UFO ───────────────────────────────────────────────────────────────────────

pub const ALIEN_UFO_SPRITE_WIDTH: i32 = 6;
pub const ALIEN_UFO_SPRITE_HEIGHT: i32 = 2;
pub const ALIEN_UFO_SPRITE: [&str; 2] = ["_/oo\\_", "=q==p="];
pub const UFO_PERIOD: u64 = 500;
pub const UFO_OFFSET: u64 = 13;
pub const UFO_POINT_STEP: u32 = 50;

// ── Game flow ─────────────────────────────────────────────────────────────────

pub const NUM_LEVELS: u32 = 10;
pub const FPS: u32 = 20;
pub const DEATH_WAIT: u32 = 10;

pub const MAX_NUMBER_OF_CHARACTERS_IN_NAME: usize = 3;
pub const MAX_ALPHABET_CHARACTERS: u8 = 26;
pub const MAX_HIGH_SCORES: usize = 10;
pub const HIGH_SCORE_FILE: &str = "HighScores.txt";
