//! All game entity types: pure data, no logic.
//!
//! "Not in play" is `None` wherever an entity can be absent from the world
//! (the player missile, every bomb slot, the UFO).

use crate::config::Rules;
use crate::constants::{
    MAX_NUMBER_OF_ALIEN_BOMBS, MAX_NUMBER_OF_CHARACTERS_IN_NAME, NUM_ALIEN_COLUMNS,
    NUM_ALIEN_ROWS, SHIELD_SPRITE_HEIGHT, SHIELD_SPRITE_WIDTH,
};

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub position: Position,
    pub sprite_size: Size,
    pub lives: u32,
    pub score: u32,
    /// At most one missile is ever in flight.
    pub missile: Option<Position>,
    /// Explosion frame while the player is dead; 0 otherwise.
    pub animation: usize,
}

// ── Shields ───────────────────────────────────────────────────────────────────

pub type ShieldSprite = [[char; SHIELD_SPRITE_WIDTH]; SHIELD_SPRITE_HEIGHT];

/// A destructible barrier. Cells only ever change toward the empty glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct Shield {
    pub position: Position,
    pub sprite: ShieldSprite,
}

// ── Alien swarm ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Alive,
    Exploding,
    Dead,
}

pub type AlienGrid = [[CellState; NUM_ALIEN_COLUMNS]; NUM_ALIEN_ROWS];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bomb {
    pub position: Option<Position>,
    pub animation: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AlienSwarm {
    /// Row 0 is the top (highest value) row.
    pub cells: AlienGrid,
    /// Top-left corner of the full formation, dead columns included.
    pub position: Position,
    /// +1 moving right, -1 moving left.
    pub direction: i32,
    /// Ticks left until the next formation step.
    pub movement_time: i32,
    pub animation: usize,
    pub alive: usize,
    /// Rows the formation may still descend before it reaches the player.
    pub lines: i32,
    pub sprite_size: Size,
    /// Shared by every exploding cell; `None` when no explosion is showing.
    pub explosion_timer: Option<u32>,
    pub bombs: [Bomb; MAX_NUMBER_OF_ALIEN_BOMBS],
}

/// Grid coordinates of one alien inside the swarm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// What the swarm reports back to the orchestrator after one update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwarmEvent {
    Nothing,
    PlayerHit,
    ReachedBottom,
}

// ── UFO ───────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct AlienUfo {
    pub position: Option<Position>,
    pub size: Size,
    pub points: u32,
}

// ── High scores ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Score {
    pub name: String,
    pub score: u32,
}

/// Sorted descending by score, never longer than `capacity`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HighScoreTable {
    pub scores: Vec<Score>,
    pub capacity: usize,
}

// ── Game flow ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Intro,
    Play,
    PlayerDead,
    Wait,
    GameOver,
    HighScore,
}

/// Cursor state for the three-letter name prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameEntry {
    /// Slot currently selected.
    pub cursor: usize,
    /// Alphabet index per slot (0 = 'A').
    pub letters: [u8; MAX_NUMBER_OF_CHARACTERS_IN_NAME],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    pub window: Size,
    pub state: GameState,
    pub wait_timer: u32,
    /// Ticks since the round started.
    pub game_timer: u64,
    /// 1-based.
    pub level: u32,
    pub name_entry: NameEntry,
    pub rules: Rules,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything the loop owns for one run of the program.
#[derive(Clone, Debug)]
pub struct GameWorld {
    pub game: Game,
    pub player: Player,
    pub shields: Vec<Shield>,
    pub aliens: AlienSwarm,
    pub ufo: AlienUfo,
    pub table: HighScoreTable,
}
