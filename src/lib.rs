//! Text Invaders: a character-grid alien-invasion shooter.
//!
//! The library holds the whole simulation (entities, swarm movement,
//! collision resolution, the phase state machine), scene composition onto an
//! abstract [`canvas::Canvas`], configuration, and high-score persistence.
//! The binary wires it to a crossterm terminal.

pub mod aliens;
pub mod canvas;
pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod high_score;
pub mod input;
pub mod player;
pub mod scene;
pub mod shield;
pub mod ufo;
