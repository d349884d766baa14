//! Runtime configuration loaded from `text_invaders.toml`.
//!
//! Every field defaults to the matching value in [`crate::constants`], so a
//! file only needs the keys it wants to override. A missing file means
//! "use the defaults"; a malformed one is reported and ignored.
//!
//! ```toml
//! fps = 30
//! high_score_file = "scores.txt"
//!
//! [rules]
//! max_lives = 5
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::constants::*;
use crate::error::InvadersError;

pub const CONFIG_FILE: &str = "text_invaders.toml";

/// Gameplay knobs threaded into [`crate::entities::Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub max_lives: u32,
    pub num_levels: u32,
    pub num_shields: usize,
    pub player_step: i32,
    pub ufo_period: u64,
    pub ufo_offset: u64,
    pub max_high_scores: usize,
    /// Countdown armed after a lost life; drives the "get ready" banner.
    pub death_wait: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_lives: MAX_NUMBER_OF_LIVES,
            num_levels: NUM_LEVELS,
            num_shields: NUM_SHIELDS,
            player_step: PLAYER_MOVEMENT_AMOUNT,
            ufo_period: UFO_PERIOD,
            ufo_offset: UFO_OFFSET,
            max_high_scores: MAX_HIGH_SCORES,
            death_wait: DEATH_WAIT,
        }
    }
}

impl Rules {
    /// Clamp values that would otherwise break the simulation. The UFO
    /// offset is folded into the period so the UFO always gets a launch tick.
    pub fn sanitized(self) -> Self {
        let ufo_period = self.ufo_period.max(1);
        if self.ufo_offset >= ufo_period {
            warn!(
                ufo_offset = self.ufo_offset,
                ufo_period, "ufo_offset not below ufo_period; wrapping it"
            );
        }
        Self {
            max_lives: self.max_lives.max(1),
            num_levels: self.num_levels.max(1),
            player_step: self.player_step.max(1),
            ufo_period,
            ufo_offset: self.ufo_offset % ufo_period,
            max_high_scores: self.max_high_scores.max(1),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub fps: u32,
    pub high_score_file: PathBuf,
    pub log_file: PathBuf,
    /// An `EnvFilter` directive, e.g. `"info"` or `"text_invaders=debug"`.
    pub log_level: String,
    pub rules: Rules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: FPS,
            high_score_file: PathBuf::from(HIGH_SCORE_FILE),
            log_file: PathBuf::from("text_invaders.log"),
            log_level: "info".to_string(),
            rules: Rules::default(),
        }
    }
}

impl GameConfig {
    pub fn from_toml(contents: &str) -> Result<Self, InvadersError> {
        let config: GameConfig = toml::from_str(contents)?;
        Ok(config.sanitized())
    }

    pub fn sanitized(self) -> Self {
        Self {
            fps: self.fps.max(1),
            rules: self.rules.sanitized(),
            ..self
        }
    }

    /// Read `path`, falling back to the defaults when it is absent or bad.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml(&contents) {
                Ok(config) => {
                    info!(path = %path.display(), "loaded config");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "bad config; using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
