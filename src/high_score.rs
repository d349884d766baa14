//! High-score table and its flat-file store.
//!
//! File format: one record per line, `<name> <score>`, separated by
//! whitespace. Names are the three-letter tags from the name prompt, so no
//! escaping is needed.

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::entities::{HighScoreTable, Score};
use crate::error::InvadersError;

/// Somewhere the table can be loaded from and saved to.
pub trait ScoreStore {
    fn load(&self) -> Result<Vec<Score>, InvadersError>;
    fn save(&self, scores: &[Score]) -> Result<(), InvadersError>;
}

#[derive(Clone, Debug)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for FileScoreStore {
    /// A missing file is an empty table, not an error.
    fn load(&self) -> Result<Vec<Score>, InvadersError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => parse_scores(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, scores: &[Score]) -> Result<(), InvadersError> {
        fs::write(&self.path, format_scores(scores))?;
        Ok(())
    }
}

// ── Text format ──────────────────────────────────────────────────────────────

pub fn parse_scores(contents: &str) -> Result<Vec<Score>, InvadersError> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let malformed = || InvadersError::ScoreFormat {
                line: i + 1,
                content: line.to_string(),
            };
            let mut tokens = line.split_whitespace();
            let name = tokens.next().ok_or_else(malformed)?;
            let score = tokens
                .next()
                .and_then(|s| s.parse::<u32>().ok())
                .ok_or_else(malformed)?;
            if tokens.next().is_some() {
                return Err(malformed());
            }
            Ok(Score {
                name: name.to_string(),
                score,
            })
        })
        .collect()
}

pub fn format_scores(scores: &[Score]) -> String {
    scores
        .iter()
        .map(|s| format!("{} {}\n", s.name, s.score))
        .collect()
}

// ── Table operations ─────────────────────────────────────────────────────────

fn sort_and_cap(table: &mut HighScoreTable) {
    // Stable: an equal score never overtakes an older entry.
    table.scores.sort_by(|a, b| b.score.cmp(&a.score));
    table.scores.truncate(table.capacity);
}

/// Load the table, treating any failure as "no scores yet".
pub fn load_table(store: &impl ScoreStore, capacity: usize) -> HighScoreTable {
    let scores = store.load().unwrap_or_else(|e| {
        warn!(error = %e, "could not load high scores; starting empty");
        Vec::new()
    });
    let mut table = HighScoreTable { scores, capacity };
    sort_and_cap(&mut table);
    table
}

/// Insert a score keeping the table sorted descending and capped.
pub fn add_high_score(table: &mut HighScoreTable, name: &str, score: u32) {
    table.scores.push(Score {
        name: name.to_string(),
        score,
    });
    sort_and_cap(table);
}

/// Insert and persist. A failed save is logged; the in-memory table stays
/// authoritative for the session.
pub fn record_high_score(
    table: &mut HighScoreTable,
    store: &impl ScoreStore,
    name: &str,
    score: u32,
) {
    add_high_score(table, name, score);
    info!(name, score, "high score recorded");
    if let Err(e) = store.save(&table.scores) {
        warn!(error = %e, "could not save high scores");
    }
}
