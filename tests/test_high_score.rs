use std::fs;

use text_invaders::entities::{HighScoreTable, Score};
use text_invaders::error::InvadersError;
use text_invaders::high_score::*;

fn score(name: &str, value: u32) -> Score {
    Score {
        name: name.to_string(),
        score: value,
    }
}

fn empty_table(capacity: usize) -> HighScoreTable {
    HighScoreTable {
        scores: Vec::new(),
        capacity,
    }
}

/// A store whose writes always fail.
struct BrokenStore;

impl ScoreStore for BrokenStore {
    fn load(&self) -> Result<Vec<Score>, InvadersError> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
    }

    fn save(&self, _scores: &[Score]) -> Result<(), InvadersError> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
    }
}

// ── text format ───────────────────────────────────────────────────────────────

#[test]
fn parse_reads_name_score_pairs() {
    let scores = parse_scores("ABC 1200\nXYZ   40\n\n").unwrap();
    assert_eq!(scores, vec![score("ABC", 1200), score("XYZ", 40)]);
}

#[test]
fn parse_empty_file_is_empty() {
    assert!(parse_scores("").unwrap().is_empty());
}

#[test]
fn parse_rejects_malformed_line_with_its_number() {
    let err = parse_scores("ABC 100\nnot-a-score\n").unwrap_err();
    match err {
        InvadersError::ScoreFormat { line, content } => {
            assert_eq!(line, 2);
            assert_eq!(content, "not-a-score");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parse_rejects_non_numeric_and_extra_tokens() {
    assert!(parse_scores("ABC lots\n").is_err());
    assert!(parse_scores("ABC 10 20\n").is_err());
    assert!(parse_scores("ABC -5\n").is_err());
}

#[test]
fn format_writes_one_record_per_line() {
    let text = format_scores(&[score("ABC", 300), score("DEF", 20)]);
    assert_eq!(text, "ABC 300\nDEF 20\n");
    assert_eq!(parse_scores(&text).unwrap().len(), 2);
}

// ── table ─────────────────────────────────────────────────────────────────────

#[test]
fn add_keeps_descending_order() {
    let mut table = empty_table(10);
    add_high_score(&mut table, "LOW", 10);
    add_high_score(&mut table, "TOP", 500);
    add_high_score(&mut table, "MID", 120);
    let values: Vec<u32> = table.scores.iter().map(|s| s.score).collect();
    assert_eq!(values, vec![500, 120, 10]);
}

#[test]
fn add_caps_the_table() {
    let mut table = empty_table(3);
    for (i, value) in [40, 10, 30, 20, 50].into_iter().enumerate() {
        add_high_score(&mut table, &format!("P{i}"), value);
    }
    let values: Vec<u32> = table.scores.iter().map(|s| s.score).collect();
    assert_eq!(values, vec![50, 40, 30]);
}

#[test]
fn equal_scores_keep_the_older_entry_first() {
    let mut table = empty_table(10);
    add_high_score(&mut table, "OLD", 100);
    add_high_score(&mut table, "NEW", 100);
    assert_eq!(table.scores[0].name, "OLD");
    assert_eq!(table.scores[1].name, "NEW");
}

#[test]
fn score_below_a_full_table_is_dropped() {
    let mut table = empty_table(2);
    add_high_score(&mut table, "AAA", 100);
    add_high_score(&mut table, "BBB", 90);
    add_high_score(&mut table, "CCC", 5);
    assert_eq!(table.scores.len(), 2);
    assert!(table.scores.iter().all(|s| s.name != "CCC"));
}

// ── file store ────────────────────────────────────────────────────────────────

#[test]
fn missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileScoreStore::new(dir.path().join("none.txt"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn file_store_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("HighScores.txt");
    let store = FileScoreStore::new(&path);

    let mut table = load_table(&store, 10);
    record_high_score(&mut table, &store, "ABC", 700);
    record_high_score(&mut table, &store, "XYZ", 900);

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "XYZ 900\nABC 700\n"
    );
    let reloaded = load_table(&store, 10);
    assert_eq!(reloaded, table);
}

#[test]
fn load_table_sorts_and_caps_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.txt");
    fs::write(&path, "AAA 10\nBBB 30\nCCC 20\n").unwrap();

    let table = load_table(&FileScoreStore::new(&path), 2);
    assert_eq!(table.scores, vec![score("BBB", 30), score("CCC", 20)]);
    assert_eq!(table.capacity, 2);
}

#[test]
fn garbage_file_loads_as_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.txt");
    fs::write(&path, "AAA 10\n%%% garbage here\n").unwrap();

    let table = load_table(&FileScoreStore::new(&path), 10);
    assert!(table.scores.is_empty());
}

#[test]
fn failed_save_keeps_the_session_table() {
    let mut table = load_table(&BrokenStore, 10);
    assert!(table.scores.is_empty());

    record_high_score(&mut table, &BrokenStore, "ABC", 40);
    assert_eq!(table.scores, vec![score("ABC", 40)]);
}
