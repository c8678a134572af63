use std::fs;

use tempfile::tempdir;

use crate::leaderboard::constants::LEADERBOARD_CAPACITY;
use crate::leaderboard::{JsonFileStore, Leaderboard, LeaderboardStore, ScoreRecord};

#[test]
fn test_insert_keeps_descending_order() {
    let mut board = Leaderboard::new();
    board.insert(ScoreRecord::new("ann", 10));
    board.insert(ScoreRecord::new("bob", 40));
    board.insert(ScoreRecord::new("cyd", 25));

    let scores: Vec<u32> = board.records().iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![40, 25, 10]);
}

#[test]
fn test_eleven_records_keep_top_ten() {
    let mut board = Leaderboard::new();
    for score in 0..11 {
        board.insert(ScoreRecord::new(format!("p{}", score), score));
    }

    assert_eq!(board.len(), LEADERBOARD_CAPACITY);
    let scores: Vec<u32> = board.records().iter().map(|r| r.score).collect();
    assert_eq!(scores, (1..11).rev().collect::<Vec<u32>>());
}

#[test]
fn test_ties_keep_insertion_order() {
    let mut board = Leaderboard::new();
    board.insert(ScoreRecord::new("first", 20));
    board.insert(ScoreRecord::new("high", 30));
    let position = board.insert(ScoreRecord::new("second", 20));

    assert_eq!(position, Some(3));
    let names: Vec<&str> = board.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["high", "first", "second"]);
}

#[test]
fn test_insert_reports_position() {
    let mut board = Leaderboard::new();
    assert_eq!(board.insert(ScoreRecord::new("a", 5)), Some(1));
    assert_eq!(board.insert(ScoreRecord::new("b", 50)), Some(1));
    assert_eq!(board.insert(ScoreRecord::new("c", 20)), Some(2));
}

#[test]
fn test_insert_below_full_board_is_dropped() {
    let mut board = Leaderboard::new();
    for _ in 0..LEADERBOARD_CAPACITY {
        board.insert(ScoreRecord::new("regular", 30));
    }

    assert_eq!(board.insert(ScoreRecord::new("late tie", 30)), None);
    assert_eq!(board.insert(ScoreRecord::new("low", 0)), None);
    assert!(board.records().iter().all(|r| r.name == "regular"));

    assert_eq!(board.insert(ScoreRecord::new("best", 31)), Some(1));
    assert_eq!(board.len(), LEADERBOARD_CAPACITY);
}

#[test]
fn test_from_records_ranks_stably() {
    let board = Leaderboard::from_records(vec![
        ScoreRecord::new("a", 1),
        ScoreRecord::new("b", 9),
        ScoreRecord::new("c", 1),
    ]);
    let names: Vec<&str> = board.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(store.load().is_empty());
    }
}

#[test]
fn test_corrupt_file_loads_empty() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let path = dir.path().join("rank.json");
        assert!(fs::write(&path, "{ not json").is_ok());
        let store = JsonFileStore::new(&path);
        assert!(store.load().is_empty());

        assert!(fs::write(&path, r#"[{"name": "x"}]"#).is_ok());
        assert!(store.load().is_empty());
    }
}

#[test]
fn test_save_then_load() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let store = JsonFileStore::new(dir.path().join("nested").join("rank.json"));
        let records = vec![
            ScoreRecord::new("low", 3),
            ScoreRecord::new("high", 55),
            ScoreRecord::new("mid", 21),
        ];

        assert!(store.save(&records).is_ok());
        let loaded = store.load();
        let names: Vec<&str> = loaded.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }
}

#[test]
fn test_save_truncates_to_capacity() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let store = JsonFileStore::new(dir.path().join("rank.json"));
        let records: Vec<ScoreRecord> = (0..15).map(|s| ScoreRecord::new("p", s)).collect();

        assert!(store.save(&records).is_ok());
        let loaded = store.load();
        assert_eq!(loaded.len(), LEADERBOARD_CAPACITY);
        assert_eq!(loaded.first().map(|r| r.score), Some(14));
    }
}

#[test]
fn test_loads_file_written_by_hand() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let path = dir.path().join("rank.json");
        let json = r#"[
  {"name": "小明", "score": 12},
  {"name": "li", "score": 40}
]"#;
        assert!(fs::write(&path, json).is_ok());
        let loaded = JsonFileStore::new(&path).load();
        assert_eq!(
            loaded,
            vec![ScoreRecord::new("li", 40), ScoreRecord::new("小明", 12)]
        );
    }
}

#[test]
fn test_save_into_unwritable_location_fails() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let blocker = dir.path().join("file");
        assert!(fs::write(&blocker, "").is_ok());
        let store = JsonFileStore::new(blocker.join("rank.json"));
        assert!(store.save(&[ScoreRecord::new("a", 1)]).is_err());
    }
}
