use hockey_core::{Config, Side};
use hockey_match::{
    JsonFileStore, Leaderboard, LeaderboardStore, ManualClock, MatchController, MatchRecord,
    MatchStatus, MemoryStore, MAX_RECORDS,
};

fn record(n: u64) -> MatchRecord {
    MatchRecord::new(&format!("P{n}"), 3, (n % 3) as u8, Side::Human, 1_700_000_000_000 + n)
}

#[test]
fn test_full_leaderboard_evicts_oldest() {
    let store = MemoryStore::new();
    let mut board = Leaderboard::new(Box::new(store.clone()));

    // Saved oldest first, so record 49 is the newest
    for n in 0..MAX_RECORDS as u64 {
        board.save_match(record(n));
    }
    assert_eq!(board.get_leaderboard().len(), 50);

    board.save_match(record(50));
    let records = board.get_leaderboard();
    assert_eq!(records.len(), 50);
    assert_eq!(records[0], record(50));
    assert_eq!(records[1], record(49));
    assert_eq!(records[49], record(1));
    assert!(!records.contains(&record(0)));
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("neon_hockey_leaderboard.json");

    let mut board = Leaderboard::new(Box::new(JsonFileStore::new(&path)));
    assert!(board.get_leaderboard().is_empty());
    board.save_match(record(1));
    board.save_match(record(2));

    // A fresh handle sees what the first one wrote
    let reopened = Leaderboard::new(Box::new(JsonFileStore::new(&path)));
    assert_eq!(reopened.get_leaderboard(), vec![record(2), record(1)]);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"playerName\":\"P2\""));
}

#[test]
fn test_file_store_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("absent.json"));
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_file_store_malformed_file_degrades() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    std::fs::write(&path, "definitely not json").unwrap();

    let board = Leaderboard::new(Box::new(JsonFileStore::new(&path)));
    assert!(board.get_leaderboard().is_empty());
}

#[test]
fn test_file_store_clear() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    let mut board = Leaderboard::new(Box::new(JsonFileStore::new(&path)));
    board.save_match(record(1));
    board.clear();
    assert!(!path.exists());
    // Clearing twice is fine
    board.clear();
}

#[test]
fn test_controller_reads_existing_history() {
    let existing = serde_json::to_string(&vec![record(9)]).unwrap();
    let ctrl = MatchController::new(
        Config::new(),
        Box::new(ManualClock::new(0)),
        Box::new(MemoryStore::with_contents(&existing)),
    );
    assert_eq!(ctrl.status(), MatchStatus::Idle);
    assert_eq!(ctrl.leaderboard(), vec![record(9)]);
}

#[test]
fn test_controller_with_malformed_history() {
    let ctrl = MatchController::new(
        Config::new(),
        Box::new(ManualClock::new(0)),
        Box::new(MemoryStore::with_contents("[{\"id\": 5")),
    );
    assert!(ctrl.leaderboard().is_empty());
}

#[test]
fn test_failed_rename_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should go makes the final rename fail
    let path = dir.path().join("board.json");
    std::fs::create_dir(&path).unwrap();

    let mut store = JsonFileStore::new(&path);
    assert!(store.store("[]").is_err());
    assert!(!dir.path().join("board.json.tmp").exists());
    assert!(path.is_dir());
}
