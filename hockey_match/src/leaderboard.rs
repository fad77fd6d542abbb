//! Match history persistence

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use hockey_core::Side;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Namespaced key the history is stored under
pub const STORAGE_KEY: &str = "neon_hockey_leaderboard";

/// Most recent records kept
pub const MAX_RECORDS: usize = 50;

/// One completed match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: String,
    pub player_name: String,
    pub player_score: u8,
    pub ai_score: u8,
    pub winner: Side,
    /// Epoch milliseconds
    pub date: u64,
}

impl MatchRecord {
    /// Record a result finished at `now_ms`; the id is the same timestamp
    pub fn new(player_name: &str, player_score: u8, ai_score: u8, winner: Side, now_ms: u64) -> Self {
        Self {
            id: now_ms.to_string(),
            player_name: player_name.to_string(),
            player_score,
            ai_score,
            winner,
            date: now_ms,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("leaderboard I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("leaderboard data is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("leaderboard storage unavailable: {0}")]
    Unavailable(String),
}

/// Raw key/value storage for the serialized history
pub trait LeaderboardStore {
    /// Stored text, or `None` when nothing has been saved yet
    fn load(&self) -> Result<Option<String>, StoreError>;
    fn store(&mut self, data: &str) -> Result<(), StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// History kept in a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/neon-hockey/neon_hockey_leaderboard.json`
    pub fn in_data_dir() -> Result<Self, StoreError> {
        let dir = dirs::data_dir()
            .ok_or_else(|| StoreError::Unavailable("no platform data directory".into()))?;
        Ok(Self::new(
            dir.join("neon-hockey").join(format!("{STORAGE_KEY}.json")),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeaderboardStore for JsonFileStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&mut self, data: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write then rename so a crash never leaves a half-written file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// In-memory storage. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing raw contents
    pub fn with_contents(data: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(data.to_string()))),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl LeaderboardStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot.borrow().clone())
    }

    fn store(&mut self, data: &str) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(data.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

/// Newest-first match history on top of a store.
///
/// Reads and writes never fail for the caller: problems are logged and the
/// history degrades to empty (reads) or unchanged (writes).
pub struct Leaderboard {
    store: Box<dyn LeaderboardStore>,
}

impl Leaderboard {
    pub fn new(store: Box<dyn LeaderboardStore>) -> Self {
        Self { store }
    }

    pub fn get_leaderboard(&self) -> Vec<MatchRecord> {
        self.try_load().unwrap_or_else(|e| {
            log::warn!("Failed to load leaderboard: {e}");
            Vec::new()
        })
    }

    pub fn try_load(&self) -> Result<Vec<MatchRecord>, StoreError> {
        match self.store.load()? {
            Some(text) => Ok(serde_json::from_str(&text)?),
            None => Ok(Vec::new()),
        }
    }

    /// Prepend a record, keeping the newest `MAX_RECORDS`
    pub fn save_match(&mut self, record: MatchRecord) {
        if let Err(e) = self.try_save(record) {
            log::warn!("Failed to save match record: {e}");
        }
    }

    /// Fails without writing when the existing history cannot be read, so a
    /// transient read error never overwrites it. Malformed data is replaced.
    pub fn try_save(&mut self, record: MatchRecord) -> Result<(), StoreError> {
        let mut records = match self.try_load() {
            Ok(records) => records,
            Err(StoreError::Json(e)) => {
                log::warn!("Discarding malformed leaderboard: {e}");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        records.insert(0, record);
        records.truncate(MAX_RECORDS);
        let text = serde_json::to_string(&records)?;
        self.store.store(&text)
    }

    pub fn clear(&mut self) {
        if let Err(e) = self.store.clear() {
            log::warn!("Failed to clear leaderboard: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl LeaderboardStore for FailingStore {
        fn load(&self) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("denied".into()))
        }
        fn store(&mut self, _data: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".into()))
        }
        fn clear(&mut self) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("denied".into()))
        }
    }

    /// Memory-backed store whose reads can be switched off
    struct FlakyStore {
        inner: MemoryStore,
        reads_fail: Rc<std::cell::Cell<bool>>,
    }

    impl LeaderboardStore for FlakyStore {
        fn load(&self) -> Result<Option<String>, StoreError> {
            if self.reads_fail.get() {
                return Err(StoreError::Io(io::Error::other("device busy")));
            }
            self.inner.load()
        }
        fn store(&mut self, data: &str) -> Result<(), StoreError> {
            self.inner.store(data)
        }
        fn clear(&mut self) -> Result<(), StoreError> {
            self.inner.clear()
        }
    }

    fn record(n: u64) -> MatchRecord {
        MatchRecord::new(&format!("P{n}"), 3, 1, Side::Human, 1_000 + n)
    }

    #[test]
    fn test_record_json_shape() {
        let json = serde_json::to_value(MatchRecord::new("Ann", 1, 3, Side::Ai, 42)).unwrap();
        assert_eq!(json["id"], "42");
        assert_eq!(json["playerName"], "Ann");
        assert_eq!(json["playerScore"], 1);
        assert_eq!(json["aiScore"], 3);
        assert_eq!(json["winner"], "AI");
        assert_eq!(json["date"], 42);

        let human = serde_json::to_value(record(0)).unwrap();
        assert_eq!(human["winner"], "PLAYER");
    }

    #[test]
    fn test_empty_store_is_empty_leaderboard() {
        let board = Leaderboard::new(Box::new(MemoryStore::new()));
        assert!(board.get_leaderboard().is_empty());
    }

    #[test]
    fn test_save_prepends() {
        let mut board = Leaderboard::new(Box::new(MemoryStore::new()));
        board.save_match(record(1));
        board.save_match(record(2));
        let ids: Vec<_> = board.get_leaderboard().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["1002", "1001"]);
    }

    #[test]
    fn test_malformed_data_degrades_to_empty() {
        let store = MemoryStore::with_contents("{not json");
        let board = Leaderboard::new(Box::new(store));
        assert!(board.get_leaderboard().is_empty());
        assert!(matches!(board.try_load(), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_save_over_malformed_data_starts_fresh() {
        let store = MemoryStore::with_contents("[1, 2");
        let mut board = Leaderboard::new(Box::new(store.clone()));
        board.save_match(record(7));
        assert_eq!(board.get_leaderboard(), vec![record(7)]);
    }

    #[test]
    fn test_failing_store_does_not_panic() {
        let mut board = Leaderboard::new(Box::new(FailingStore));
        board.save_match(record(1));
        board.clear();
        assert!(board.get_leaderboard().is_empty());
        assert!(board.try_save(record(2)).is_err());
    }

    #[test]
    fn test_read_failure_keeps_history_on_save() {
        let inner = MemoryStore::new();
        let reads_fail = Rc::new(std::cell::Cell::new(false));
        let mut board = Leaderboard::new(Box::new(FlakyStore {
            inner: inner.clone(),
            reads_fail: reads_fail.clone(),
        }));
        for n in 0..MAX_RECORDS as u64 {
            board.save_match(record(n));
        }
        let before = inner.contents();

        reads_fail.set(true);
        board.save_match(record(99));
        assert!(matches!(board.try_save(record(100)), Err(StoreError::Io(_))));
        assert_eq!(inner.contents(), before, "Store must not be rewritten");

        reads_fail.set(false);
        let records = board.get_leaderboard();
        assert_eq!(records.len(), MAX_RECORDS);
        assert_eq!(records[0], record(49));
    }

    #[test]
    fn test_clear_removes_history() {
        let store = MemoryStore::new();
        let mut board = Leaderboard::new(Box::new(store.clone()));
        board.save_match(record(1));
        board.clear();
        assert!(store.contents().is_none());
        assert!(board.get_leaderboard().is_empty());
    }
}
