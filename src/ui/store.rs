//! JSON-backed progress store
//!
//! Holds the achievement map (id → unix-seconds unlock time) and the
//! per-puzzle best move counts. Unlocks are append-only by key: a key, once
//! present, is never removed or overwritten, so last-write-wins across
//! processes loses nothing. Saves are best-effort — a failure to write is
//! reported on stderr and the session simply continues unpersisted — and a
//! missing or corrupt file loads as an empty store.
//!
//! The algorithm engines never see this type; only scenes and the app write
//! to it, after inspecting engine output.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Progress {
    /// Achievement id → unix seconds at first unlock.
    unlocked: BTreeMap<String, u64>,
    /// Puzzle id → fewest moves to solve.
    best_moves: BTreeMap<String, u32>,
}

#[derive(Debug)]
pub struct ProgressStore {
    path: Option<PathBuf>,
    progress: Progress,
}

impl ProgressStore {
    /// Load from `$ALGOTTY_DATA/progress.json`, falling back to
    /// `~/.algotty/progress.json`. No usable directory means an in-memory
    /// store that never persists.
    pub fn load_default() -> Self {
        let dir = std::env::var_os("ALGOTTY_DATA")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| Path::new(&home).join(".algotty")));
        match dir {
            Some(dir) => Self::load_from(dir.join("progress.json")),
            None => ProgressStore {
                path: None,
                progress: Progress::default(),
            },
        }
    }

    /// Load from an explicit path; unreadable or malformed contents degrade
    /// to an empty store rather than failing startup.
    pub fn load_from(path: PathBuf) -> Self {
        let progress = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        ProgressStore {
            path: Some(path),
            progress,
        }
    }

    /// Unlock an achievement. Returns true only on the first unlock.
    pub fn unlock(&mut self, key: &str) -> bool {
        if self.progress.unlocked.contains_key(key) {
            return false;
        }
        self.progress.unlocked.insert(key.to_string(), now_secs());
        self.save();
        true
    }

    pub fn is_unlocked(&self, key: &str) -> bool {
        self.progress.unlocked.contains_key(key)
    }

    pub fn unlocked_count(&self) -> usize {
        self.progress.unlocked.len()
    }

    /// Record a puzzle score; keeps the minimum. Returns true when `moves`
    /// set a new best.
    pub fn record_best(&mut self, puzzle_id: &str, moves: u32) -> bool {
        let improved = self
            .progress
            .best_moves
            .get(puzzle_id)
            .is_none_or(|&best| moves < best);
        if improved {
            self.progress.best_moves.insert(puzzle_id.to_string(), moves);
            self.save();
        }
        improved
    }

    pub fn best(&self, puzzle_id: &str) -> Option<u32> {
        self.progress.best_moves.get(puzzle_id).copied()
    }

    fn save(&self) {
        let Some(path) = &self.path else { return };
        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(&self.progress)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            fs::write(path, json)
        };
        if let Err(e) = write() {
            eprintln!("Warning: failed to save progress to {}: {e}", path.display());
        }
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> ProgressStore {
        let path = std::env::temp_dir()
            .join("algotty-test")
            .join(format!("{name}-{}.json", std::process::id()));
        let _ = fs::remove_file(&path);
        ProgressStore::load_from(path)
    }

    #[test]
    fn unlock_is_append_only() {
        let mut store = temp_store("unlock");
        assert!(store.unlock("first_sort"));
        assert!(!store.unlock("first_sort"));
        assert!(store.is_unlocked("first_sort"));
        assert_eq!(store.unlocked_count(), 1);
    }

    #[test]
    fn best_keeps_the_minimum() {
        let mut store = temp_store("best");
        assert!(store.record_best("p1", 12));
        assert!(!store.record_best("p1", 20));
        assert!(store.record_best("p1", 7));
        assert_eq!(store.best("p1"), Some(7));
    }

    #[test]
    fn roundtrips_through_disk() {
        let mut store = temp_store("roundtrip");
        store.unlock("a");
        store.record_best("p", 3);
        let path = store.path.clone().unwrap();

        let reloaded = ProgressStore::load_from(path);
        assert!(reloaded.is_unlocked("a"));
        assert_eq!(reloaded.best("p"), Some(3));
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let path = std::env::temp_dir()
            .join("algotty-test")
            .join(format!("corrupt-{}.json", std::process::id()));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();
        let store = ProgressStore::load_from(path);
        assert_eq!(store.unlocked_count(), 0);
    }
}
