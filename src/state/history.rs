//! Recent-search history, persisted across runs.
//!
//! The history is a bounded, newest-first list of successful searches.
//! It is serialized as JSON and written through a [`HistoryBackend`],
//! so the session logic can be exercised without touching the disk.

use std::fs;
use std::io;
use std::path::PathBuf;

use super::data::HistoryEntry;

/// Maximum number of entries kept (and persisted)
pub const HISTORY_LIMIT: usize = 10;

/// Storage seam for the serialized history sequence.
///
/// The production backend is one JSON file in the user's data directory;
/// tests inject an in-memory implementation.
pub trait HistoryBackend {
    /// Read the serialized sequence, `None` if nothing was persisted yet
    fn load(&self) -> Option<String>;
    /// Persist the serialized sequence, replacing any previous payload
    fn save(&self, payload: &str) -> io::Result<()>;
}

/// File-backed storage under the platform data directory.
///
/// The history file lives at:
/// - Linux: ~/.local/share/image-generator/history.json
/// - macOS: ~/Library/Application Support/image-generator/history.json
/// - Windows: %APPDATA%\image-generator\history.json
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new() -> Self {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user data directory");

        path.push("image-generator");
        path.push("history.json");

        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl HistoryBackend for JsonFileBackend {
    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }

    fn save(&self, payload: &str) -> io::Result<()> {
        // Ensure the parent directory exists before the first write
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, payload)
    }
}

/// The bounded recent-search list plus its storage backend.
///
/// Invariant: the in-memory sequence and the persisted sequence are
/// kept synchronized after every mutation, and neither ever exceeds
/// [`HISTORY_LIMIT`] entries.
pub struct History {
    entries: Vec<HistoryEntry>,
    backend: Box<dyn HistoryBackend>,
}

impl History {
    /// Load the persisted history at session start.
    ///
    /// Missing or unreadable payloads yield an empty history; a corrupt
    /// payload is logged and discarded rather than crashing the app.
    pub fn load(backend: Box<dyn HistoryBackend>) -> Self {
        let entries = match backend.load() {
            Some(payload) => match serde_json::from_str::<Vec<HistoryEntry>>(&payload) {
                Ok(mut entries) => {
                    entries.truncate(HISTORY_LIMIT);
                    entries
                }
                Err(e) => {
                    eprintln!("⚠️  Discarding corrupt history payload: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        History { entries, backend }
    }

    /// Record a successful search at the front of the list.
    ///
    /// Truncates to the most recent [`HISTORY_LIMIT`] entries and persists
    /// the full sequence synchronously. A failed write keeps the in-memory
    /// state so the session stays usable.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
        self.persist();
    }

    fn persist(&self) {
        match serde_json::to_string(&self.entries) {
            Ok(payload) => {
                if let Err(e) = self.backend.save(&payload) {
                    eprintln!("⚠️  Failed to persist search history: {}", e);
                }
            }
            Err(e) => {
                eprintln!("⚠️  Failed to serialize search history: {}", e);
            }
        }
    }

    /// Entries ordered newest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("History")
            .field("entries", &self.entries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared-cell backend so tests can inspect what was persisted
    struct MemoryBackend(Rc<RefCell<Option<String>>>);

    impl HistoryBackend for MemoryBackend {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn save(&self, payload: &str) -> io::Result<()> {
            *self.0.borrow_mut() = Some(payload.to_string());
            Ok(())
        }
    }

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry {
            url: format!("https://img/{}", n),
            query: format!("query {}", n),
        }
    }

    fn memory_history() -> (History, Rc<RefCell<Option<String>>>) {
        let cell = Rc::new(RefCell::new(None));
        let history = History::load(Box::new(MemoryBackend(Rc::clone(&cell))));
        (history, cell)
    }

    #[test]
    fn test_starts_empty_without_persisted_payload() {
        let (history, _) = memory_history();
        assert!(history.is_empty());
    }

    #[test]
    fn test_record_prepends() {
        let (mut history, _) = memory_history();

        history.record(entry(1));
        history.record(entry(2));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0], entry(2));
        assert_eq!(history.entries()[1], entry(1));
    }

    #[test]
    fn test_record_caps_at_limit() {
        let (mut history, _) = memory_history();

        for n in 0..HISTORY_LIMIT + 5 {
            history.record(entry(n));
        }

        assert_eq!(history.len(), HISTORY_LIMIT);
        // Newest entry first, oldest beyond the cap discarded
        assert_eq!(history.entries()[0], entry(HISTORY_LIMIT + 4));
        assert_eq!(history.entries()[HISTORY_LIMIT - 1], entry(5));
    }

    #[test]
    fn test_record_persists_synchronously() {
        let (mut history, cell) = memory_history();

        history.record(entry(7));

        let payload = cell.borrow().clone().expect("nothing persisted");
        let restored: Vec<HistoryEntry> = serde_json::from_str(&payload).unwrap();
        assert_eq!(restored, vec![entry(7)]);
    }

    #[test]
    fn test_load_round_trips_persisted_entries() {
        let (mut history, cell) = memory_history();
        history.record(entry(1));
        history.record(entry(2));

        let reloaded = History::load(Box::new(MemoryBackend(cell)));
        assert_eq!(reloaded.entries(), &[entry(2), entry(1)]);
    }

    #[test]
    fn test_corrupt_payload_loads_as_empty() {
        let cell = Rc::new(RefCell::new(Some("not json at all".to_string())));
        let history = History::load(Box::new(MemoryBackend(cell)));
        assert!(history.is_empty());
    }
}
