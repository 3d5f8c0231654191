//! History store: the last ten analyses, newest first
//!
//! The store is read once at startup through a [`HistoryBackend`] and written
//! back in full after every change. Corrupt or missing data yields an empty
//! history; write failures are logged and never undo the in-memory change.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local};
use mailtriage_core::prelude::*;
use mailtriage_core::{AnalysisResult, HistoryEntry, HISTORY_LIMIT};

/// File name of the persisted history
pub const HISTORY_FILENAME: &str = "email_history.json";

/// Durable storage for the serialized history (a JSON array)
#[cfg_attr(test, mockall::automock)]
pub trait HistoryBackend: Send {
    /// Stored document, or `None` if nothing was saved yet
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored document
    fn save(&mut self, data: &str) -> Result<()>;
}

/// JSON file on disk, replaced atomically on save
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryBackend for FileBackend {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn save(&mut self, data: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, data)
            .map_err(|e| Error::storage(format!("Failed to write {}: {}", tmp.display(), e)))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            Error::storage(format!("Failed to replace {}: {}", self.path.display(), e))
        })
    }
}

/// In-memory backend; clones share the same slot
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `data` already stored
    pub fn with_data(data: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(data.into()))),
        }
    }

    /// What was last saved
    pub fn contents(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl HistoryBackend for MemoryBackend {
    fn load(&self) -> Result<Option<String>> {
        self.slot
            .lock()
            .map(|slot| slot.clone())
            .map_err(|_| Error::storage("history slot poisoned"))
    }

    fn save(&mut self, data: &str) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| Error::storage("history slot poisoned"))?;
        *slot = Some(data.to_string());
        Ok(())
    }
}

pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    backend: Box<dyn HistoryBackend>,
}

impl fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryStore")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl HistoryStore {
    /// Read the stored history once
    pub fn load(backend: Box<dyn HistoryBackend>) -> Self {
        let entries = match backend.load() {
            Ok(Some(data)) => parse_entries(&data),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("History unavailable, starting empty: {}", e);
                Vec::new()
            }
        };
        debug!("Loaded {} history entries", entries.len());
        Self { entries, backend }
    }

    /// Empty store backed by a fresh [`MemoryBackend`]
    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryBackend::new()))
    }

    /// Record a result with the current time
    pub fn record(&mut self, result: &AnalysisResult) -> &HistoryEntry {
        self.record_at(result, Local::now())
    }

    /// Record a result as created at `now`
    ///
    /// The id is `now` in milliseconds, bumped past the newest id when the
    /// clock did not advance.
    pub fn record_at(&mut self, result: &AnalysisResult, now: DateTime<Local>) -> &HistoryEntry {
        let id = next_id(&self.entries, now.timestamp_millis());
        self.entries.insert(0, HistoryEntry::from_result(result, id, now));
        self.entries.truncate(HISTORY_LIMIT);
        self.persist();

        &self.entries[0]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, id: i64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Newest entry
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    fn persist(&mut self) {
        let data = match serde_json::to_string(&self.entries) {
            Ok(data) => data,
            Err(e) => {
                error!("Failed to serialize history: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.save(&data) {
            error!("Failed to persist history: {}", e);
        }
    }
}

/// Pick an id no stored entry uses
///
/// Stored ids are not trusted: when the newest one cannot be bumped, the
/// clock value (or the closest free id below it) is used instead.
fn next_id(entries: &[HistoryEntry], clock: i64) -> i64 {
    let taken = |id: i64| entries.iter().any(|e| e.id == id);
    let preferred = match entries.first() {
        Some(newest) if clock <= newest.id => newest.id.checked_add(1),
        _ => Some(clock),
    };

    preferred
        .filter(|id| !taken(*id))
        .or_else(|| {
            std::iter::successors(Some(clock), |id| id.checked_sub(1)).find(|id| !taken(*id))
        })
        .unwrap_or(clock)
}

fn parse_entries(data: &str) -> Vec<HistoryEntry> {
    if data.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<HistoryEntry>>(data) {
        Ok(mut entries) => {
            if entries.len() > HISTORY_LIMIT {
                warn!(
                    "History holds {} entries, keeping the newest {}",
                    entries.len(),
                    HISTORY_LIMIT
                );
                entries.truncate(HISTORY_LIMIT);
            }
            entries
        }
        Err(e) => {
            warn!("Ignoring corrupt history: {}", e);
            Vec::new()
        }
    }
}
