//! Detection history
//!
//! Newest-first list of recent detections, capped at `limit` and mirrored to
//! a JSON document on disk.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use thiserror::Error;

use crate::models::{DetectionResult, HistoryStats};

pub const DEFAULT_HISTORY_LIMIT: usize = 10;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("history encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub struct HistoryStore {
    entries: Mutex<Vec<DetectionResult>>,
    limit: usize,
    /// `None` keeps history in memory only
    path: Option<PathBuf>,
}

impl HistoryStore {
    pub fn in_memory(limit: usize) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            limit,
            path: None,
        }
    }

    /// Open the store backed by `path`.
    ///
    /// A missing file starts empty. An unreadable one is logged and ignored,
    /// the next write replaces it.
    pub fn open(path: impl Into<PathBuf>, limit: usize) -> Self {
        let path = path.into();

        let mut entries = match load_entries(&path) {
            Ok(entries) => entries,
            Err(HistoryError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!("Discarding unreadable history at {}: {}", path.display(), e);
                Vec::new()
            }
        };
        entries.truncate(limit);

        tracing::info!("Loaded {} history entries from {}", entries.len(), path.display());

        Self {
            entries: Mutex::new(entries),
            limit,
            path: Some(path),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Prepend a result, drop anything past the limit, persist.
    ///
    /// Memory is only updated once the document is written, so a failed
    /// write leaves the history as it was.
    pub fn record(&self, result: DetectionResult) -> Result<(), HistoryError> {
        // The lock is held across the write to keep file order equal to
        // record order. The document is at most `limit` entries.
        let mut entries = self.entries.lock();

        let mut next = Vec::with_capacity(self.limit);
        next.push(result);
        next.extend(entries.iter().take(self.limit.saturating_sub(1)).cloned());
        next.truncate(self.limit);

        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    /// Newest first, filtered by a free-text query
    pub fn list(&self, query: Option<&str>) -> Vec<DetectionResult> {
        let query = query.map(str::trim).unwrap_or("");
        self.entries
            .lock()
            .iter()
            .filter(|r| r.matches(query))
            .cloned()
            .collect()
    }

    /// Summary over the entries `list(query)` would return
    pub fn stats(&self, query: Option<&str>) -> HistoryStats {
        HistoryStats::from_entries(&self.list(query))
    }

    pub fn get(&self, id: &str) -> Option<DetectionResult> {
        self.entries.lock().iter().find(|r| r.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop the backing file, then every entry
    pub fn clear(&self) -> Result<(), HistoryError> {
        let mut entries = self.entries.lock();

        if let Some(path) = &self.path {
            match fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }

        entries.clear();
        Ok(())
    }

    fn persist(&self, entries: &[DetectionResult]) -> Result<(), HistoryError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Readers only ever see a complete document
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

fn load_entries(path: &Path) -> Result<Vec<DetectionResult>, HistoryError> {
    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Severity, Treatment, TreatmentKind};
    use std::sync::Arc;
    use tempfile::tempdir;

    fn result(id: &str, disease: &str, crop: &str) -> DetectionResult {
        DetectionResult {
            id: id.to_string(),
            timestamp: 1_700_000_000_000,
            image_ref: format!("blob:{}", id),
            disease: disease.to_string(),
            confidence: 0.92,
            severity: Severity::Moderate,
            affected_crop: crop.to_string(),
            description: "test".to_string(),
            symptoms: vec!["Yellowing".to_string()],
            treatments: vec![Treatment::new(TreatmentKind::Organic, "Neem oil", "Spray", "Weekly")],
            preventive_measures: vec![],
            yield_impact: "10%".to_string(),
        }
    }

    #[test]
    fn test_newest_first_and_capped() {
        let store = HistoryStore::in_memory(10);
        for i in 0..12 {
            store.record(result(&format!("d{}", i), "Early Blight", "Tomato")).unwrap();
        }

        let items = store.list(None);
        assert_eq!(items.len(), 10);
        assert_eq!(items[0].id, "d11");
        assert_eq!(items[9].id, "d2");
        assert!(store.get("d1").is_none());
    }

    #[test]
    fn test_search_filters() {
        let store = HistoryStore::in_memory(10);
        store.record(result("a", "Early Blight", "Potato")).unwrap();
        store.record(result("b", "Powdery Mildew", "Squash")).unwrap();

        assert_eq!(store.list(Some("")).len(), 2);
        assert_eq!(store.list(Some("  ")).len(), 2);

        let hits = store.list(Some("squash"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "b");

        assert_eq!(store.list(Some("neem")).len(), 2);
        assert!(store.list(Some("rust")).is_empty());
    }

    #[test]
    fn test_persists_and_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");

        let store = HistoryStore::open(&path, 10);
        assert!(store.is_empty());
        store.record(result("a", "Late Blight", "Tomato")).unwrap();
        store.record(result("b", "Bacterial Spot", "Pepper")).unwrap();

        let reopened = HistoryStore::open(&path, 10);
        let items = reopened.list(None);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "b");
        assert_eq!(items[1], store.get("a").unwrap());
    }

    #[test]
    fn test_reload_respects_smaller_limit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let store = HistoryStore::open(&path, 10);
        for i in 0..5 {
            store.record(result(&format!("d{}", i), "Early Blight", "Tomato")).unwrap();
        }

        let reopened = HistoryStore::open(&path, 3);
        assert_eq!(reopened.len(), 3);
        assert_eq!(reopened.list(None)[0].id, "d4");
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, b"{ not json").unwrap();

        let store = HistoryStore::open(&path, 10);
        assert!(store.is_empty());

        store.record(result("a", "Late Blight", "Tomato")).unwrap();
        assert_eq!(HistoryStore::open(&path, 10).len(), 1);
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let store = HistoryStore::open(&path, 10);
        store.record(result("a", "Late Blight", "Tomato")).unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(store.is_empty());
        assert!(!path.exists());

        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_failed_write_keeps_history_unchanged() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();

        let store = HistoryStore::open(blocker.join("history.json"), 10);
        assert!(store.is_empty());

        assert!(store.record(result("a", "Late Blight", "Tomato")).is_err());
        assert!(store.is_empty());
        assert!(store.get("a").is_none());
        assert!(store.list(None).is_empty());
    }

    #[test]
    fn test_failed_clear_keeps_history() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        let store = HistoryStore::open(sub.join("history.json"), 10);
        store.record(result("a", "Late Blight", "Tomato")).unwrap();

        // Replace the directory with a regular file so removal fails
        fs::remove_dir_all(&sub).unwrap();
        fs::write(&sub, b"not a directory").unwrap();

        assert!(store.clear().is_err());
        assert_eq!(store.len(), 1);
        assert!(store.get("a").is_some());
    }

    #[test]
    fn test_concurrent_records_all_persisted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        let store = Arc::new(HistoryStore::open(&path, 10));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store.record(result(&format!("d{}", i), "Early Blight", "Tomato")).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let in_memory: Vec<String> = store.list(None).into_iter().map(|r| r.id).collect();
        let on_disk: Vec<String> = HistoryStore::open(&path, 10).list(None).into_iter().map(|r| r.id).collect();
        assert_eq!(in_memory.len(), 8);
        assert_eq!(in_memory, on_disk);
    }

    #[test]
    fn test_stats_follow_query() {
        let store = HistoryStore::in_memory(10);
        store.record(result("a", "Early Blight", "Potato")).unwrap();
        store.record(result("b", "Powdery Mildew", "Squash")).unwrap();
        store.record(result("c", "Early Blight", "Tomato")).unwrap();

        let all = store.stats(None);
        assert_eq!(all.total, 3);
        assert_eq!(all.most_common.as_deref(), Some("Early Blight"));

        let squash = store.stats(Some("squash"));
        assert_eq!(squash.total, 1);
        assert_eq!(squash.most_common.as_deref(), Some("Powdery Mildew"));

        let none = store.stats(Some("rust"));
        assert_eq!(none.total, 0);
        assert_eq!(none.average_confidence, None);
    }
}
