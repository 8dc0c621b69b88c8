//! Durable record store.
//!
//! Owns the authoritative in-memory collection and its mirror in the state
//! file. Every mutation computes the next collection and commits it
//! wholesale; readers observe either the old snapshot or the new one, never
//! an intermediate state. The store performs no remote side effects.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WardbookError};
use crate::paths;
use crate::types::UserRecord;

/// The authoritative local collection and its durable mirror
#[derive(Debug)]
pub struct RecordStore {
    users_path: PathBuf,
    total_pages_path: PathBuf,
    records: Vec<UserRecord>,
}

impl RecordStore {
    /// Open the store at the default state location.
    pub fn open() -> Self {
        Self::open_at(paths::users_file(), paths::total_pages_file())
    }

    /// Open the store at explicit paths, loading the persisted collection.
    ///
    /// A missing state file yields an empty collection. So does a corrupt
    /// one: malformed JSON is logged and treated as "no stored records"
    /// rather than surfaced as an error.
    pub fn open_at(users_path: PathBuf, total_pages_path: PathBuf) -> Self {
        let records = match fs::read_to_string(&users_path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(
                        "Discarding corrupt state file {}: {e}",
                        users_path.display()
                    );
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        Self {
            users_path,
            total_pages_path,
            records,
        }
    }

    /// Current snapshot of the collection.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn get(&self, id: i64) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// Replace the collection and persist it.
    ///
    /// The state file is written first (atomically, temp file + rename); the
    /// in-memory snapshot only changes once the write succeeded, so a failed
    /// commit leaves both copies on the old state.
    pub fn commit(&mut self, records: Vec<UserRecord>) -> Result<()> {
        let content = serde_json::to_string_pretty(&records)?;
        write_atomic(&self.users_path, content.as_bytes())?;
        self.records = records;
        Ok(())
    }

    /// Append a record. The id must not already be present.
    pub fn add(&mut self, record: UserRecord) -> Result<()> {
        if self.contains(record.id) {
            return Err(WardbookError::DuplicateId(record.id));
        }
        let mut next = self.records.clone();
        next.push(record);
        self.commit(next)
    }

    /// Replace the record with the given id.
    pub fn update(&mut self, id: i64, record: UserRecord) -> Result<()> {
        if !self.contains(id) {
            return Err(WardbookError::RecordNotFound(id));
        }
        let next = self
            .records
            .iter()
            .map(|existing| {
                if existing.id == id {
                    record.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        self.commit(next)
    }

    /// Remove the record with the given id.
    pub fn remove(&mut self, id: i64) -> Result<()> {
        if !self.contains(id) {
            return Err(WardbookError::RecordNotFound(id));
        }
        let next = self
            .records
            .iter()
            .filter(|r| r.id != id)
            .cloned()
            .collect();
        self.commit(next)
    }

    /// Last-known remote page count, if one was stored.
    pub fn load_total_pages(&self) -> Option<u32> {
        let content = fs::read_to_string(&self.total_pages_path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Persist the last-known remote page count.
    pub fn store_total_pages(&self, total_pages: u32) -> Result<()> {
        write_atomic(
            &self.total_pages_path,
            serde_json::to_string(&total_pages)?.as_bytes(),
        )
    }
}

/// Write a state file atomically: temp file in the same directory, then
/// rename over the target.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            WardbookError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to create state directory {}: {}",
                    parent.display(),
                    e
                ),
            ))
        })?;
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes).map_err(|e| {
        WardbookError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to write state file {}: {}", tmp.display(), e),
        ))
    })?;
    fs::rename(&tmp, path).map_err(|e| {
        WardbookError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to replace state file {}: {}", path.display(), e),
        ))
    })?;
    Ok(())
}
