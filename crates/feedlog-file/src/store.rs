//! Filesystem storage for the file-backed gateway.
//!
//! All records live in a single pretty-printed JSON array. Every mutation
//! is a read-modify-write of that document, serialized across processes by
//! an advisory lock on a sibling `.lock` file and committed by renaming a
//! temporary file over the original.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, instrument, trace};

use feedlog_core::Result;
use feedlog_core::error::{Error, StorageError};
use feedlog_core::repo::{FeedingRecord, NewFeedingRecord};
use feedlog_core::types::RecordId;

fn map_lock(err: std::io::Error) -> Error {
    Error::Storage(StorageError::Lock {
        message: err.to_string(),
    })
}

/// Filesystem-backed storage for feeding records.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a new file store backed by the JSON document at `path`.
    ///
    /// Nothing is touched on disk until the first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling of the document named `<file name>.<suffix>`.
    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".");
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn lock_path(&self) -> PathBuf {
        self.sibling_path("lock")
    }

    fn temp_path(&self) -> PathBuf {
        self.sibling_path("tmp")
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn open_lock(&self) -> Result<File> {
        self.ensure_parent()?;
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())?;
        Ok(lock_file)
    }

    /// Run `f` while holding the exclusive document lock.
    fn with_exclusive_lock<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let lock_file = self.open_lock()?;
        lock_file.lock_exclusive().map_err(map_lock)?;
        trace!(path = %self.path.display(), "Acquired exclusive lock");

        let result = f();

        lock_file.unlock().map_err(map_lock)?;
        result
    }

    /// Read the document without locking. A missing or blank file is an
    /// empty collection.
    fn read_document(&self) -> Result<Vec<FeedingRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<FeedingRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }

    fn write_document(&self, records: &[FeedingRecord]) -> Result<()> {
        self.ensure_parent()?;

        let content = serde_json::to_string_pretty(records)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }

    /// List every record in document order.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn list(&self) -> Result<Vec<FeedingRecord>> {
        if !self.path.exists() {
            debug!("No record document yet");
            return Ok(Vec::new());
        }

        let lock_file = self.open_lock()?;
        lock_file.lock_shared().map_err(map_lock)?;
        let records = self.read_document();
        lock_file.unlock().map_err(map_lock)?;

        let records = records?;
        debug!(count = records.len(), "Listed records");
        Ok(records)
    }

    /// Append a new record, assigning it the next id.
    #[instrument(skip(self, candidate), fields(path = %self.path.display()))]
    pub fn create(&self, candidate: &NewFeedingRecord) -> Result<FeedingRecord> {
        self.with_exclusive_lock(|| {
            let mut records = self.read_document()?;

            let last = records.iter().map(|r| r.id).max().unwrap_or_default();
            let id = last
                .checked_next()
                .ok_or(StorageError::IdsExhausted { last: last.get() })?;

            let record = candidate.clone().into_record(id);
            records.push(record.clone());
            self.write_document(&records)?;

            debug!(id = %id, "Created record");
            Ok(record)
        })
    }

    /// Delete every record carrying `id`. Deleting an absent id succeeds.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn delete(&self, id: RecordId) -> Result<()> {
        self.with_exclusive_lock(|| {
            let mut records = self.read_document()?;
            let before = records.len();
            records.retain(|r| r.id != id);

            if records.len() == before {
                debug!(id = %id, "Record not present, nothing to delete");
                return Ok(());
            }

            self.write_document(&records)?;
            debug!(id = %id, "Deleted record");
            Ok(())
        })
    }
}
