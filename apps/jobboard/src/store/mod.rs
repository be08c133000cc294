//! Local device storage behind an injected key/value interface.
//!
//! The store holds the two persisted records the engine shares with the
//! rest of the application: the user profile (`userProfile`) and the
//! applied-jobs list (`appliedJobs`). `FileStore` keeps them in a single
//! JSON file with one writer behind a mutex and broadcasts a
//! [`StoreEvent`] on every successful write so other components can
//! refresh their counts. Concurrent processes are last-write-wins.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use tokio::sync::broadcast;
use tracing::debug;

use crate::models::profile::UserProfile;

pub const PROFILE_KEY: &str = "userProfile";
pub const APPLIED_JOBS_KEY: &str = "appliedJobs";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted content that does not parse. Surfaced to the caller
    /// instead of crashing on a corrupt record.
    #[error("corrupt store content: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Fired after every successful write, carrying the written key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEvent {
    pub key: String,
}

/// The storage seam. Engine code only ever reads and writes string
/// values by key, so tests can substitute an in-memory map.
pub trait KvStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// The persisted user profile, if any. Malformed content is an
    /// error, not a crash.
    fn load_profile(&self) -> Result<Option<UserProfile>, StoreError> {
        match self.read(PROFILE_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.write(PROFILE_KEY, &serde_json::to_string(profile)?)
    }

    /// Ids of jobs this user has applied to.
    fn applied_jobs(&self) -> Result<Vec<i64>, StoreError> {
        match self.read(APPLIED_JOBS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn has_applied(&self, job_id: i64) -> Result<bool, StoreError> {
        Ok(self.applied_jobs()?.contains(&job_id))
    }

    /// Records an application. Idempotent: returns `false` when the id
    /// was already present and nothing was written.
    fn mark_applied(&self, job_id: i64) -> Result<bool, StoreError> {
        let mut applied = self.applied_jobs()?;
        if applied.contains(&job_id) {
            return Ok(false);
        }
        applied.push(job_id);
        self.write(APPLIED_JOBS_KEY, &serde_json::to_string(&applied)?)?;
        Ok(true)
    }
}

/// JSON-file-backed store: one flat object mapping keys to serialized
/// values. All writes go through the mutex and rewrite the file.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
    events: broadcast::Sender<StoreEvent>,
}

impl FileStore {
    /// Opens the store, creating an empty one if the file is missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };
        debug!(path = %path.display(), "store opened");
        let (events, _) = broadcast::channel(16);
        Ok(Self {
            path,
            entries: Mutex::new(entries),
            events,
        })
    }

    /// Subscribes to change notifications. Subscribers only see writes
    /// made after they subscribe.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        std::fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)?;
        // No subscribers is fine; the event is simply dropped.
        let _ = self.events.send(StoreEvent {
            key: key.to_string(),
        });
        Ok(())
    }
}
