use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::PersistError;

/// Durable storage for the serialized study list
pub trait StatePersistence: Send + Sync {
    /// Previously saved blob, if any. Read once at startup.
    fn load(&self) -> Option<String>;

    /// Overwrite the stored blob. Called after every mutation.
    fn save(&mut self, blob: &str) -> Result<(), PersistError>;
}

/// In-process storage. Clones share the same slot, so a caller can keep a
/// handle and observe what the session wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    blob: Arc<Mutex<Option<String>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Arc::new(Mutex::new(Some(blob.into()))),
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn blob(&self) -> Option<String> {
        self.blob.lock().ok().and_then(|blob| blob.clone())
    }

    /// Number of successful saves
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl StatePersistence for MemoryPersistence {
    fn load(&self) -> Option<String> {
        self.blob()
    }

    fn save(&mut self, blob: &str) -> Result<(), PersistError> {
        let mut slot = self
            .blob
            .lock()
            .map_err(|_| PersistError::Unavailable("memory slot poisoned".to_string()))?;
        *slot = Some(blob.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
