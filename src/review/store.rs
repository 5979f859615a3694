//! Review log stores.
//!
//! A store is an append-only log of serialized review entries. It is handed
//! explicitly to whichever view reads or appends reviews.

use std::sync::{Arc, RwLock};

use super::error::ReviewStoreError;

/// Append-only log of serialized review entries.
pub trait ReviewStore {
    /// Append one serialized entry to the end of the log.
    fn append(&self, entry: String) -> Result<(), ReviewStoreError>;

    /// All entries, oldest first.
    fn entries(&self) -> Result<Vec<String>, ReviewStoreError>;

    fn len(&self) -> Result<usize, ReviewStoreError> {
        Ok(self.entries()?.len())
    }

    fn is_empty(&self) -> Result<bool, ReviewStoreError> {
        Ok(self.len()? == 0)
    }
}

/// In-memory review log.
///
/// Clone-friendly via Arc: every clone appends to and reads from the same log.
#[derive(Clone, Default)]
pub struct InMemoryReviewStore {
    entries: Arc<RwLock<Vec<String>>>,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing log, e.g. entries restored by the host.
    pub fn with_entries(entries: Vec<String>) -> Self {
        InMemoryReviewStore {
            entries: Arc::new(RwLock::new(entries)),
        }
    }
}

impl ReviewStore for InMemoryReviewStore {
    fn append(&self, entry: String) -> Result<(), ReviewStoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ReviewStoreError::LockPoisoned("append"))?;
        entries.push(entry);
        Ok(())
    }

    fn entries(&self) -> Result<Vec<String>, ReviewStoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| ReviewStoreError::LockPoisoned("read"))?;
        Ok(entries.clone())
    }

    fn len(&self) -> Result<usize, ReviewStoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| ReviewStoreError::LockPoisoned("read"))?;
        Ok(entries.len())
    }
}

impl<S: ReviewStore + ?Sized> ReviewStore for &S {
    fn append(&self, entry: String) -> Result<(), ReviewStoreError> {
        (**self).append(entry)
    }

    fn entries(&self) -> Result<Vec<String>, ReviewStoreError> {
        (**self).entries()
    }

    fn len(&self) -> Result<usize, ReviewStoreError> {
        (**self).len()
    }
}
