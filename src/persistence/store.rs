//! Append-only snapshot collection over a key-value slot

use crate::error::{Result, SnapshotError};
use crate::platform::KeyValueStore;
use crate::profile::Snapshot;

/// Ordered collection of snapshots stored under one key
///
/// Index in the collection is the only snapshot identifier. Every write
/// replaces the whole stored value; concurrent writers are last-writer-wins.
#[derive(Debug, Clone)]
pub struct SnapshotStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> SnapshotStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Read the whole collection
    ///
    /// An absent key reads as empty. A value that is not a snapshot array is
    /// `CorruptStore`.
    pub fn read_all(&self) -> Result<Vec<Snapshot>> {
        match self.storage.get(&self.key)? {
            None => Ok(Vec::new()),
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| SnapshotError::CorruptStore(e.to_string())),
        }
    }

    /// Snapshot at `index`, `None` when out of range
    pub fn get(&self, index: usize) -> Result<Option<Snapshot>> {
        Ok(self.read_all()?.into_iter().nth(index))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read_all()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Push a snapshot onto the end and write the collection back
    ///
    /// Nothing is written if the existing value is corrupt.
    pub fn append(&self, snapshot: Snapshot) -> Result<()> {
        let mut snapshots = self.read_all()?;
        snapshots.push(snapshot);
        let json = serde_json::to_string(&snapshots)?;
        self.storage.set(&self.key, &json)?;
        log::info!("Snapshot saved ({} total)", snapshots.len());
        Ok(())
    }

    /// Remove the stored collection entirely
    pub fn clear(&self) -> Result<()> {
        self.storage.remove(&self.key)?;
        log::info!("Saved snapshots cleared");
        Ok(())
    }
}
