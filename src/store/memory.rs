use super::{Entry, LedgerStore};
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::sync::RwLock;

type KeySpace = BTreeMap<String, Vec<u8>>;

/// In-memory store for tests and local runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    shared: RwLock<KeySpace>,
    partitions: RwLock<HashMap<String, KeySpace>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of partitions that have received at least one write
    pub fn partitions(&self) -> Result<Vec<String>> {
        let partitions = self.partitions.read().map_err(|_| poisoned())?;
        let mut names: Vec<String> = partitions.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

fn poisoned() -> Error {
    Error::Store("memory store lock poisoned".to_string())
}

fn range(space: &KeySpace, start: &str, end: &str) -> Vec<Entry> {
    let upper = if end.is_empty() {
        Bound::Unbounded
    } else if start >= end {
        return Vec::new();
    } else {
        Bound::Excluded(end)
    };
    space
        .range::<str, _>((Bound::Included(start), upper))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

impl LedgerStore for MemoryStore {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let shared = self.shared.read().map_err(|_| poisoned())?;
        Ok(shared.get(key).cloned())
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let mut shared = self.shared.write().map_err(|_| poisoned())?;
        shared.insert(key.to_string(), value);
        Ok(())
    }

    fn get_scoped(&self, partition: &str, key: &str) -> Result<Option<Vec<u8>>> {
        let partitions = self.partitions.read().map_err(|_| poisoned())?;
        Ok(partitions
            .get(partition)
            .and_then(|space| space.get(key))
            .cloned())
    }

    fn put_scoped(&self, partition: &str, key: &str, value: Vec<u8>) -> Result<()> {
        let mut partitions = self.partitions.write().map_err(|_| poisoned())?;
        partitions
            .entry(partition.to_string())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    fn scan_range(&self, start: &str, end: &str) -> Result<Vec<Entry>> {
        let shared = self.shared.read().map_err(|_| poisoned())?;
        Ok(range(&shared, start, end))
    }

    fn scan_range_scoped(&self, partition: &str, start: &str, end: &str) -> Result<Vec<Entry>> {
        let partitions = self.partitions.read().map_err(|_| poisoned())?;
        Ok(partitions
            .get(partition)
            .map(|space| range(space, start, end))
            .unwrap_or_default())
    }
}
