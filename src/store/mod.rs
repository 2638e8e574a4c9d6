//! Host store contract.
//!
//! The record layer keeps no state of its own; every read and write goes through
//! a [`LedgerStore`]. Shared state is visible to all participants, scoped state
//! lives in a named bilateral partition.
use crate::error::Result;
use crate::partition::Partition;
use std::fmt;

pub mod memory;
pub mod sled_store;

pub use memory::MemoryStore;
pub use sled_store::SledStore;

pub type Entry = (String, Vec<u8>);

pub trait LedgerStore: Send + Sync {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<()>;

    fn get_scoped(&self, partition: &str, key: &str) -> Result<Option<Vec<u8>>>;
    fn put_scoped(&self, partition: &str, key: &str, value: Vec<u8>) -> Result<()>;

    /// Entries with `start <= key < end` in key order. An empty `end` is unbounded.
    fn scan_range(&self, start: &str, end: &str) -> Result<Vec<Entry>>;
    fn scan_range_scoped(&self, partition: &str, start: &str, end: &str) -> Result<Vec<Entry>>;
}

/// Where a record lives
#[derive(Debug, Clone, Copy)]
pub enum Scope<'a> {
    Shared,
    Partition(&'a Partition),
}

impl Scope<'_> {
    pub fn get<S: LedgerStore + ?Sized>(&self, store: &S, key: &str) -> Result<Option<Vec<u8>>> {
        match self {
            Scope::Shared => store.get_state(key),
            Scope::Partition(partition) => store.get_scoped(partition.as_str(), key),
        }
    }

    pub fn put<S: LedgerStore + ?Sized>(&self, store: &S, key: &str, value: Vec<u8>) -> Result<()> {
        match self {
            Scope::Shared => store.put_state(key, value),
            Scope::Partition(partition) => store.put_scoped(partition.as_str(), key, value),
        }
    }

    pub fn scan<S: LedgerStore + ?Sized>(&self, store: &S, start: &str, end: &str) -> Result<Vec<Entry>> {
        match self {
            Scope::Shared => store.scan_range(start, end),
            Scope::Partition(partition) => store.scan_range_scoped(partition.as_str(), start, end),
        }
    }
}

impl fmt::Display for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Shared => f.write_str("shared"),
            Scope::Partition(partition) => write!(f, "{partition}"),
        }
    }
}

impl<T: LedgerStore + ?Sized> LedgerStore for std::sync::Arc<T> {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get_state(key)
    }
    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<()> {
        (**self).put_state(key, value)
    }
    fn get_scoped(&self, partition: &str, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get_scoped(partition, key)
    }
    fn put_scoped(&self, partition: &str, key: &str, value: Vec<u8>) -> Result<()> {
        (**self).put_scoped(partition, key, value)
    }
    fn scan_range(&self, start: &str, end: &str) -> Result<Vec<Entry>> {
        (**self).scan_range(start, end)
    }
    fn scan_range_scoped(&self, partition: &str, start: &str, end: &str) -> Result<Vec<Entry>> {
        (**self).scan_range_scoped(partition, start, end)
    }
}
