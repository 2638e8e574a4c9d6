//! sled-backed store. Shared state lives in one tree, each bilateral partition in its own.
use super::{Entry, LedgerStore};
use crate::config::Config;
use crate::error::{Error, Result};

const SHARED_TREE: &str = "shared";
const PARTITION_TREE_PREFIX: &str = "partition:";

pub struct SledStore {
    db: sled::Db,
    shared: sled::Tree,
}

impl SledStore {
    /// Open or create the database described by `config`
    pub fn open(config: &Config) -> Result<Self> {
        let db = sled::Config::new()
            .path(&config.data_dir)
            .cache_capacity(config.store.cache_capacity_bytes)
            .flush_every_ms(config.store.flush_every_ms)
            .temporary(config.store.temporary)
            .open()?;

        tracing::info!(path = ?config.data_dir, "opened sled store");

        Self::from_db(db)
    }

    pub fn from_db(db: sled::Db) -> Result<Self> {
        let shared = db.open_tree(SHARED_TREE)?;
        Ok(Self { db, shared })
    }

    /// Block until pending writes are durable
    pub fn flush(&self) -> Result<usize> {
        Ok(self.db.flush()?)
    }

    fn tree_name(partition: &str) -> String {
        format!("{PARTITION_TREE_PREFIX}{partition}")
    }

    /// Open the partition's tree, creating it on first write
    fn partition_tree(&self, partition: &str) -> Result<sled::Tree> {
        Ok(self.db.open_tree(Self::tree_name(partition))?)
    }

    /// The partition's tree if anything was ever written to it. Reads never create trees.
    fn existing_partition_tree(&self, partition: &str) -> Result<Option<sled::Tree>> {
        let name = Self::tree_name(partition);
        let exists = self
            .db
            .tree_names()
            .iter()
            .any(|tree| &**tree == name.as_bytes());
        if !exists {
            return Ok(None);
        }
        Ok(Some(self.db.open_tree(name)?))
    }
}

fn collect(iter: sled::Iter) -> Result<Vec<Entry>> {
    iter.map(|item| {
        let (key, value) = item?;
        let key = String::from_utf8(key.to_vec())
            .map_err(|err| Error::Store(format!("non utf-8 key in store: {err}")))?;
        Ok((key, value.to_vec()))
    })
    .collect()
}

fn range(tree: &sled::Tree, start: &str, end: &str) -> Result<Vec<Entry>> {
    if end.is_empty() {
        return collect(tree.range(start.as_bytes()..));
    }
    if start >= end {
        return Ok(Vec::new());
    }
    collect(tree.range(start.as_bytes()..end.as_bytes()))
}

impl LedgerStore for SledStore {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.shared.get(key)?.map(|value| value.to_vec()))
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.shared.insert(key, value)?;
        Ok(())
    }

    fn get_scoped(&self, partition: &str, key: &str) -> Result<Option<Vec<u8>>> {
        let Some(tree) = self.existing_partition_tree(partition)? else {
            return Ok(None);
        };
        Ok(tree.get(key)?.map(|value| value.to_vec()))
    }

    fn put_scoped(&self, partition: &str, key: &str, value: Vec<u8>) -> Result<()> {
        let tree = self.partition_tree(partition)?;
        tree.insert(key, value)?;
        Ok(())
    }

    fn scan_range(&self, start: &str, end: &str) -> Result<Vec<Entry>> {
        range(&self.shared, start, end)
    }

    fn scan_range_scoped(&self, partition: &str, start: &str, end: &str) -> Result<Vec<Entry>> {
        let Some(tree) = self.existing_partition_tree(partition)? else {
            return Ok(Vec::new());
        };
        range(&tree, start, end)
    }
}
