use crate::store::KeyValueStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

const PARTITION: &str = "app";

/// Persistent store using a fjall keyspace. Every write is synced to disk
/// before returning.
pub struct DiskStore {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create data directory: {}", path.display()))?;

        let keyspace = Config::new(path.join("store"))
            .open()
            .with_context(|| format!("Failed to open store at {}", path.display()))?;
        let partition = keyspace
            .open_partition(PARTITION, PartitionCreateOptions::default())
            .context("Failed to open store partition")?;
        debug!("Opened disk store at {}", path.display());

        Ok(Self {
            keyspace,
            partition,
        })
    }
}

#[async_trait]
impl KeyValueStore for DiskStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .partition
            .get(key.as_bytes())
            .with_context(|| format!("Failed to read key {key}"))?;
        debug!("Store GET {key}: {}", if value.is_some() { "hit" } else { "miss" });
        value
            .map(|bytes| String::from_utf8(bytes.to_vec()).context("Stored value is not UTF-8"))
            .transpose()
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.partition
            .insert(key.as_bytes(), value.as_bytes())
            .with_context(|| format!("Failed to write key {key}"))?;
        self.keyspace
            .persist(PersistMode::SyncAll)
            .context("Failed to persist store")?;
        debug!("Store SET {key}");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.partition
            .remove(key.as_bytes())
            .with_context(|| format!("Failed to remove key {key}"))?;
        self.keyspace
            .persist(PersistMode::SyncAll)
            .context("Failed to persist store")?;
        debug!("Store REMOVE {key}");
        Ok(())
    }
}
