pub mod disk;
pub mod expenses;
pub mod memory;
pub mod settings;

use crate::core::config::AppConfig;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub use disk::DiskStore;
pub use expenses::ExpenseRepository;
pub use memory::MemoryStore;
pub use settings::SettingsRepository;

/// A flat string key-value store. Values are whole serialized documents;
/// the last write for a key wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Opens the on-disk store under the configured data directory.
pub fn open_store(config: &AppConfig) -> Result<Arc<dyn KeyValueStore>> {
    let path = config.default_data_path()?;
    Ok(Arc::new(DiskStore::open(&path)?))
}
