use async_trait::async_trait;
use burrow_core::{Backend, Hash, Result};
use dashmap::DashMap;

/// In-memory implementation of the Backend trait using DashMap.
///
/// Nothing survives a restart. Reads and writes never suspend, so a `get`
/// issued after a completed `put` for the same key always sees it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    storage: DashMap<String, String>,
}

impl InMemoryBackend {
    /// Creates a new, empty in-memory backend.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory backend with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl Backend for InMemoryBackend {
    async fn put(&self, key: &Hash, value: String) -> Result<String> {
        // Last write wins.
        self.storage.insert(key.as_str().to_owned(), value.clone());
        Ok(value)
    }

    async fn get(&self, key: &Hash) -> Result<Option<String>> {
        Ok(self
            .storage
            .get(key.as_str())
            .map(|entry| entry.value().clone()))
    }
}
