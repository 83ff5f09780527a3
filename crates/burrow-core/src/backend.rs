use crate::error::Result;
use crate::hash::Hash;
use async_trait::async_trait;
use std::sync::Arc;

/// A key-value store for hash to URL mappings.
///
/// This is the only storage capability the shortening service needs.
/// Implementations must be safe to call concurrently; the trait makes no
/// atomicity promise across a separate `get` and `put`.
#[async_trait]
pub trait Backend: Send + Sync + 'static {
    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// Returns the value as the store now holds it, so callers can confirm
    /// the write instead of trusting a local echo.
    async fn put(&self, key: &Hash, value: String) -> Result<String>;

    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing is stored for the key. Store failures are
    /// reported as errors, never as `None`.
    async fn get(&self, key: &Hash) -> Result<Option<String>>;
}

#[async_trait]
impl<B: Backend + ?Sized> Backend for Arc<B> {
    async fn put(&self, key: &Hash, value: String) -> Result<String> {
        (**self).put(key, value).await
    }

    async fn get(&self, key: &Hash) -> Result<Option<String>> {
        (**self).get(key).await
    }
}

#[async_trait]
impl<B: Backend + ?Sized> Backend for Box<B> {
    async fn put(&self, key: &Hash, value: String) -> Result<String> {
        (**self).put(key, value).await
    }

    async fn get(&self, key: &Hash) -> Result<Option<String>> {
        (**self).get(key).await
    }
}
