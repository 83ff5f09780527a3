use crate::error::ShortenerError;
use crate::hash::Hash;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Stores `url` under a freshly generated hash and returns that hash
    /// once the backend has confirmed the write.
    async fn shorten(&self, url: String) -> Result<Hash>;

    /// Resolves a hash to the URL stored for it.
    ///
    /// Returns `Err(ShortenerError::NotFound)` if no mapping exists.
    async fn retrieve(&self, hash: &Hash) -> Result<String>;
}
