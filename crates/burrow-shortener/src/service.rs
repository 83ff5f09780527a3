use async_trait::async_trait;
use burrow_core::{Backend, Hash, Shortener, ShortenerError};
use burrow_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace, warn};

pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Backend` and a `Generator`. It keeps no mappings of
/// its own; every call goes through the shared backend.
///
/// Before writing, a generated hash is looked up and regenerated if it is
/// already taken, up to `max_attempts` times. The lookup and the write are
/// separate backend calls, so two concurrent `shorten` calls that draw the
/// same hash can still overwrite each other.
#[derive(Debug)]
pub struct ShortenerService<B, G> {
    backend: Arc<B>,
    generator: Arc<G>,
    max_attempts: usize,
}

impl<B, G> Clone for ShortenerService<B, G> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            generator: Arc::clone(&self.generator),
            max_attempts: self.max_attempts,
        }
    }
}

impl<B: Backend, G: Generator> ShortenerService<B, G> {
    pub fn new(backend: B, generator: G) -> Self {
        Self {
            backend: Arc::new(backend),
            generator: Arc::new(generator),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets how many hashes are drawn before giving up on a collision.
    /// Values below 1 are treated as 1.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Draws hashes until one is not in the backend.
    async fn free_hash(&self) -> Result<Hash, ShortenerError> {
        for attempt in 1..=self.max_attempts {
            let hash: Hash = self.generator.generate().into();
            if self.backend.get(&hash).await?.is_none() {
                return Ok(hash);
            }
            warn!(hash = %hash, attempt, "generated hash is already taken");
        }
        Err(ShortenerError::HashSpaceExhausted(self.max_attempts))
    }
}

#[async_trait]
impl<B: Backend, G: Generator> Shortener for ShortenerService<B, G> {
    async fn shorten(&self, url: String) -> Result<Hash, ShortenerError> {
        let hash = self.free_hash().await?;
        trace!(hash = %hash, "storing mapping");

        let stored = self.backend.put(&hash, url).await?;
        trace!(hash = %hash, len = stored.len(), "backend confirmed mapping");

        debug!(hash = %hash, "shortened url");
        Ok(hash)
    }

    async fn retrieve(&self, hash: &Hash) -> Result<String, ShortenerError> {
        trace!(hash = %hash, "resolving hash");

        match self.backend.get(hash).await? {
            Some(url) => {
                debug!(hash = %hash, url = %url, "resolved hash");
                Ok(url)
            }
            None => {
                trace!(hash = %hash, "hash not found");
                Err(ShortenerError::NotFound(hash.to_string()))
            }
        }
    }
}
