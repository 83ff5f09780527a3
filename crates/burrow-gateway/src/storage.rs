use std::sync::Arc;

use burrow_core::{Backend, Shortener, StorageError};
use burrow_generator::RandomGenerator;
use burrow_shortener::ShortenerService;
use burrow_storage::{InMemoryBackend, RedisBackend, RedisConfig};
use tracing::info;

use crate::cli::{Cli, StorageBackendArg};

/// The storage backend chosen at startup.
///
/// This is the only place that knows which backend is in use; the service
/// only ever sees a `dyn Backend`.
#[derive(Debug, Clone)]
pub enum StorageBackend {
    InMemory(Arc<InMemoryBackend>),
    Redis(RedisBackend),
}

impl StorageBackend {
    /// Builds the backend selected by `cli`.
    ///
    /// For Redis the connection is dialed in the background, so an
    /// unreachable server is logged rather than failing startup.
    pub fn from_cli(cli: &Cli) -> Result<Self, StorageError> {
        match cli.storage {
            StorageBackendArg::InMemory => Ok(Self::InMemory(Arc::new(InMemoryBackend::new()))),
            StorageBackendArg::Redis => {
                let config = RedisConfig::builder()
                    .host(cli.redis_host.clone())
                    .port(cli.redis_port)
                    .build();
                info!(url = %config.url(), "using redis storage");

                let backend = RedisBackend::new(config)?;
                backend.connect_in_background();
                Ok(Self::Redis(backend))
            }
        }
    }

    /// A handle to the backend for the shortening service.
    pub fn backend(&self) -> Box<dyn Backend> {
        match self {
            StorageBackend::InMemory(backend) => Box::new(Arc::clone(backend)),
            StorageBackend::Redis(backend) => Box::new(backend.clone()),
        }
    }

    pub fn shortener(&self, generator: RandomGenerator) -> Arc<dyn Shortener> {
        Arc::new(ShortenerService::new(self.backend(), generator))
    }

    /// Releases the backend's resources. Call once the server has stopped.
    pub async fn close(self) {
        match self {
            StorageBackend::InMemory(_) => {}
            StorageBackend::Redis(backend) => backend.close().await,
        }
    }
}
