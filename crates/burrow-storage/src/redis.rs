use async_trait::async_trait;
use burrow_core::{Backend, Hash, Result, StorageError};
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, trace, warn};
use typed_builder::TypedBuilder;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 6379;

/// Connection settings for [`RedisBackend`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct RedisConfig {
    #[builder(default = DEFAULT_HOST.to_string(), setter(into))]
    pub host: String,
    #[builder(default = DEFAULT_PORT)]
    pub port: u16,
    /// Prepended to every hash to form the Redis key. Empty by default, so
    /// keys are the bare hashes.
    #[builder(default, setter(into))]
    pub key_prefix: String,
}

impl RedisConfig {
    /// Connection URL for this host and port.
    pub fn url(&self) -> String {
        format!("redis://{}:{}/", self.host, self.port)
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A Redis-based implementation of [`Backend`].
///
/// URLs are stored as plain string values without an expiry. The backend
/// owns one multiplexed connection shared by every clone of it; the
/// connection is dialed lazily, either by [`RedisBackend::connect_in_background`]
/// at startup or by the first operation, and released by [`RedisBackend::close`].
#[derive(Debug, Clone)]
pub struct RedisBackend {
    client: redis::Client,
    conn: Arc<OnceCell<MultiplexedConnection>>,
    key_prefix: String,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StorageError {
    let message = format!("{operation}: {err}");
    if err.is_timeout() {
        StorageError::Timeout(message)
    } else if err.is_io_error() || err.is_connection_refusal() || err.is_connection_dropped() {
        StorageError::Unavailable(message)
    } else {
        StorageError::Operation(message)
    }
}

impl RedisBackend {
    /// Creates a backend for the given configuration without connecting.
    ///
    /// Fails only if the host and port do not form a valid Redis URL.
    pub fn new(config: RedisConfig) -> Result<Self> {
        let url = config.url();
        let client = redis::Client::open(url.as_str()).map_err(|e| {
            StorageError::Operation(format!("invalid redis url '{url}': {e}"))
        })?;

        Ok(Self {
            client,
            conn: Arc::new(OnceCell::new()),
            key_prefix: config.key_prefix,
        })
    }

    /// Dials Redis on a background task.
    ///
    /// A failed attempt is logged and otherwise ignored; the next operation
    /// will try to connect again.
    pub fn connect_in_background(&self) -> JoinHandle<()> {
        let backend = self.clone();
        tokio::spawn(async move {
            match backend.connection().await {
                Ok(_) => info!("connected to redis"),
                Err(e) => error!(error = %e, "failed to connect to redis"),
            }
        })
    }

    /// Whether the shared connection has been established.
    pub fn is_connected(&self) -> bool {
        self.conn.initialized()
    }

    /// Releases the shared connection.
    ///
    /// The socket is closed once the last clone of this backend is dropped.
    pub async fn close(self) {
        match Arc::try_unwrap(self.conn) {
            Ok(cell) => {
                if cell.into_inner().is_some() {
                    info!("closed redis connection");
                }
            }
            Err(_) => {
                warn!("redis connection is still shared, it will close with its last user");
            }
        }
    }

    async fn connection(&self) -> Result<MultiplexedConnection> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                debug!("opening redis connection");
                self.client
                    .get_multiplexed_async_connection()
                    .await
                    .map_err(|e| map_redis_error("failed to connect to redis", e))
            })
            .await?;
        Ok(conn.clone())
    }

    fn key(&self, hash: &Hash) -> String {
        format!("{}{}", self.key_prefix, hash.as_str())
    }
}

#[async_trait]
impl Backend for RedisBackend {
    async fn put(&self, key: &Hash, value: String) -> Result<String> {
        let redis_key = self.key(key);
        trace!(hash = %key, "writing mapping to redis");

        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(&redis_key, value)
            .await
            .map_err(|e| {
                warn!(hash = %key, error = %e, "redis SET failed");
                map_redis_error("failed to write value to redis", e)
            })?;

        // Read back so the caller gets what the store holds.
        let confirmed = conn
            .get::<_, Option<String>>(&redis_key)
            .await
            .map_err(|e| {
                warn!(hash = %key, error = %e, "redis GET after SET failed");
                map_redis_error("failed to read back value from redis", e)
            })?;

        match confirmed {
            Some(value) => {
                debug!(hash = %key, "stored mapping in redis");
                Ok(value)
            }
            None => Err(StorageError::InvalidData(format!(
                "key '{redis_key}' missing right after it was written"
            ))),
        }
    }

    async fn get(&self, key: &Hash) -> Result<Option<String>> {
        let redis_key = self.key(key);
        trace!(hash = %key, "reading mapping from redis");

        let mut conn = self.connection().await?;
        conn.get::<_, Option<String>>(&redis_key)
            .await
            .map_err(|e| {
                warn!(hash = %key, error = %e, "redis GET failed");
                map_redis_error("failed to fetch value from redis", e)
            })
    }
}
