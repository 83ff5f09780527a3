use std::sync::Arc;
use std::time::Duration;

use burrow_core::{Backend, Hash};
use burrow_storage::{RedisBackend, RedisConfig};
use burrow_test_infra::RedisServer;

/// Test fixture that owns a Redis container and a backend pointed at it.
struct RedisFixture {
    #[allow(dead_code)]
    redis: RedisServer,
    config: RedisConfig,
}

impl RedisFixture {
    async fn start() -> Self {
        let redis = RedisServer::new()
            .await
            .expect("Failed to start Redis container");
        let host = redis.host().await.expect("Failed to get Redis host");
        let port = redis.port().await.expect("Failed to get Redis port");

        // Wait a moment to ensure Redis is fully ready
        tokio::time::sleep(Duration::from_millis(500)).await;

        let config = RedisConfig::builder().host(host).port(port).build();
        Self { redis, config }
    }

    fn backend(&self) -> RedisBackend {
        RedisBackend::new(self.config.clone()).expect("Failed to create Redis backend")
    }
}

#[tokio::test]
async fn test_redis_backend_put_then_get() {
    let fixture = RedisFixture::start().await;
    let backend = fixture.backend();
    let hash = Hash::from("abc1234");

    assert!(backend.get(&hash).await.unwrap().is_none());

    let confirmed = backend
        .put(&hash, "https://aerabi.com".to_string())
        .await
        .unwrap();
    assert_eq!(confirmed, "https://aerabi.com");

    let stored = backend.get(&hash).await.unwrap();
    assert_eq!(stored.as_deref(), Some("https://aerabi.com"));
}

#[tokio::test]
async fn test_redis_backend_last_write_wins() {
    let fixture = RedisFixture::start().await;
    let backend = fixture.backend();
    let hash = Hash::from("dup0001");

    backend
        .put(&hash, "https://first.example".to_string())
        .await
        .unwrap();
    backend
        .put(&hash, "https://second.example".to_string())
        .await
        .unwrap();

    let stored = backend.get(&hash).await.unwrap();
    assert_eq!(stored.as_deref(), Some("https://second.example"));
}

#[tokio::test]
async fn test_redis_backend_values_are_plain_strings_without_ttl() {
    let fixture = RedisFixture::start().await;
    let backend = fixture.backend();
    backend
        .put(&Hash::from("plain01"), "https://example.com".to_string())
        .await
        .unwrap();

    let client = redis::Client::open(fixture.config.url()).unwrap();
    let mut conn = client.get_multiplexed_async_connection().await.unwrap();

    let raw: String = redis::cmd("GET")
        .arg("plain01")
        .query_async(&mut conn)
        .await
        .unwrap();
    assert_eq!(raw, "https://example.com");

    let ttl: i64 = redis::cmd("TTL")
        .arg("plain01")
        .query_async(&mut conn)
        .await
        .unwrap();
    assert_eq!(ttl, -1, "keys must not expire");
}

#[tokio::test]
async fn test_redis_backend_key_prefix() {
    let fixture = RedisFixture::start().await;
    let config = RedisConfig::builder()
        .host(fixture.config.host.clone())
        .port(fixture.config.port)
        .key_prefix("burrow:")
        .build();
    let prefixed = RedisBackend::new(config).unwrap();
    let plain = fixture.backend();

    prefixed
        .put(&Hash::from("pre0001"), "https://example.com".to_string())
        .await
        .unwrap();

    assert!(plain.get(&Hash::from("pre0001")).await.unwrap().is_none());
    assert_eq!(
        plain
            .get(&Hash::from("burrow:pre0001"))
            .await
            .unwrap()
            .as_deref(),
        Some("https://example.com")
    );
}

#[tokio::test]
async fn test_redis_backend_background_connect_and_close() {
    let fixture = RedisFixture::start().await;
    let backend = fixture.backend();

    backend.connect_in_background().await.unwrap();
    assert!(backend.is_connected());

    backend.close().await;
}

#[tokio::test]
async fn test_redis_backend_concurrent_writers_share_one_connection() {
    let fixture = RedisFixture::start().await;
    let backend = Arc::new(fixture.backend());
    let mut handles = vec![];

    for i in 0..20u32 {
        let backend = Arc::clone(&backend);
        handles.push(tokio::spawn(async move {
            let hash = Hash::new_unchecked(format!("conc{:03}", i));
            backend
                .put(&hash, format!("https://example{}.com", i))
                .await
                .unwrap();
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    for i in 0..20u32 {
        let hash = Hash::new_unchecked(format!("conc{:03}", i));
        assert_eq!(
            backend.get(&hash).await.unwrap(),
            Some(format!("https://example{}.com", i))
        );
    }
}
