//! Storage backends for the Burrow URL shortener.
//!
//! Two interchangeable implementations of [`burrow_core::Backend`]:
//! [`InMemoryBackend`] for a single process, and [`RedisBackend`] for a
//! durable store shared across restarts.

pub mod memory;
pub mod redis;

pub use burrow_core::{Backend, StorageError};
pub use crate::memory::InMemoryBackend;
pub use crate::redis::{RedisBackend, RedisConfig};
