//! Core types and traits for the Burrow URL shortener.
//!
//! This crate provides the types shared by the storage backends, the
//! shortening service and the HTTP gateway.

pub mod backend;
pub mod error;
pub mod hash;
pub mod shortener;

pub use backend::Backend;
pub use error::{Result, ShortenerError, StorageError};
pub use hash::Hash;
pub use shortener::Shortener;
