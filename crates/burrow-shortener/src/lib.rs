//! URL shortening service.
//!
//! Glues a [`Generator`](burrow_generator::Generator) and a
//! [`Backend`](burrow_core::Backend) into a [`Shortener`](burrow_core::Shortener).

pub mod service;

pub use burrow_core::{Shortener, ShortenerError};
pub use service::ShortenerService;
