//! HTTP gateway for the Burrow URL shortener.
//!
//! Translates HTTP requests into [`Shortener`](burrow_core::Shortener) calls
//! and wires the configured storage backend at startup.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod storage;
pub mod telemetry;

pub use app::App;
pub use cli::Cli;
pub use state::AppState;
pub use storage::StorageBackend;
