//! # Crypto Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `cryptoblog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `redis` - Redis-backed post store
//! - `http` - HTTP client for a remote blog server

pub mod backend;
pub mod diagnostics;

// Re-exports - In-Memory
pub use backend::InMemoryPostBackend;
pub use diagnostics::{MemoryDiagnosticSink, TracingDiagnosticSink};

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use backend::{RedisBackendConfig, RedisPostBackend};

// Re-exports - HTTP
#[cfg(feature = "http")]
pub use backend::HttpPostBackend;
