//! Post backends - in-memory, Redis and remote HTTP.

mod memory;

#[cfg(feature = "redis")]
mod redis;

#[cfg(feature = "http")]
mod http;

pub use memory::InMemoryPostBackend;

#[cfg(feature = "redis")]
pub use self::redis::{RedisBackendConfig, RedisPostBackend};

#[cfg(feature = "http")]
pub use http::HttpPostBackend;

/// Current instant in nanoseconds since the Unix epoch.
pub(crate) fn now_nanos() -> i64 {
    chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or(i64::MAX)
}
