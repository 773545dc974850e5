//! Middleware and error mapping.

pub mod error;
