//! Ports - trait definitions for external collaborators.
//! The infrastructure crate provides the implementations.

mod backend;
mod diagnostics;

pub use backend::PostBackend;
pub use diagnostics::{DiagnosticSink, Failure};
