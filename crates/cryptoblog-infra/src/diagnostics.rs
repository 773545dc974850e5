//! Diagnostic sinks for backend failures the session swallows.

use std::sync::{Mutex, PoisonError};

use cryptoblog_core::ports::{DiagnosticSink, Failure};

/// Writes every failure to the `tracing` error channel.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnosticSink;

impl DiagnosticSink for TracingDiagnosticSink {
    fn record(&self, failure: Failure) {
        tracing::error!(
            operation = %failure.kind,
            error = %failure.error,
            "Backend call failed"
        );
    }
}

/// Keeps failures in memory so they can be inspected later.
#[derive(Debug, Default)]
pub struct MemoryDiagnosticSink {
    failures: Mutex<Vec<Failure>>,
}

impl MemoryDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> Vec<Failure> {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DiagnosticSink for MemoryDiagnosticSink {
    fn record(&self, failure: Failure) {
        tracing::debug!(operation = %failure.kind, "Recording backend failure");
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(failure);
    }
}
