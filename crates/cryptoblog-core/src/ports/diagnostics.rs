use crate::error::{BackendError, FailureKind};

/// A backend failure the session caught and did not surface to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub error: BackendError,
}

/// Diagnostic channel for swallowed backend failures.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, failure: Failure);
}
