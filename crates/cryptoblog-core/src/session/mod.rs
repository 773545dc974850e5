//! Session - feed loading and post submission over a `PostBackend`.
//!
//! One session lives for one page/terminal session. Nothing is persisted;
//! the backend is re-queried after every mutation.

mod state;
mod view;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::{ComposerPhase, Field, Post, ValidationErrors};
use crate::error::{BackendError, FailureKind};
use crate::ports::{DiagnosticSink, Failure, PostBackend};

use state::SharedState;

pub use state::{Activity, SessionState};
pub use view::{ComposerView, FeedView, FieldView, PostCard, View};

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Backend accepted the post and the feed was refetched.
    Submitted,
    /// A required field was empty; the backend was not called.
    Invalid(ValidationErrors),
    /// Backend rejected the post; the failure went to the diagnostic sink.
    Failed,
    /// Form hidden or a submission already in flight.
    Ignored,
}

pub struct Session {
    backend: Arc<dyn PostBackend>,
    diagnostics: Arc<dyn DiagnosticSink>,
    state: SharedState,
    initialized: AtomicBool,
}

impl Session {
    /// Create a session in its pre-mount state: loading, form hidden, no posts.
    pub fn new(backend: Arc<dyn PostBackend>, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            backend,
            diagnostics,
            state: SharedState::new(SessionState {
                activity: Activity::Loading,
                ..Default::default()
            }),
            initialized: AtomicBool::new(false),
        }
    }

    /// Reset to the mount state and run the initial fetch.
    ///
    /// Only the first call does anything.
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            tracing::warn!("Session already initialized, ignoring");
            return;
        }

        self.state.write(|state| {
            state.activity = Activity::Loading;
            state.composer.hide();
            state.posts.clear();
        });

        tracing::debug!("Session initialized, fetching feed");
        self.fetch_posts().await;
    }

    /// Replace the local feed with the backend's current collection.
    ///
    /// Failures are reported to the diagnostic sink and otherwise dropped;
    /// the previous feed stays on screen.
    pub async fn fetch_posts(&self) {
        let _busy = self.state.busy();

        match self.backend.list().await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "Feed fetched");
                self.state.write(|state| state.posts = posts);
            }
            Err(error) => self.report(FailureKind::Fetch, error),
        }
    }

    /// Show or hide the composer. Allowed while a request is in flight.
    pub fn toggle_form(&self) {
        self.state.write(|state| state.composer.toggle());
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.state.write(|state| state.composer.set(field, value));
    }

    /// Validate the composer and, if valid, append the post and refetch.
    pub async fn submit(&self) -> SubmitOutcome {
        let attempt = self.state.write(|state| match state.composer.phase() {
            ComposerPhase::Hidden | ComposerPhase::Submitting => None,
            ComposerPhase::Editing | ComposerPhase::Invalid => Some(state.composer.begin_submit()),
        });

        let draft = match attempt {
            None => return SubmitOutcome::Ignored,
            Some(Err(errors)) => {
                tracing::debug!(%errors, "Submit blocked by validation");
                return SubmitOutcome::Invalid(errors);
            }
            Some(Ok(draft)) => draft,
        };

        let _busy = self.state.busy();

        match self
            .backend
            .append(&draft.title, &draft.body, &draft.author)
            .await
        {
            Ok(()) => {
                tracing::info!(title = %draft.title, author = %draft.author, "Post submitted");
                self.state.write(|state| state.composer.complete_submit());
                self.fetch_posts().await;
                SubmitOutcome::Submitted
            }
            Err(error) => {
                self.state.write(|state| state.composer.abort_submit());
                self.report(FailureKind::Submit, error);
                SubmitOutcome::Failed
            }
        }
    }

    fn report(&self, kind: FailureKind, error: BackendError) {
        self.diagnostics.record(Failure { kind, error });
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.read(SessionState::clone)
    }

    pub fn view(&self) -> View {
        self.state.read(View::from_state)
    }

    pub fn is_loading(&self) -> bool {
        self.state.read(SessionState::is_loading)
    }

    pub fn form_visible(&self) -> bool {
        self.state.read(SessionState::form_visible)
    }

    pub fn posts(&self) -> Vec<Post> {
        self.state.read(|state| state.posts.clone())
    }

    pub fn field(&self, field: Field) -> String {
        self.state.read(|state| state.composer.value(field).to_string())
    }
}
