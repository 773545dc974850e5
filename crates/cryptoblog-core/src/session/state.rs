//! Session state container and the busy flag guard.

use std::sync::{PoisonError, RwLock};

use crate::domain::{Composer, Post};

/// Busy flag shared by fetch and submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Idle,
    Loading,
}

/// Snapshot of everything the view reads.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Last collection returned by the backend, in backend order.
    pub posts: Vec<Post>,
    pub activity: Activity,
    pub composer: Composer,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        self.activity == Activity::Loading
    }

    pub fn form_visible(&self) -> bool {
        self.composer.is_visible()
    }
}

/// Single lock over the posts/busy/composer triple.
///
/// The lock is only taken inside synchronous closures, never across an
/// await, so overlapping backend completions serialise their writes.
#[derive(Debug, Default)]
pub(crate) struct SharedState {
    inner: RwLock<SessionState>,
}

impl SharedState {
    pub(crate) fn new(state: SessionState) -> Self {
        Self {
            inner: RwLock::new(state),
        }
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    /// Mark the session busy until the returned guard is dropped.
    pub(crate) fn busy(&self) -> BusyGuard<'_> {
        self.write(|state| state.activity = Activity::Loading);
        BusyGuard { state: self }
    }
}

/// Releases the busy flag on every exit path, including early returns,
/// errors and a dropped future.
///
/// The flag is advisory: releasing does not check whether another operation
/// is still in flight.
pub(crate) struct BusyGuard<'a> {
    state: &'a SharedState,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.state.write(|state| state.activity = Activity::Idle);
    }
}
