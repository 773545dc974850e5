//! # Crypto Blog Core
//!
//! The client-side core of the Crypto Blog feed.
//! Holds the session state machine, composer validation and the ports the
//! infrastructure crate implements. No transport or storage lives here.

pub mod domain;
pub mod error;
pub mod ports;
pub mod session;

pub use error::{BackendError, FailureKind};
pub use session::{Activity, Session, SubmitOutcome};
