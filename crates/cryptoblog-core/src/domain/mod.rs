//! Domain entities - the post record and the composer form.

mod composer;
mod post;

pub use composer::{Composer, ComposerPhase, Field, ValidationErrors};
pub use post::{NewPost, Post};
