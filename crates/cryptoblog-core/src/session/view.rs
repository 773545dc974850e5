//! Render model derived from a session snapshot.
//!
//! Front ends draw a `View`; they never read the session fields directly.

use crate::domain::{ComposerPhase, Field, Post};

use super::state::SessionState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Label of the form toggle control.
    pub toggle_label: &'static str,
    /// Present only while the form is visible.
    pub composer: Option<ComposerView>,
    pub feed: FeedView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerView {
    pub phase: ComposerPhase,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedView {
    /// A single indeterminate progress indicator in place of the feed.
    Loading,
    /// One card per post, in backend order. Empty means no cards at all.
    Posts(Vec<PostCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub key: u64,
    pub title: String,
    pub body: String,
    pub byline: String,
}

impl From<&Post> for PostCard {
    fn from(post: &Post) -> Self {
        Self {
            key: post.id,
            title: post.title.clone(),
            body: post.body.clone(),
            byline: format!("By {} | {}", post.author, post.created_at_local()),
        }
    }
}

impl View {
    pub fn from_state(state: &SessionState) -> Self {
        let composer = state.composer.is_visible().then(|| ComposerView {
            phase: state.composer.phase(),
            fields: Field::ALL
                .into_iter()
                .map(|field| FieldView {
                    field,
                    label: field.label(),
                    value: state.composer.value(field).to_string(),
                    error: state.composer.error_for(field),
                })
                .collect(),
        });

        let feed = if state.is_loading() {
            FeedView::Loading
        } else {
            FeedView::Posts(state.posts.iter().map(PostCard::from).collect())
        };

        Self {
            toggle_label: state.composer.toggle_label(),
            composer,
            feed,
        }
    }

    pub fn cards(&self) -> &[PostCard] {
        match &self.feed {
            FeedView::Posts(cards) => cards,
            FeedView::Loading => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewPost;
    use crate::session::Activity;

    fn state_with_posts() -> SessionState {
        SessionState {
            posts: vec![
                NewPost::new("First", "one", "ann").into_post(1, 0),
                NewPost::new("Second", "two", "bob").into_post(2, 0),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_loading_hides_feed() {
        let mut state = state_with_posts();
        state.activity = Activity::Loading;

        let view = View::from_state(&state);
        assert_eq!(view.feed, FeedView::Loading);
        assert!(view.cards().is_empty());
    }

    #[test]
    fn test_cards_follow_collection_order() {
        let view = View::from_state(&state_with_posts());
        let titles: Vec<_> = view.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
        assert!(view.cards()[1].byline.starts_with("By bob | "));
    }

    #[test]
    fn test_empty_collection_renders_no_cards() {
        let view = View::from_state(&SessionState::default());
        assert_eq!(view.feed, FeedView::Posts(Vec::new()));
    }

    #[test]
    fn test_composer_only_when_visible() {
        let mut state = SessionState::default();
        let view = View::from_state(&state);
        assert!(view.composer.is_none());
        assert_eq!(view.toggle_label, "New Post");

        state.composer.toggle();
        state.composer.begin_submit().unwrap_err();
        let view = View::from_state(&state);
        let composer = view.composer.unwrap();
        assert_eq!(view.toggle_label, "Cancel");
        assert_eq!(composer.phase, ComposerPhase::Invalid);
        assert_eq!(composer.fields[0].error, Some("Title is required"));
    }
}
