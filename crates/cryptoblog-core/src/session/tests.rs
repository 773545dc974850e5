use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use super::*;
use crate::domain::NewPost;

/// Backend over a plain vector, with switchable failures and call counters.
#[derive(Default)]
struct FakeBackend {
    posts: Mutex<Vec<Post>>,
    next_id: AtomicU64,
    list_calls: AtomicUsize,
    append_calls: AtomicUsize,
    fail_list: AtomicBool,
    fail_append: AtomicBool,
}

impl FakeBackend {
    fn with_posts(posts: Vec<Post>) -> Self {
        let backend = Self::default();
        backend
            .next_id
            .store(posts.len() as u64, Ordering::SeqCst);
        *backend.posts.lock().unwrap() = posts;
        backend
    }

    fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn append_calls(&self) -> usize {
        self.append_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostBackend for FakeBackend {
    async fn list(&self) -> Result<Vec<Post>, BackendError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(BackendError::Unreachable("connection refused".to_string()));
        }
        Ok(self.posts.lock().unwrap().clone())
    }

    async fn append(&self, title: &str, body: &str, author: &str) -> Result<(), BackendError> {
        self.append_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_append.load(Ordering::SeqCst) {
            return Err(BackendError::Rejected("canister trapped".to_string()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let post = NewPost::new(title, body, author).into_post(id, 1_000 + id as i64);
        self.posts.lock().unwrap().push(post);
        Ok(())
    }
}

/// Backend whose `list` calls block until their gate is opened.
struct GatedBackend {
    responses: Mutex<VecDeque<(Arc<Notify>, Vec<Post>)>>,
}

#[async_trait]
impl PostBackend for GatedBackend {
    async fn list(&self) -> Result<Vec<Post>, BackendError> {
        let (gate, posts) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected list call");
        gate.notified().await;
        Ok(posts)
    }

    async fn append(&self, _: &str, _: &str, _: &str) -> Result<(), BackendError> {
        Ok(())
    }
}

/// Backend whose `append` waits for `gate` before storing the post.
struct HeldAppendBackend {
    inner: FakeBackend,
    gate: Arc<Notify>,
}

#[async_trait]
impl PostBackend for HeldAppendBackend {
    async fn list(&self) -> Result<Vec<Post>, BackendError> {
        self.inner.list().await
    }

    async fn append(&self, title: &str, body: &str, author: &str) -> Result<(), BackendError> {
        self.gate.notified().await;
        self.inner.append(title, body, author).await
    }
}

#[derive(Default)]
struct RecordingSink {
    failures: Mutex<Vec<Failure>>,
}

impl RecordingSink {
    fn kinds(&self) -> Vec<FailureKind> {
        self.failures.lock().unwrap().iter().map(|f| f.kind).collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, failure: Failure) {
        self.failures.lock().unwrap().push(failure);
    }
}

fn fixture() -> Vec<Post> {
    vec![
        NewPost::new("Bitcoin", "Halving notes", "satoshi").into_post(0, 10),
        NewPost::new("Ethereum", "Merge recap", "vitalik").into_post(1, 20),
        NewPost::new("Solana", "Validator economics", "anatoly").into_post(2, 30),
    ]
}

fn session_over(backend: Arc<FakeBackend>) -> (Session, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let session = Session::new(backend, sink.clone());
    (session, sink)
}

fn fill(session: &Session, title: &str, body: &str, author: &str) {
    session.set_field(Field::Title, title);
    session.set_field(Field::Body, body);
    session.set_field(Field::Author, author);
}

#[tokio::test]
async fn test_new_session_starts_loading_with_hidden_form() {
    let (session, _) = session_over(Arc::new(FakeBackend::default()));

    assert!(session.is_loading());
    assert!(!session.form_visible());
    assert!(session.posts().is_empty());
    assert_eq!(session.view().feed, FeedView::Loading);
}

#[tokio::test]
async fn test_initialize_fetches_once() {
    let backend = Arc::new(FakeBackend::with_posts(fixture()));
    let (session, _) = session_over(backend.clone());

    session.initialize().await;
    assert_eq!(backend.list_calls(), 1);
    assert_eq!(session.posts(), fixture());
    assert!(!session.is_loading());

    session.initialize().await;
    assert_eq!(backend.list_calls(), 1);
}

#[tokio::test]
async fn test_repeated_fetch_renders_identically() {
    let backend = Arc::new(FakeBackend::with_posts(fixture()));
    let (session, _) = session_over(backend.clone());

    session.fetch_posts().await;
    let first = session.view();
    session.fetch_posts().await;
    let second = session.view();

    assert_eq!(first, second);
    assert_eq!(backend.list_calls(), 2);
}

#[tokio::test]
async fn test_render_order_matches_backend_for_every_permutation() {
    let permutations = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    for order in permutations {
        let base = fixture();
        let posts: Vec<Post> = order.iter().map(|&i| base[i].clone()).collect();
        let backend = Arc::new(FakeBackend::with_posts(posts.clone()));
        let (session, _) = session_over(backend);

        session.fetch_posts().await;

        let keys: Vec<u64> = session.view().cards().iter().map(|c| c.key).collect();
        let expected: Vec<u64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(keys, expected, "order {order:?}");
    }
}

#[tokio::test]
async fn test_fetch_failure_is_swallowed_and_releases_busy_flag() {
    let backend = Arc::new(FakeBackend::with_posts(fixture()));
    let (session, sink) = session_over(backend.clone());
    session.fetch_posts().await;

    backend.fail_list.store(true, Ordering::SeqCst);
    session.fetch_posts().await;

    assert!(!session.is_loading());
    assert_eq!(session.posts(), fixture());
    assert_eq!(sink.kinds(), vec![FailureKind::Fetch]);
}

#[tokio::test]
async fn test_validation_gate_blocks_append() {
    let cases = [
        ("", "B", "C", vec![Field::Title]),
        ("A", "", "C", vec![Field::Body]),
        ("A", "B", "", vec![Field::Author]),
        ("", "", "", Field::ALL.to_vec()),
        (" ", "B", "\t", vec![Field::Title, Field::Author]),
    ];

    for (title, body, author, missing) in cases {
        let backend = Arc::new(FakeBackend::default());
        let (session, _) = session_over(backend.clone());
        session.fetch_posts().await;
        session.toggle_form();
        fill(&session, title, body, author);

        match session.submit().await {
            SubmitOutcome::Invalid(errors) => assert_eq!(errors.fields(), missing.as_slice()),
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert_eq!(backend.append_calls(), 0);
        assert!(session.form_visible());

        let view = session.view();
        let composer = view.composer.unwrap();
        let flagged: Vec<Field> = composer
            .fields
            .iter()
            .filter(|f| f.error.is_some())
            .map(|f| f.field)
            .collect();
        assert_eq!(flagged, missing);
    }
}

#[tokio::test]
async fn test_submit_refetches_and_shows_new_post() {
    let backend = Arc::new(FakeBackend::default());
    let (session, _) = session_over(backend.clone());
    session.initialize().await;
    assert!(session.view().cards().is_empty());

    session.toggle_form();
    fill(&session, "A", "B", "C");
    assert_eq!(session.submit().await, SubmitOutcome::Submitted);

    assert_eq!(backend.append_calls(), 1);
    assert_eq!(backend.list_calls(), 2);

    let posts = session.posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "A");
    assert_eq!(posts[0].body, "B");
    assert_eq!(posts[0].author, "C");
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_successful_submit_clears_and_hides_form() {
    let backend = Arc::new(FakeBackend::default());
    let (session, _) = session_over(backend);
    session.initialize().await;

    session.toggle_form();
    fill(&session, "A", "B", "C");
    session.submit().await;

    assert!(!session.form_visible());
    for field in Field::ALL {
        assert_eq!(session.field(field), "");
    }
    assert_eq!(session.view().toggle_label, "New Post");
}

#[tokio::test]
async fn test_failed_submit_retains_input() {
    let backend = Arc::new(FakeBackend::default());
    backend.fail_append.store(true, Ordering::SeqCst);
    let (session, sink) = session_over(backend.clone());
    session.initialize().await;

    session.toggle_form();
    fill(&session, "A", "B\nsecond line", "C");
    assert_eq!(session.submit().await, SubmitOutcome::Failed);

    assert!(session.form_visible());
    assert_eq!(session.field(Field::Title), "A");
    assert_eq!(session.field(Field::Body), "B\nsecond line");
    assert_eq!(session.field(Field::Author), "C");
    assert!(!session.is_loading());
    assert_eq!(backend.list_calls(), 1, "no refetch after a failed append");
    assert_eq!(sink.kinds(), vec![FailureKind::Submit]);
    assert_eq!(
        session.snapshot().composer.phase(),
        ComposerPhase::Editing
    );
}

#[tokio::test]
async fn test_submit_ignored_while_hidden() {
    let backend = Arc::new(FakeBackend::default());
    let (session, _) = session_over(backend.clone());
    fill(&session, "A", "B", "C");

    assert_eq!(session.submit().await, SubmitOutcome::Ignored);
    assert_eq!(backend.append_calls(), 0);
}

#[tokio::test]
async fn test_toggle_does_not_touch_feed_or_busy_flag() {
    let backend = Arc::new(FakeBackend::with_posts(fixture()));
    let (session, _) = session_over(backend);
    session.initialize().await;

    session.toggle_form();
    assert!(session.form_visible());
    assert!(!session.is_loading());
    assert_eq!(session.posts(), fixture());

    session.toggle_form();
    assert!(!session.form_visible());
}

#[tokio::test]
async fn test_loading_while_fetch_in_flight() {
    let gate = Arc::new(Notify::new());
    let backend = Arc::new(GatedBackend {
        responses: Mutex::new(VecDeque::from([(gate.clone(), fixture())])),
    });
    let session = Arc::new(Session::new(backend, Arc::new(RecordingSink::default())));

    let task = tokio::spawn({
        let session = session.clone();
        async move { session.fetch_posts().await }
    });
    tokio::task::yield_now().await;

    assert!(session.is_loading());
    session.toggle_form();
    assert!(session.form_visible());

    gate.notify_one();
    task.await.unwrap();

    assert!(!session.is_loading());
    assert_eq!(session.posts(), fixture());
}

#[tokio::test]
async fn test_loading_while_append_in_flight() {
    let gate = Arc::new(Notify::new());
    let backend = Arc::new(HeldAppendBackend {
        inner: FakeBackend::default(),
        gate: gate.clone(),
    });
    let session = Arc::new(Session::new(backend, Arc::new(RecordingSink::default())));
    session.initialize().await;
    assert!(!session.is_loading());

    session.toggle_form();
    fill(&session, "A", "B", "C");

    let task = tokio::spawn({
        let session = session.clone();
        async move { session.submit().await }
    });
    tokio::task::yield_now().await;

    assert!(session.is_loading());
    assert_eq!(session.view().feed, FeedView::Loading);
    assert_eq!(
        session.snapshot().composer.phase(),
        ComposerPhase::Submitting
    );

    gate.notify_one();
    assert_eq!(task.await.unwrap(), SubmitOutcome::Submitted);

    assert!(!session.is_loading());
    assert_eq!(session.view().cards().len(), 1);
}

#[tokio::test]
async fn test_overlapping_fetches_last_completion_wins() {
    let slow_gate = Arc::new(Notify::new());
    let fast_gate = Arc::new(Notify::new());
    let base = fixture();
    let slow_snapshot = vec![base[0].clone()];
    let fast_snapshot = vec![base[1].clone(), base[2].clone()];

    let backend = Arc::new(GatedBackend {
        responses: Mutex::new(VecDeque::from([
            (slow_gate.clone(), slow_snapshot.clone()),
            (fast_gate.clone(), fast_snapshot.clone()),
        ])),
    });
    let session = Arc::new(Session::new(backend, Arc::new(RecordingSink::default())));

    let slow = tokio::spawn({
        let session = session.clone();
        async move { session.fetch_posts().await }
    });
    tokio::task::yield_now().await;
    let fast = tokio::spawn({
        let session = session.clone();
        async move { session.fetch_posts().await }
    });
    tokio::task::yield_now().await;

    fast_gate.notify_one();
    fast.await.unwrap();

    // The busy flag is advisory: the first completion clears it even though
    // the slower fetch is still outstanding.
    assert!(!session.is_loading());
    assert_eq!(session.posts(), fast_snapshot);

    slow_gate.notify_one();
    slow.await.unwrap();

    assert_eq!(session.posts(), slow_snapshot);
    assert!(!session.is_loading());
}
