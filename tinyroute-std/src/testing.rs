//! Testing utilities for tinyroute.
//!
//! Stand-ins for the host GUI so routing can be exercised without one.
//!
//! - [`TestScreen`]: a tagged screen, optionally flagged as a navigation stack
//! - [`TestStack`]: a navigation stack wrapping a root screen
//! - [`RecordingNavigator`]: a navigator that records transitions
//! - [`RecordingObserver`]: an observer that records dispatch events
//! - [`CountingAction`]: an action factory that counts invocations

use std::{
    any::Any,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};
use tinyroute_core::{
    ActionFactory, CanonicalKey, Completion, Context, DispatchError, DispatchEvent, Navigator,
    Observer, QueryParams, RouteKind, Screen, ScreenHandle, StackWrapper,
};

// ============================================================================
// Screens
// ============================================================================

/// A screen identified by a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestScreen {
    tag: String,
    title: String,
    note: Option<String>,
    navigation_stack: bool,
}

impl TestScreen {
    /// A plain screen.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// A screen that reports itself as a navigation stack.
    pub fn stack(tag: impl Into<String>) -> Self {
        Self {
            navigation_stack: true,
            ..Self::new(tag)
        }
    }

    /// A plain screen, already behind a [`ScreenHandle`].
    pub fn handle(tag: impl Into<String>) -> ScreenHandle {
        Arc::new(Self::new(tag))
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Attach a free-form note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// The tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The note, if any.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

impl Screen for TestScreen {
    fn is_navigation_stack(&self) -> bool {
        self.navigation_stack
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A navigation stack holding a root screen.
pub struct TestStack {
    root: ScreenHandle,
}

impl TestStack {
    /// Wrap `root`.
    pub fn new(root: ScreenHandle) -> Self {
        Self { root }
    }

    /// The root screen.
    pub fn root(&self) -> &ScreenHandle {
        &self.root
    }

    /// A [`StackWrapper`] producing `TestStack`s.
    pub fn wrapper() -> Arc<dyn StackWrapper> {
        Arc::new(|root: ScreenHandle| -> ScreenHandle { Arc::new(TestStack::new(root)) })
    }
}

impl Screen for TestStack {
    fn is_navigation_stack(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Human-readable name of a test screen: its tag, or `stack(<root>)`.
pub fn label(screen: &ScreenHandle) -> String {
    if let Some(screen) = screen.downcast_ref::<TestScreen>() {
        screen.tag().to_owned()
    } else if let Some(stack) = screen.downcast_ref::<TestStack>() {
        format!("stack({})", label(stack.root()))
    } else {
        "<unknown>".to_owned()
    }
}

// ============================================================================
// Recording Navigator
// ============================================================================

/// A transition performed through [`RecordingNavigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCall {
    /// `push(stack, screen, animated)`.
    Push {
        /// Label of the stack pushed onto.
        stack: String,
        /// Label of the pushed screen.
        screen: String,
        /// Animation flag.
        animated: bool,
    },
    /// `present(from, screen, animated, completion)`.
    Present {
        /// Label of the presenting screen.
        from: String,
        /// Label of the presented screen.
        screen: String,
        /// Animation flag.
        animated: bool,
        /// Whether a completion was supplied.
        completion: bool,
    },
}

#[derive(Default)]
struct NavState {
    topmost: Option<ScreenHandle>,
    stack: Option<ScreenHandle>,
    calls: Vec<NavCall>,
}

/// A navigator that records every transition instead of performing it.
///
/// Clones share their state. Completions are run as soon as `present` is
/// called.
///
/// # Example
///
/// ```rust
/// use tinyroute_core::Navigator;
/// use tinyroute_std::testing::{NavCall, RecordingNavigator, TestScreen};
///
/// let navigator = RecordingNavigator::new()
///     .with_topmost(TestScreen::handle("home"))
///     .with_stack(std::sync::Arc::new(TestScreen::stack("main")));
///
/// let stack = navigator.enclosing_stack(&navigator.topmost().unwrap()).unwrap();
/// navigator.push(&stack, TestScreen::handle("detail"), true);
///
/// assert_eq!(
///     navigator.calls(),
///     vec![NavCall::Push { stack: "main".into(), screen: "detail".into(), animated: true }]
/// );
/// ```
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    state: Arc<Mutex<NavState>>,
}

impl RecordingNavigator {
    /// A navigator with no visible screens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `screen` as the topmost screen.
    pub fn with_topmost(self, screen: ScreenHandle) -> Self {
        self.state.lock().unwrap().topmost = Some(screen);
        self
    }

    /// Report `stack` as the stack enclosing any screen.
    pub fn with_stack(self, stack: ScreenHandle) -> Self {
        self.state.lock().unwrap().stack = Some(stack);
        self
    }

    /// All recorded transitions, oldest first.
    pub fn calls(&self) -> Vec<NavCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Number of recorded transitions.
    pub fn count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    /// Forget recorded transitions.
    pub fn clear(&self) {
        self.state.lock().unwrap().calls.clear();
    }
}

impl Navigator for RecordingNavigator {
    fn topmost(&self) -> Option<ScreenHandle> {
        self.state.lock().unwrap().topmost.clone()
    }

    fn enclosing_stack(&self, _screen: &ScreenHandle) -> Option<ScreenHandle> {
        self.state.lock().unwrap().stack.clone()
    }

    fn push(&self, stack: &ScreenHandle, screen: ScreenHandle, animated: bool) {
        self.state.lock().unwrap().calls.push(NavCall::Push {
            stack: label(stack),
            screen: label(&screen),
            animated,
        });
    }

    fn present(
        &self,
        from: &ScreenHandle,
        screen: ScreenHandle,
        animated: bool,
        completion: Option<Completion>,
    ) {
        self.state.lock().unwrap().calls.push(NavCall::Present {
            from: label(from),
            screen: label(&screen),
            animated,
            completion: completion.is_some(),
        });
        // Run outside the lock: completions may dispatch again.
        if let Some(completion) = completion {
            completion();
        }
    }
}

// ============================================================================
// Recording Observer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Recorded {
    Registered(RouteKind, String, bool),
    Resolved(RouteKind, String),
    NotRouted(RouteKind, String),
    Rejected(String, DispatchError),
    ActionCompleted(String, bool),
}

/// An observer that keeps every event it sees.
///
/// Clones share their record.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<Recorded>>>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of events seen.
    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// `(kind, key, replaced)` of each registration.
    pub fn registrations(&self) -> Vec<(RouteKind, String, bool)> {
        self.collect(|event| match event {
            Recorded::Registered(kind, key, replaced) => Some((*kind, key.clone(), *replaced)),
            _ => None,
        })
    }

    /// `(kind, key)` of each successful lookup.
    pub fn resolutions(&self) -> Vec<(RouteKind, String)> {
        self.collect(|event| match event {
            Recorded::Resolved(kind, key) => Some((*kind, key.clone())),
            _ => None,
        })
    }

    /// `(kind, input)` of each failed lookup.
    pub fn misses(&self) -> Vec<(RouteKind, String)> {
        self.collect(|event| match event {
            Recorded::NotRouted(kind, input) => Some((*kind, input.clone())),
            _ => None,
        })
    }

    /// `(input, reason)` of each refused transition.
    pub fn rejections(&self) -> Vec<(String, DispatchError)> {
        self.collect(|event| match event {
            Recorded::Rejected(input, reason) => Some((input.clone(), reason.clone())),
            _ => None,
        })
    }

    /// `(key, success)` of each action run.
    pub fn actions(&self) -> Vec<(String, bool)> {
        self.collect(|event| match event {
            Recorded::ActionCompleted(key, success) => Some((key.clone(), *success)),
            _ => None,
        })
    }

    fn collect<T>(&self, f: impl Fn(&Recorded) -> Option<T>) -> Vec<T> {
        self.events.lock().unwrap().iter().filter_map(f).collect()
    }
}

impl Observer for RecordingObserver {
    fn on_event(&self, event: &DispatchEvent<'_>) {
        let recorded = match *event {
            DispatchEvent::Registered {
                kind,
                key,
                replaced,
            } => Recorded::Registered(kind, key.to_owned(), replaced),
            DispatchEvent::Resolved { kind, key } => Recorded::Resolved(kind, key.to_owned()),
            DispatchEvent::NotRouted { kind, input } => Recorded::NotRouted(kind, input.to_owned()),
            DispatchEvent::Rejected { input, reason } => {
                Recorded::Rejected(input.to_owned(), reason.clone())
            }
            DispatchEvent::ActionCompleted { key, success } => {
                Recorded::ActionCompleted(key.to_owned(), success)
            }
        };
        self.events.lock().unwrap().push(recorded);
    }
}

// ============================================================================
// Counting Action
// ============================================================================

/// An action factory that counts invocations and returns a fixed result.
///
/// Clones share the counter.
#[derive(Clone)]
pub struct CountingAction {
    count: Arc<AtomicUsize>,
    result: bool,
}

impl CountingAction {
    /// An action returning `result`.
    pub fn new(result: bool) -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            result,
        }
    }

    /// Number of invocations so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl ActionFactory for CountingAction {
    fn run(&self, _key: &CanonicalKey, _query: Option<&QueryParams>, _context: Option<&Context>) -> bool {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.result
    }
}
