//! Navigation options for push and present.

use std::{fmt, sync::Arc};
use tinyroute_core::{Completion, ScreenHandle, StackWrapper};

/// Options for [`Router::push`](crate::Router::push).
#[derive(Clone)]
pub struct PushOptions {
    /// Navigation stack to push onto. When unset, the stack enclosing the
    /// navigator's topmost screen is used.
    pub source: Option<ScreenHandle>,
    /// Whether the transition is animated. Defaults to `true`.
    pub animated: bool,
}

impl PushOptions {
    /// Animated push onto the current stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push onto `stack` instead of the current stack.
    pub fn source(mut self, stack: ScreenHandle) -> Self {
        self.source = Some(stack);
        self
    }

    /// Set the animation flag.
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }
}

impl Default for PushOptions {
    fn default() -> Self {
        Self {
            source: None,
            animated: true,
        }
    }
}

impl fmt::Debug for PushOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushOptions")
            .field("source", &self.source.is_some())
            .field("animated", &self.animated)
            .finish()
    }
}

/// Options for [`Router::present`](crate::Router::present).
///
/// # Example
///
/// ```rust
/// use tinyroute::PresentOptions;
/// use tinyroute::testing::TestStack;
///
/// let options = PresentOptions::new()
///     .wrap(TestStack::wrapper())
///     .animated(false)
///     .on_complete(|| println!("presented"));
/// assert!(!options.animated);
/// ```
pub struct PresentOptions {
    /// Wrap the screen in a navigation stack before presenting it, unless it
    /// already is one.
    pub wrap: Option<Arc<dyn StackWrapper>>,
    /// Screen to present from. When unset, the navigator's topmost screen
    /// is used.
    pub source: Option<ScreenHandle>,
    /// Whether the transition is animated. Defaults to `true`.
    pub animated: bool,
    /// Run once the presentation finished.
    pub completion: Option<Completion>,
}

impl PresentOptions {
    /// Animated, unwrapped presentation from the topmost screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the presented screen with `wrapper`.
    pub fn wrap(mut self, wrapper: Arc<dyn StackWrapper>) -> Self {
        self.wrap = Some(wrapper);
        self
    }

    /// Present from `screen` instead of the topmost screen.
    pub fn source(mut self, screen: ScreenHandle) -> Self {
        self.source = Some(screen);
        self
    }

    /// Set the animation flag.
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Run `completion` after the presentation.
    pub fn on_complete(mut self, completion: impl FnOnce() + Send + 'static) -> Self {
        self.completion = Some(Box::new(completion));
        self
    }
}

impl Default for PresentOptions {
    fn default() -> Self {
        Self {
            wrap: None,
            source: None,
            animated: true,
            completion: None,
        }
    }
}

impl fmt::Debug for PresentOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentOptions")
            .field("wrap", &self.wrap.is_some())
            .field("source", &self.source.is_some())
            .field("animated", &self.animated)
            .field("completion", &self.completion.is_some())
            .finish()
    }
}
