//! The host's navigation capability.
//!
//! The router decides *what* to show; a [`Navigator`] implemented by the
//! GUI layer decides *how*. Nothing in tinyroute reaches into global UI
//! state: every surface the router needs is obtained through this trait or
//! supplied explicitly by the caller.

use crate::screen::{Completion, ScreenHandle};

/// Navigation operations provided by the host GUI toolkit.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot perform navigation",
    label = "missing `Navigator` implementation",
    note = "Implement `Navigator` on top of your GUI toolkit's navigation primitives."
)]
pub trait Navigator: Send + Sync {
    /// The screen currently on top of the visible hierarchy.
    fn topmost(&self) -> Option<ScreenHandle>;

    /// The navigation stack that contains `screen`, if any.
    fn enclosing_stack(&self, screen: &ScreenHandle) -> Option<ScreenHandle>;

    /// Push `screen` onto `stack`.
    fn push(&self, stack: &ScreenHandle, screen: ScreenHandle, animated: bool);

    /// Present `screen` modally over `from`, running `completion` afterwards.
    fn present(
        &self,
        from: &ScreenHandle,
        screen: ScreenHandle,
        animated: bool,
        completion: Option<Completion>,
    );
}

impl<N: Navigator + ?Sized> Navigator for std::sync::Arc<N> {
    fn topmost(&self) -> Option<ScreenHandle> {
        (**self).topmost()
    }

    fn enclosing_stack(&self, screen: &ScreenHandle) -> Option<ScreenHandle> {
        (**self).enclosing_stack(screen)
    }

    fn push(&self, stack: &ScreenHandle, screen: ScreenHandle, animated: bool) {
        (**self).push(stack, screen, animated)
    }

    fn present(
        &self,
        from: &ScreenHandle,
        screen: ScreenHandle,
        animated: bool,
        completion: Option<Completion>,
    ) {
        (**self).present(from, screen, animated, completion)
    }
}
