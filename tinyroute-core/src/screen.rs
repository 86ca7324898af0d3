//! Screens as seen by the router.
//!
//! The router never renders anything. It only needs to know whether a
//! screen is a navigation-stack container (those cannot be pushed onto
//! another stack) and to pass screens to the host's [`Navigator`].
//!
//! [`Navigator`]: crate::Navigator

use std::{any::Any, fmt, sync::Arc};

/// A displayable unit owned by the host GUI toolkit.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a routable screen",
    label = "missing `Screen` implementation",
    note = "Implement `Screen` or use `#[derive(Screen)]` from tinyroute-macros."
)]
pub trait Screen: Any + Send + Sync {
    /// Whether this screen is itself a navigation stack.
    fn is_navigation_stack(&self) -> bool {
        false
    }

    /// Upcast for downcasting to the concrete screen type.
    fn as_any(&self) -> &dyn Any;
}

/// Shared handle to a screen; the same screen is handed to the navigator
/// and returned to the caller.
pub type ScreenHandle = Arc<dyn Screen>;

impl dyn Screen {
    /// Borrow the screen as its concrete type.
    pub fn downcast_ref<T: Screen>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Whether the screen is a `T`.
    pub fn is<T: Screen>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

impl fmt::Debug for dyn Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen")
            .field("navigation_stack", &self.is_navigation_stack())
            .finish_non_exhaustive()
    }
}

/// Wraps a screen in a navigation-stack container before presenting it.
pub trait StackWrapper: Send + Sync {
    /// Build a navigation stack whose root is `root`.
    fn wrap(&self, root: ScreenHandle) -> ScreenHandle;
}

impl<F> StackWrapper for F
where
    F: Fn(ScreenHandle) -> ScreenHandle + Send + Sync,
{
    fn wrap(&self, root: ScreenHandle) -> ScreenHandle {
        (self)(root)
    }
}

/// Callback run by the navigator once a presentation finished.
pub type Completion = Box<dyn FnOnce() + Send>;
