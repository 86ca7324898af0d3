//! Registered factories.
//!
//! Both kinds receive the same inputs: the canonical key that matched, the
//! query parameters of the dispatched URL (if it had a query) and the
//! caller's [`Context`] (if any).
//!
//! - [`ScreenFactory`] builds a screen; `None` means it could not.
//! - [`ActionFactory`] runs a side effect and reports success.
//!
//! Plain closures implement both traits:
//!
//! ```rust
//! use tinyroute_core::{ActionFactory, CanonicalKey, Context, QueryParams};
//!
//! let action = |_key: &CanonicalKey, _query: Option<&QueryParams>, _ctx: Option<&Context>| true;
//! assert!(action.run(&CanonicalKey::new("abc://123.com/x2"), None, None));
//! ```

use crate::{
    context::Context,
    key::{CanonicalKey, QueryParams},
    screen::ScreenHandle,
};

/// Builds a screen for a matched route.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a screen factory",
    label = "expected `Fn(&CanonicalKey, Option<&QueryParams>, Option<&Context>) -> Option<ScreenHandle>`",
    note = "Screen factories must be `Send + Sync + 'static`."
)]
pub trait ScreenFactory: Send + Sync + 'static {
    /// Build the screen, or return `None` if it cannot be built.
    fn build(
        &self,
        key: &CanonicalKey,
        query: Option<&QueryParams>,
        context: Option<&Context>,
    ) -> Option<ScreenHandle>;
}

impl<F> ScreenFactory for F
where
    F: Fn(&CanonicalKey, Option<&QueryParams>, Option<&Context>) -> Option<ScreenHandle>
        + Send
        + Sync
        + 'static,
{
    fn build(
        &self,
        key: &CanonicalKey,
        query: Option<&QueryParams>,
        context: Option<&Context>,
    ) -> Option<ScreenHandle> {
        (self)(key, query, context)
    }
}

/// Runs the side effect registered for a matched route.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an action factory",
    label = "expected `Fn(&CanonicalKey, Option<&QueryParams>, Option<&Context>) -> bool`",
    note = "Action factories must be `Send + Sync + 'static`."
)]
pub trait ActionFactory: Send + Sync + 'static {
    /// Run the action; `true` on success.
    fn run(
        &self,
        key: &CanonicalKey,
        query: Option<&QueryParams>,
        context: Option<&Context>,
    ) -> bool;
}

impl<F> ActionFactory for F
where
    F: Fn(&CanonicalKey, Option<&QueryParams>, Option<&Context>) -> bool + Send + Sync + 'static,
{
    fn run(
        &self,
        key: &CanonicalKey,
        query: Option<&QueryParams>,
        context: Option<&Context>,
    ) -> bool {
        (self)(key, query, context)
    }
}

/// Type-erased screen factory as stored by a registry.
pub type BoxScreenFactory = Box<dyn ScreenFactory>;

/// Type-erased action factory as stored by a registry.
pub type BoxActionFactory = Box<dyn ActionFactory>;

/// An action resolved for a URL but not run yet.
///
/// Holds everything the factory will be called with. Dropping it without
/// calling [`run`](Self::run) has no effect.
pub struct PendingAction<'a> {
    factory: &'a dyn ActionFactory,
    key: CanonicalKey,
    query: Option<QueryParams>,
    context: Option<Context>,
}

impl<'a> PendingAction<'a> {
    /// Bind a factory to its inputs.
    pub fn new(
        factory: &'a dyn ActionFactory,
        key: CanonicalKey,
        query: Option<QueryParams>,
        context: Option<Context>,
    ) -> Self {
        Self {
            factory,
            key,
            query,
            context,
        }
    }

    /// The canonical key the action was resolved for.
    pub fn key(&self) -> &CanonicalKey {
        &self.key
    }

    /// The query the action will receive.
    pub fn query(&self) -> Option<&QueryParams> {
        self.query.as_ref()
    }

    /// Invoke the factory and return its result.
    pub fn run(self) -> bool {
        self.factory
            .run(&self.key, self.query.as_ref(), self.context.as_ref())
    }
}

impl std::fmt::Debug for PendingAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingAction")
            .field("key", &self.key)
            .field("query", &self.query)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
