//! Dispatch observation.
//!
//! The router itself keeps no diagnostics. Observers registered with it are
//! told about every registration and dispatch outcome, which is where an
//! application plugs in logging or metrics.

use crate::{error::DispatchError, module::RouteKind};

/// Something that happened inside the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchEvent<'a> {
    /// A factory was registered.
    Registered {
        /// Mapping written to.
        kind: RouteKind,
        /// Key as registered.
        key: &'a str,
        /// Whether an earlier factory was replaced.
        replaced: bool,
    },
    /// A key resolved to a factory.
    Resolved {
        /// Mapping read from.
        kind: RouteKind,
        /// Canonical key that matched.
        key: &'a str,
    },
    /// The input did not resolve to a factory.
    NotRouted {
        /// Mapping read from.
        kind: RouteKind,
        /// The caller's input.
        input: &'a str,
    },
    /// A resolved screen could not be shown.
    Rejected {
        /// The caller's input.
        input: &'a str,
        /// Why the transition was refused.
        reason: &'a DispatchError,
    },
    /// An action ran.
    ActionCompleted {
        /// Canonical key of the action.
        key: &'a str,
        /// The action's result.
        success: bool,
    },
}

/// Receives [`DispatchEvent`]s.
pub trait Observer: Send + Sync {
    /// Called synchronously for each event.
    fn on_event(&self, event: &DispatchEvent<'_>);
}

impl<F> Observer for F
where
    F: Fn(&DispatchEvent<'_>) + Send + Sync,
{
    fn on_event(&self, event: &DispatchEvent<'_>) {
        (self)(event)
    }
}
