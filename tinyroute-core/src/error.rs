//! Error types for tinyroute.
//!
//! - [`TinyRouteError`] - top-level error
//! - [`RegistryError`] - rejected registrations
//! - [`DispatchError`] - why a dispatch produced nothing
//!
//! The plain dispatch entry points never surface these; they collapse
//! every failure to `None` or `false`. The `try_*` variants return them.

use crate::module::RouteKind;
use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TinyRouteError {
    /// A registration was rejected.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A dispatch failed.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// The router was built without a navigator.
    #[error("router has no navigator")]
    MissingNavigator,
}

/// Errors raised while registering routes.
///
/// With the default table configuration registration never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The key is already registered in the same mapping.
    #[error("route already exists for key: {0}")]
    DuplicateKey(String),

    /// The key is already registered in the other mapping.
    #[error("key {key} is already registered as {existing}")]
    KindCollision {
        /// The contested key.
        key: String,
        /// The mapping that already holds it.
        existing: RouteKind,
    },

    /// The key is not a URL with a scheme and host.
    #[error("invalid route key: {0}")]
    InvalidKey(String),
}

/// Reasons a dispatch produced no screen or action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The input has no scheme or host.
    #[error("not a routable url: {0}")]
    InvalidUrl(String),

    /// Nothing is registered for the canonical key.
    #[error("no route found for key: {0}")]
    NotRouted(String),

    /// The screen factory returned no screen.
    #[error("factory for {0} produced no screen")]
    FactoryDeclined(String),

    /// A navigation stack cannot be pushed onto another stack.
    #[error("cannot push a navigation stack onto a navigation stack")]
    StackOnStack,

    /// The explicit push source is not a navigation stack.
    #[error("push source is not a navigation stack")]
    NotANavigationStack,

    /// No navigation stack could be found to push onto.
    #[error("no navigation stack available")]
    NoNavigationStack,

    /// No surface could be found to present from.
    #[error("no surface available to present from")]
    NoPresentingSurface,
}
