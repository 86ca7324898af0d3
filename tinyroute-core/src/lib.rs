//! # tinyroute-core
//!
//! Core types and capability traits for the tinyroute dispatch table.
//!
//! This crate has a single dependency and is meant to be imported by
//! feature modules that only register routes, without pulling in the
//! normalizer or the route table from `tinyroute-std`.
//!
//! # Pieces
//!
//! ## Keys ([`RouteKey`], [`CanonicalKey`], [`QueryParams`])
//!
//! A route is identified by `scheme://host/path`. Feature modules declare
//! [`RouteKey`] constants; dispatch derives a [`CanonicalKey`] and a
//! [`QueryParams`] map from whatever URL it is given.
//!
//! ## Factories ([`ScreenFactory`], [`ActionFactory`])
//!
//! What gets registered under a key. A screen factory builds a
//! [`Screen`]; an action factory performs a side effect and returns a
//! success flag. Resolved actions are handed out as [`PendingAction`]s.
//!
//! ## Registration ([`RouteModule`], [`Registrar`])
//!
//! Each feature module implements [`RouteModule`] and writes its routes
//! into a [`Registrar`].
//!
//! ## Host capabilities ([`Navigator`], [`StackWrapper`])
//!
//! Push and present transitions are performed by the host GUI through
//! [`Navigator`]. Wrapping a screen in a navigation stack before
//! presenting it goes through [`StackWrapper`].
//!
//! ## Observation ([`Observer`])
//!
//! Registration and dispatch outcomes are reported as [`DispatchEvent`]s.
//!
//! # Error Types
//!
//! - [`TinyRouteError`] - top-level error type
//! - [`RegistryError`] - rejected registrations
//! - [`DispatchError`] - failed dispatches

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod context;
mod error;
mod factory;
mod key;
mod module;
mod navigator;
mod observer;
mod screen;

// Re-exports
pub use context::Context;
pub use error::{DispatchError, RegistryError, TinyRouteError};
pub use factory::{ActionFactory, BoxActionFactory, BoxScreenFactory, PendingAction, ScreenFactory};
pub use key::{CanonicalKey, QueryParams, RouteKey};
pub use module::{Registrar, RegistrarExt, RouteKind, RouteModule};
pub use navigator::Navigator;
pub use observer::{DispatchEvent, Observer};
pub use screen::{Completion, Screen, ScreenHandle, StackWrapper};
