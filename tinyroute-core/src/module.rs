//! Module registration.
//!
//! Each feature module of an application implements [`RouteModule`] and
//! registers its keys into whatever [`Registrar`] it is handed. The
//! application collects its modules in an ordered list and registers them
//! once at startup.
//!
//! ```rust
//! use tinyroute_core::{Registrar, RegistrarExt, RegistryError, RouteKey, RouteModule};
//!
//! const CLEAR_CACHE: RouteKey = RouteKey::new("app://settings/clear-cache");
//!
//! struct SettingsRoutes;
//!
//! impl RouteModule for SettingsRoutes {
//!     fn register(&self, registrar: &mut dyn Registrar) -> Result<(), RegistryError> {
//!         registrar.action(CLEAR_CACHE, |_, _, _| true)
//!     }
//! }
//! ```

use crate::{
    context::Context,
    error::RegistryError,
    factory::{BoxActionFactory, BoxScreenFactory},
    key::{CanonicalKey, QueryParams},
    screen::ScreenHandle,
};
use std::fmt;

/// Which of the two mappings a key lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// Factories producing screens.
    Screen,
    /// Factories running actions.
    Action,
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteKind::Screen => f.write_str("screen"),
            RouteKind::Action => f.write_str("action"),
        }
    }
}

/// Receives registrations from route modules.
///
/// Object safe so modules can be written against `&mut dyn Registrar`.
/// Use [`RegistrarExt`] to register closures without boxing them by hand.
pub trait Registrar {
    /// Insert the screen factory for `key`.
    fn register_screen(
        &mut self,
        key: &str,
        factory: BoxScreenFactory,
    ) -> Result<(), RegistryError>;

    /// Insert the action factory for `key`.
    fn register_action(
        &mut self,
        key: &str,
        factory: BoxActionFactory,
    ) -> Result<(), RegistryError>;
}

/// Closure registration.
///
/// The bounds spell out the full `Fn` signature so closure arguments can be
/// left unannotated. Factories implemented on named types go through
/// [`Registrar::register_screen`] / [`Registrar::register_action`].
pub trait RegistrarExt: Registrar {
    /// Register a screen factory under `key`.
    fn screen<F>(&mut self, key: impl AsRef<str>, factory: F) -> Result<(), RegistryError>
    where
        F: Fn(&CanonicalKey, Option<&QueryParams>, Option<&Context>) -> Option<ScreenHandle>
            + Send
            + Sync
            + 'static,
    {
        self.register_screen(key.as_ref(), Box::new(factory))
    }

    /// Register an action factory under `key`.
    fn action<F>(&mut self, key: impl AsRef<str>, factory: F) -> Result<(), RegistryError>
    where
        F: Fn(&CanonicalKey, Option<&QueryParams>, Option<&Context>) -> bool
            + Send
            + Sync
            + 'static,
    {
        self.register_action(key.as_ref(), Box::new(factory))
    }
}

impl<R: Registrar + ?Sized> RegistrarExt for R {}

/// A feature module that knows its own routes.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a route module",
    label = "missing `RouteModule` implementation",
    note = "Implement `RouteModule` or annotate a registration fn with `#[route_module]`."
)]
pub trait RouteModule: Send + Sync {
    /// Register this module's keys.
    fn register(&self, registrar: &mut dyn Registrar) -> Result<(), RegistryError>;

    /// Name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
