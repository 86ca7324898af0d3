//! # tinyroute - URL-Keyed Dispatch for GUI Applications
//!
//! `tinyroute` maps URL-shaped keys to factories that build screens or run
//! actions. Feature modules register their routes once at startup; the rest
//! of the application navigates by URL without depending on those modules.
//!
//! A key is `scheme://host/path`. Whatever follows `?` in a dispatched URL
//! is decoded into [`QueryParams`] and handed to the factory together with
//! an optional opaque [`Context`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use tinyroute::prelude::*;
//! use tinyroute::testing::{RecordingNavigator, TestScreen};
//!
//! const PROFILE: RouteKey = RouteKey::new("app://main/profile");
//! const LOGOUT: RouteKey = RouteKey::new("app://main/logout");
//!
//! struct Account;
//!
//! impl RouteModule for Account {
//!     fn register(&self, r: &mut dyn Registrar) -> Result<(), RegistryError> {
//!         r.screen(PROFILE, |key, query, _| {
//!             let id = query.and_then(|q| q.get("id")).unwrap_or("me");
//!             Some(Arc::new(TestScreen::new(key.as_str()).with_title(id)))
//!         })?;
//!         r.action(LOGOUT, |_, _, _| true)
//!     }
//! }
//!
//! let navigator = RecordingNavigator::new()
//!     .with_topmost(TestScreen::handle("home"))
//!     .with_stack(Arc::new(TestScreen::stack("main")));
//!
//! let router = Router::builder()
//!     .module(Account)
//!     .navigator(navigator)
//!     .build()
//!     .unwrap();
//!
//! assert!(router.push("app://main/profile?id=42", None, PushOptions::new()).is_some());
//! assert!(router.handle(LOGOUT, None));
//! assert!(!router.handle("app://main/unknown", None));
//! ```
//!
//! ## Crates
//!
//! - `tinyroute-core`: keys, factories, capability traits, errors
//! - `tinyroute-std`: normalizer, route table, observers, test doubles
//! - `tinyroute-macros`: `#[route_module]` and `#[derive(Screen)]` (`macros` feature)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatch;
mod options;
mod router;

pub use tinyroute_core::{
    // Factories
    ActionFactory,
    BoxActionFactory,
    BoxScreenFactory,
    // Keys
    CanonicalKey,
    // Host capabilities
    Completion,
    Context,
    // Observation
    DispatchError,
    DispatchEvent,
    Navigator,
    Observer,
    PendingAction,
    QueryParams,
    // Registration
    Registrar,
    RegistrarExt,
    RegistryError,
    RouteKey,
    RouteKind,
    RouteModule,
    Screen,
    ScreenFactory,
    ScreenHandle,
    StackWrapper,
    // Errors
    TinyRouteError,
};

pub use tinyroute_std::{
    CollisionPolicy, DuplicatePolicy, LoggingObserver, Normalized, RouteTable, TableConfig,
    canonical_key, to_url,
};

pub use options::{PresentOptions, PushOptions};
pub use router::{Router, RouterBuilder};

/// URL normalization.
pub mod normalize {
    pub use tinyroute_std::normalize::{Normalized, canonical_key, normalize, query, to_url};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use tinyroute_std::testing::*;
}

/// Prelude module - common imports for tinyroute.
///
/// # Usage
///
/// ```rust
/// use tinyroute::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Context,
        Navigator,
        PresentOptions,
        PushOptions,
        Registrar,
        RegistrarExt,
        RegistryError,
        RouteKey,
        RouteModule,
        RouteTable,
        Router,
        Screen,
        ScreenHandle,
        TableConfig,
    };
}

#[cfg(feature = "macros")]
pub use tinyroute_macros::{Screen, route_module};

#[cfg(feature = "inventory")]
pub use inventory;

#[cfg(feature = "inventory")]
pub use tinyroute_std::{CollectedModule, collect_modules};
