//! The router: a route table plus the navigator that shows its screens.

use std::sync::Arc;
use tinyroute_core::{Navigator, Observer, RegistryError, RouteModule, TinyRouteError};
use tinyroute_std::{RouteTable, TableConfig};

/// Dispatches URLs to registered screens and actions.
///
/// A `Router` is an ordinary value: build as many as needed, there is no
/// global registry. Registration happens before dispatch; the dispatch
/// entry points only take `&self`.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use tinyroute::prelude::*;
/// use tinyroute::testing::{RecordingNavigator, TestScreen};
///
/// const DETAIL: RouteKey = RouteKey::new("abc://123.com/detail");
///
/// let navigator = RecordingNavigator::new()
///     .with_topmost(TestScreen::handle("home"))
///     .with_stack(Arc::new(TestScreen::stack("main")));
///
/// let mut router = Router::new(RouteTable::new(), navigator.clone());
/// router
///     .table_mut()
///     .screen(DETAIL, |key, _, _| Some(TestScreen::handle(key.as_str())))
///     .unwrap();
///
/// assert!(router.push(DETAIL, None, PushOptions::new()).is_some());
/// assert_eq!(navigator.count(), 1);
/// ```
pub struct Router<N> {
    pub(crate) table: RouteTable,
    pub(crate) navigator: N,
}

impl<N: Navigator> Router<N> {
    /// Create a router over an already filled table.
    pub fn new(table: RouteTable, navigator: N) -> Self {
        Self { table, navigator }
    }

    /// Start building a router.
    pub fn builder() -> RouterBuilder<N> {
        RouterBuilder::new()
    }

    /// The route table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The route table, for registering more routes.
    pub fn table_mut(&mut self) -> &mut RouteTable {
        &mut self.table
    }

    /// The navigator.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Add an observer.
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.table.add_observer(Arc::new(observer));
        self
    }

    /// Register modules, in order.
    pub fn register_modules(&mut self, modules: &[&dyn RouteModule]) -> Result<(), RegistryError> {
        self.table.register_modules(modules)
    }

    /// Split the router back into its parts.
    pub fn into_parts(self) -> (RouteTable, N) {
        (self.table, self.navigator)
    }
}

impl<N> std::fmt::Debug for Router<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Router`].
///
/// Observers are attached before modules register, so they see every
/// registration. With the `tracing` feature a [`LoggingObserver`] is added
/// unless [`without_logging`](Self::without_logging) is called.
///
/// [`LoggingObserver`]: tinyroute_std::LoggingObserver
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use tinyroute::prelude::*;
/// use tinyroute::testing::{RecordingNavigator, TestScreen};
///
/// struct Home;
///
/// impl RouteModule for Home {
///     fn register(&self, registrar: &mut dyn Registrar) -> Result<(), RegistryError> {
///         registrar.screen("app://main/home", |_, _, _| Some(TestScreen::handle("home")))
///     }
/// }
///
/// let router = Router::builder()
///     .config(TableConfig::strict())
///     .module(Home)
///     .navigator(RecordingNavigator::new())
///     .build()
///     .unwrap();
/// assert_eq!(router.table().screen_count(), 1);
/// ```
pub struct RouterBuilder<N> {
    config: TableConfig,
    modules: Vec<Box<dyn RouteModule>>,
    observers: Vec<Arc<dyn Observer>>,
    navigator: Option<N>,
    logging: bool,
    #[cfg(feature = "inventory")]
    collected: bool,
}

impl<N: Navigator> RouterBuilder<N> {
    /// Create a builder with the default table configuration.
    pub fn new() -> Self {
        Self {
            config: TableConfig::default(),
            modules: Vec::new(),
            observers: Vec::new(),
            navigator: None,
            logging: true,
            #[cfg(feature = "inventory")]
            collected: false,
        }
    }

    /// Set the table configuration.
    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Append a module; modules register in the order they are added.
    pub fn module(mut self, module: impl RouteModule + 'static) -> Self {
        self.modules.push(Box::new(module));
        self
    }

    /// Append several boxed modules.
    pub fn modules(mut self, modules: impl IntoIterator<Item = Box<dyn RouteModule>>) -> Self {
        self.modules.extend(modules);
        self
    }

    /// Add an observer.
    pub fn observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observers.push(Arc::new(observer));
        self
    }

    /// Set the navigator.
    pub fn navigator(mut self, navigator: N) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Do not add the default logging observer.
    pub fn without_logging(mut self) -> Self {
        self.logging = false;
        self
    }

    /// Also register every module submitted with `inventory::submit!`,
    /// after the explicitly added ones.
    #[cfg(feature = "inventory")]
    pub fn collected(mut self) -> Self {
        self.collected = true;
        self
    }

    /// Build the router, registering all modules.
    pub fn build(self) -> Result<Router<N>, TinyRouteError> {
        let navigator = self.navigator.ok_or(TinyRouteError::MissingNavigator)?;

        let mut table = RouteTable::with_config(self.config);
        #[cfg(feature = "tracing")]
        {
            if self.logging {
                table.add_observer(Arc::new(tinyroute_std::LoggingObserver));
            }
        }
        #[cfg(not(feature = "tracing"))]
        let _ = self.logging;
        for observer in self.observers {
            table.add_observer(observer);
        }

        for module in &self.modules {
            table.register_module(module.as_ref())?;
        }

        #[cfg(feature = "inventory")]
        {
            if self.collected {
                table.register_collected()?;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            modules = self.modules.len(),
            screens = table.screen_count(),
            actions = table.action_count(),
            "router built"
        );

        Ok(Router { table, navigator })
    }
}

impl<N: Navigator> Default for RouterBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
