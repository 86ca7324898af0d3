//! Registration half of the route table.

use super::config::{CollisionPolicy, DuplicatePolicy, TableConfig};
use crate::normalize;
use std::{borrow::Cow, collections::HashMap, sync::Arc};
use tinyroute_core::{
    ActionFactory, BoxActionFactory, BoxScreenFactory, DispatchEvent, Observer, Registrar,
    RegistryError, RouteKind, RouteModule, ScreenFactory,
};

/// Screen and action factories keyed by canonical key.
///
/// # Example
///
/// ```rust
/// use tinyroute_core::RegistrarExt;
/// use tinyroute_std::table::RouteTable;
///
/// let mut table = RouteTable::new();
/// table.action("abc://123.com/x2", |_, _, _| true).unwrap();
///
/// assert!(table.contains_action("abc://123.com/x2"));
/// assert!(table.resolve_action("abc://123.com/x2?from=home", None).unwrap().run());
/// ```
pub struct RouteTable {
    pub(super) screens: HashMap<String, BoxScreenFactory>,
    pub(super) actions: HashMap<String, BoxActionFactory>,
    config: TableConfig,
    observers: Vec<Arc<dyn Observer>>,
}

impl RouteTable {
    /// Create an empty table with the default configuration.
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    /// Create an empty table with the given configuration.
    pub fn with_config(config: TableConfig) -> Self {
        Self {
            screens: HashMap::new(),
            actions: HashMap::new(),
            config,
            observers: Vec::new(),
        }
    }

    /// The table's configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Add an observer for registration and resolution events.
    pub fn add_observer(&mut self, observer: Arc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Report an event to every observer.
    pub fn notify(&self, event: &DispatchEvent<'_>) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }

    /// Let a single module register its routes.
    pub fn register_module(&mut self, module: &dyn RouteModule) -> Result<(), RegistryError> {
        module.register(self)
    }

    /// Let each module register its routes, in order.
    ///
    /// Stops at the first failing module. With the default configuration
    /// nothing fails and a key registered by several modules ends up with
    /// the last module's factory.
    pub fn register_modules(&mut self, modules: &[&dyn RouteModule]) -> Result<(), RegistryError> {
        for module in modules {
            self.register_module(*module)?;
        }
        Ok(())
    }

    /// Number of registered screen keys.
    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }

    /// Number of registered action keys.
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty() && self.actions.is_empty()
    }

    /// Whether a screen factory is registered under `key`.
    ///
    /// `key` is looked up the way it would have been stored.
    pub fn contains_screen(&self, key: &str) -> bool {
        self.screens.contains_key(stored_key(key).as_ref())
    }

    /// Whether an action factory is registered under `key`.
    pub fn contains_action(&self, key: &str) -> bool {
        self.actions.contains_key(stored_key(key).as_ref())
    }

    /// Registered screen keys in unspecified order.
    pub fn screen_keys(&self) -> impl Iterator<Item = &str> {
        self.screens.keys().map(String::as_str)
    }

    /// Registered action keys in unspecified order.
    pub fn action_keys(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    /// The screen factory registered under `key`.
    pub fn screen_factory(&self, key: &str) -> Option<&dyn ScreenFactory> {
        self.screens
            .get(stored_key(key).as_ref())
            .map(|factory| factory.as_ref())
    }

    /// The action factory registered under `key`.
    pub fn action_factory(&self, key: &str) -> Option<&dyn ActionFactory> {
        self.actions
            .get(stored_key(key).as_ref())
            .map(|factory| factory.as_ref())
    }

    /// Apply the configured policies and return the key to store under.
    fn admit(&self, kind: RouteKind, key: &str) -> Result<String, RegistryError> {
        let key = match normalize::canonical_key(key) {
            Some(canonical) => canonical.into_string(),
            None if self.config.require_url_keys => {
                return Err(RegistryError::InvalidKey(key.to_owned()));
            }
            None => key.to_owned(),
        };

        let (same, other) = match kind {
            RouteKind::Screen => (self.screens.contains_key(&key), self.actions.contains_key(&key)),
            RouteKind::Action => (self.actions.contains_key(&key), self.screens.contains_key(&key)),
        };

        if same && self.config.duplicates == DuplicatePolicy::Reject {
            return Err(RegistryError::DuplicateKey(key));
        }

        if other {
            let existing = match kind {
                RouteKind::Screen => RouteKind::Action,
                RouteKind::Action => RouteKind::Screen,
            };
            match self.config.collisions {
                CollisionPolicy::Allow => {}
                CollisionPolicy::Warn => {
                    #[cfg(feature = "tracing")]
                    {
                        tracing::warn!(%key, %existing, registering = %kind, "route key registered in both mappings");
                    }
                }
                CollisionPolicy::Reject => {
                    return Err(RegistryError::KindCollision { key, existing });
                }
            }
        }

        Ok(key)
    }
}

/// The map key `key` is stored under: its canonical form when it is a URL,
/// the text itself otherwise.
fn stored_key(key: &str) -> Cow<'_, str> {
    match normalize::canonical_key(key) {
        Some(canonical) => Cow::Owned(canonical.into_string()),
        None => Cow::Borrowed(key),
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut screens: Vec<_> = self.screen_keys().collect();
        let mut actions: Vec<_> = self.action_keys().collect();
        screens.sort_unstable();
        actions.sort_unstable();
        f.debug_struct("RouteTable")
            .field("screens", &screens)
            .field("actions", &actions)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Registrar for RouteTable {
    fn register_screen(
        &mut self,
        key: &str,
        factory: BoxScreenFactory,
    ) -> Result<(), RegistryError> {
        let key = self.admit(RouteKind::Screen, key)?;
        let replaced = self.screens.insert(key.clone(), factory).is_some();
        self.notify(&DispatchEvent::Registered {
            kind: RouteKind::Screen,
            key: &key,
            replaced,
        });
        Ok(())
    }

    fn register_action(
        &mut self,
        key: &str,
        factory: BoxActionFactory,
    ) -> Result<(), RegistryError> {
        let key = self.admit(RouteKind::Action, key)?;
        let replaced = self.actions.insert(key.clone(), factory).is_some();
        self.notify(&DispatchEvent::Registered {
            kind: RouteKind::Action,
            key: &key,
            replaced,
        });
        Ok(())
    }
}
