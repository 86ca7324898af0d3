//! Link-time module collection via `inventory`.
//!
//! Modules submitted with `inventory::submit!` anywhere in the final binary
//! are gathered by [`collect_modules`] and registered by
//! [`RouteTable::register_collected`].
//!
//! ```rust,ignore
//! inventory::submit! {
//!     CollectedModule::new(&ProfileRoutes, 0, "profile")
//! }
//!
//! let mut table = RouteTable::new();
//! table.register_collected()?;
//! ```

use crate::table::RouteTable;
use tinyroute_core::{RegistryError, RouteModule};

/// A route module submitted for collection.
pub struct CollectedModule {
    /// The module.
    pub module: &'static dyn RouteModule,
    /// Registration order; on a shared key the higher priority wins.
    pub priority: i32,
    /// Name for debugging and tie-breaking.
    pub name: &'static str,
}

impl CollectedModule {
    /// Create a collected module entry.
    pub const fn new(module: &'static dyn RouteModule, priority: i32, name: &'static str) -> Self {
        Self {
            module,
            priority,
            name,
        }
    }
}

inventory::collect!(CollectedModule);

/// All submitted modules in registration order.
///
/// Sorted by ascending priority, then by name, so the order is stable
/// regardless of link order.
pub fn collect_modules() -> Vec<&'static CollectedModule> {
    let mut modules: Vec<&'static CollectedModule> =
        inventory::iter::<CollectedModule>.into_iter().collect();
    modules.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.name.cmp(b.name)));
    modules
}

impl RouteTable {
    /// Register every module submitted with `inventory::submit!`.
    pub fn register_collected(&mut self) -> Result<(), RegistryError> {
        for entry in collect_modules() {
            #[cfg(feature = "tracing")]
            tracing::debug!(module = entry.name, priority = entry.priority, "registering collected module");
            self.register_module(entry.module)?;
        }
        Ok(())
    }
}
