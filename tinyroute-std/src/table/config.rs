//! Registration policies.
//!
//! The defaults reproduce the permissive behaviour applications expect:
//! re-registering a key replaces the old factory, and the same key may be
//! used for a screen and an action.

/// What happens when a key is registered twice in the same mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The later factory replaces the earlier one.
    #[default]
    Overwrite,
    /// The second registration fails with `RegistryError::DuplicateKey`.
    Reject,
}

/// What happens when a key is registered as both a screen and an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Both registrations stand.
    #[default]
    Allow,
    /// Both registrations stand and a warning is logged.
    Warn,
    /// The second registration fails with `RegistryError::KindCollision`.
    Reject,
}

/// Configuration for a [`RouteTable`](super::RouteTable).
///
/// # Example
///
/// ```rust
/// use tinyroute_std::table::{CollisionPolicy, TableConfig};
///
/// let config = TableConfig::new()
///     .reject_duplicates()
///     .collisions(CollisionPolicy::Warn)
///     .require_url_keys();
/// assert!(config.require_url_keys);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableConfig {
    /// Same key, same mapping.
    pub duplicates: DuplicatePolicy,
    /// Same key, other mapping.
    pub collisions: CollisionPolicy,
    /// Reject keys that are not URLs instead of storing them verbatim.
    ///
    /// Keys that are URLs are always stored in canonical form.
    pub require_url_keys: bool,
}

impl TableConfig {
    /// The permissive defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject duplicates and collisions, and require URL keys.
    pub fn strict() -> Self {
        Self {
            duplicates: DuplicatePolicy::Reject,
            collisions: CollisionPolicy::Reject,
            require_url_keys: true,
        }
    }

    /// Fail on duplicate keys instead of overwriting.
    pub fn reject_duplicates(mut self) -> Self {
        self.duplicates = DuplicatePolicy::Reject;
        self
    }

    /// Set the screen/action collision policy.
    pub fn collisions(mut self, policy: CollisionPolicy) -> Self {
        self.collisions = policy;
        self
    }

    /// Fail with `RegistryError::InvalidKey` on keys that are not URLs.
    pub fn require_url_keys(mut self) -> Self {
        self.require_url_keys = true;
        self
    }
}
