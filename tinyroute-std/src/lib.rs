//! # tinyroute-std
//!
//! Standard implementations for the tinyroute dispatch table.
//!
//! This crate provides:
//! - **Normalization**: [`normalize`] splits a URL into canonical key and query
//! - **Route table**: [`RouteTable`] stores factories and resolves URLs to them
//! - **Observers**: [`LoggingObserver`]
//! - **Collection**: link-time module discovery (`inventory` feature)
//! - **Testing**: stand-in screens, navigator and observer

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use tinyroute_core;

// Modules
pub mod normalize;
pub mod observers;
pub mod table;
pub mod testing;

#[cfg(feature = "inventory")]
pub mod collected;

pub use normalize::{Normalized, canonical_key, to_url};
pub use observers::LoggingObserver;
pub use table::{CollisionPolicy, DuplicatePolicy, RouteTable, TableConfig};

#[cfg(feature = "inventory")]
pub use collected::{CollectedModule, collect_modules};

#[cfg(feature = "inventory")]
pub use inventory;
