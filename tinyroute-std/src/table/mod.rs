//! The route table.
//!
//! A [`RouteTable`] owns the two mappings (screens and actions) from
//! canonical key to factory. It is filled once at startup, usually through
//! [`RouteTable::register_modules`], and then only read.
//!
//! - [`config`] - registration policies
//! - [`registry`] - the table and its registration half
//! - [`resolve`] - lookups by URL

pub mod config;
pub mod registry;
pub mod resolve;

pub use config::{CollisionPolicy, DuplicatePolicy, TableConfig};
pub use registry::RouteTable;
