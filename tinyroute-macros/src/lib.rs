//! Procedural macros for tinyroute.
//!
//! - `#[route_module]` turns a registration function into a [`RouteModule`]
//! - `#[derive(Screen)]` implements [`Screen`] for a struct
//!
//! Generated code refers to items through the `tinyroute` facade crate.
//!
//! [`RouteModule`]: https://docs.rs/tinyroute/latest/tinyroute/trait.RouteModule.html
//! [`Screen`]: https://docs.rs/tinyroute/latest/tinyroute/trait.Screen.html

use proc_macro::TokenStream;

mod module;
mod screen;

/// Turn a registration function into a route module.
///
/// The function takes the registrar and optionally returns
/// `Result<(), RegistryError>`; without a return type `?` still works and
/// `Ok(())` is appended. A unit struct with the function's name is
/// generated in its place.
///
/// # Arguments
///
/// - `name = "..."` - name of the generated struct (defaults to the function name)
/// - `collect` - submit the module for link-time collection (`inventory` feature)
/// - `priority = N` - collection priority, `0` by default
///
/// # Example
///
/// ```rust,ignore
/// #[tinyroute::route_module(collect, priority = 10)]
/// fn profile_routes(r: &mut dyn Registrar) -> Result<(), RegistryError> {
///     r.screen(PROFILE, |_, _, _| Some(Arc::new(ProfileScreen::default())))
/// }
///
/// table.register_modules(&[&profile_routes])?;
/// ```
#[proc_macro_attribute]
pub fn route_module(attr: TokenStream, item: TokenStream) -> TokenStream {
    module::route_module_impl(attr, item)
}

/// Derive `Screen`.
///
/// Add `#[screen(navigation_stack)]` to mark the type as a navigation-stack
/// container.
#[proc_macro_derive(Screen, attributes(screen))]
pub fn derive_screen(input: TokenStream) -> TokenStream {
    screen::derive_screen_impl(input)
}
