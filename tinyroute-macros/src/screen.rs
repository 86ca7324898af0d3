//! `#[derive(Screen)]` implementation.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, DeriveInput, parse_macro_input};

/// Looks for `#[screen(navigation_stack)]`.
fn is_navigation_stack(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut stack = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("screen")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("navigation_stack") {
                stack = true;
                Ok(())
            } else {
                Err(meta.error("unknown screen attribute, expected `navigation_stack`"))
            }
        })?;
    }
    Ok(stack)
}

pub(crate) fn derive_screen_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let stack = match is_navigation_stack(&input.attrs) {
        Ok(stack) => stack,
        Err(err) => return err.to_compile_error().into(),
    };

    let expanded = quote! {
        impl #impl_generics ::tinyroute::Screen for #name #ty_generics #where_clause {
            fn is_navigation_stack(&self) -> bool {
                #stack
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };

    TokenStream::from(expanded)
}
