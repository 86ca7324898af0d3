//! `#[route_module]` implementation.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    FnArg, Ident, ItemFn, LitInt, LitStr, Token, Type,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

struct ModuleArgs {
    name: Option<String>,
    collect: bool,
    priority: Option<i32>,
}

impl Parse for ModuleArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = None;
        let mut collect = false;
        let mut priority = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            match ident.to_string().as_str() {
                "collect" => collect = true,
                "name" => {
                    input.parse::<Token![=]>()?;
                    let lit: LitStr = input.parse()?;
                    name = Some(lit.value());
                }
                "priority" => {
                    input.parse::<Token![=]>()?;
                    let lit: LitInt = input.parse()?;
                    priority = Some(lit.base10_parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(ModuleArgs {
            name,
            collect,
            priority,
        })
    }
}

pub(crate) fn route_module_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ModuleArgs);
    let input = parse_macro_input!(item as ItemFn);

    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_block = &input.block;

    if let Some(asyncness) = &input.sig.asyncness {
        return syn::Error::new_spanned(asyncness, "route modules register synchronously")
            .to_compile_error()
            .into();
    }

    if args.priority.is_some() && !args.collect {
        return syn::Error::new_spanned(fn_name, "`priority` only applies with `collect`")
            .to_compile_error()
            .into();
    }

    let inputs = &input.sig.inputs;
    let (registrar_pat, registrar_ty) = match (inputs.len(), inputs.first()) {
        (1, Some(FnArg::Typed(pat_type))) => match &*pat_type.ty {
            Type::Reference(reference) if reference.mutability.is_some() => {
                (&pat_type.pat, &pat_type.ty)
            }
            _ => {
                return syn::Error::new_spanned(
                    &pat_type.ty,
                    "registrar argument must be `&mut dyn Registrar`",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(
                &input.sig,
                "route module must take exactly one argument: fn(registrar: &mut dyn Registrar)",
            )
            .to_compile_error()
            .into();
        }
    };

    // Declared types are kept so the compiler checks them against the trait.
    let (output, body) = match &input.sig.output {
        syn::ReturnType::Default => (
            quote! { ::core::result::Result<(), ::tinyroute::RegistryError> },
            quote! {
                #fn_block
                ::core::result::Result::Ok(())
            },
        ),
        syn::ReturnType::Type(_, ty) => (quote! { #ty }, quote! { #fn_block }),
    };

    let struct_name = match args.name {
        Some(ref custom_name) => Ident::new(custom_name, fn_name.span()),
        None => fn_name.clone(),
    };

    let submit = args.collect.then(|| {
        let priority = args.priority.unwrap_or(0);
        quote! {
            ::tinyroute::inventory::submit! {
                ::tinyroute::CollectedModule::new(&#struct_name, #priority, stringify!(#fn_name))
            }
        }
    });

    let expanded = quote! {
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Default)]
        #[doc = concat!("Route module generated by `#[tinyroute::route_module]` on `", stringify!(#fn_name), "`")]
        #fn_vis struct #struct_name;

        impl ::tinyroute::RouteModule for #struct_name {
            fn register(&self, #registrar_pat: #registrar_ty) -> #output {
                #[allow(unused_imports)]
                use ::tinyroute::RegistrarExt as _;
                #body
            }

            fn name(&self) -> &'static str {
                stringify!(#fn_name)
            }
        }

        #submit
    };

    TokenStream::from(expanded)
}
