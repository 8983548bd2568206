//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Visibility};

mod attrs;

use attrs::FieldAttrs;

/// `Bind` derive macro
///
/// Implements `envbind::Bind` for a struct with named fields. Each field
/// tagged with `#[env(key = ...)]` is bound in declaration order; untagged
/// fields are left alone.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[env(key = "NAME")]`: Bind from the `NAME` environment variable
/// - `#[env(key = "NAME,required")]`: Fail if `NAME` is unset or empty
/// - `#[env(key = "-")]`: Skip the field, same as no attribute
/// - `#[env(default = "value")]`: Value used when `NAME` is unset or empty
///
/// Tagged fields must be `pub` and of a type implementing `envbind::Value`.
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(Bind, attributes(env))]
pub fn derive_bind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "Bind only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(struct_name, "Bind only supports structs"));
        }
    };

    let mut bindings = Vec::new();
    let mut errors: Option<syn::Error> = None;

    for field in fields {
        let attrs = match FieldAttrs::from_field(field) {
            Ok(attrs) => attrs,
            Err(e) => {
                combine(&mut errors, e);
                continue;
            }
        };

        if !attrs.is_bound() {
            continue;
        }

        // Named fields always carry an ident
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };

        if !matches!(field.vis, Visibility::Public(_)) {
            combine(
                &mut errors,
                syn::Error::new_spanned(
                    field_name,
                    format!("cannot bind field `{field_name}`: fields tagged with #[env] must be `pub`"),
                ),
            );
            continue;
        }

        let field_label = field_name.to_string();
        let key = attrs.key;
        let default = match attrs.default {
            Some(lit) => quote! { ::core::option::Option::Some(#lit) },
            None => quote! { ::core::option::Option::None },
        };

        // Naming the type keeps unsupported-type errors on the field's type
        let field_type = &field.ty;

        bindings.push(quote! {
            binder.field::<#field_type>(#field_label, #key, #default, &mut self.#field_name)?;
        });
    }

    // Field errors are emitted next to the impl so type errors on the
    // remaining fields are still reported
    let errors = errors.map(|e| e.to_compile_error());

    Ok(quote! {
        #errors

        impl #impl_generics ::envbind::Bind for #struct_name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn bind_with(
                &mut self,
                binder: &::envbind::Binder<'_>,
            ) -> ::core::result::Result<(), ::envbind::BindError> {
                #(#bindings)*
                ::core::result::Result::Ok(())
            }
        }
    })
}

/// Accumulate field errors so every bad field is reported in one pass
fn combine(errors: &mut Option<syn::Error>, error: syn::Error) {
    match errors {
        Some(existing) => existing.combine(error),
        None => *errors = Some(error),
    }
}
