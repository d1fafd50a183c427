//! Derive macro implementation for fileconf

use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenTree};
use quote::{quote, ToTokens};
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, Type};

mod attrs;

use attrs::FieldAttrs;

/// Whether `ident` appears anywhere in `tokens`.
fn mentions(tokens: proc_macro2::TokenStream, ident: &Ident) -> bool {
    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(found) => found == *ident,
        TokenTree::Group(group) => mentions(group.stream(), ident),
        _ => false,
    })
}

/// `Overlay` derive macro
///
/// Implements `fileconf::Overlay` for a struct with named fields, describing
/// it as a record whose fields are walked in declaration order. Each field
/// type must itself implement `Overlay`. For generic structs the bound is
/// placed on the types of walked fields, so a parameter used only in a
/// skipped field or in `PhantomData<T>` needs no bound.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[overlay(name = "NAME")]`: Use `NAME` instead of the field identifier
/// - `#[overlay(skip)]`: Exclude the field from environment overrides
///
/// # Example
///
/// See the `fileconf` crate documentation for usage examples.
#[proc_macro_derive(Overlay, attributes(overlay))]
pub fn derive_overlay(input: TokenStream) -> TokenStream {
    let mut input = parse_macro_input!(input as DeriveInput);

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    &input,
                    "Overlay only supports structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "Overlay only supports structs")
                .to_compile_error()
                .into();
        }
    };

    let type_params: Vec<Ident> = input
        .generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();

    let mut entries = Vec::new();
    let mut bounded: Vec<Type> = Vec::new();
    for field in fields {
        let attrs = match FieldAttrs::from_field(field) {
            Ok(attrs) => attrs,
            Err(err) => return err.to_compile_error().into(),
        };
        if attrs.skip {
            continue;
        }

        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        // Raw identifiers keep their `r#` out of the variable name
        let name = attrs.name.unwrap_or_else(|| {
            let name = ident.to_string();
            name.strip_prefix("r#").map(str::to_string).unwrap_or(name)
        });

        entries.push(quote! {
            ::fileconf::Field::new(#name, &mut self.#ident)
        });

        let ty = &field.ty;
        if type_params.iter().any(|param| mentions(ty.to_token_stream(), param)) {
            bounded.push(ty.clone());
        }
    }

    // Bound walked field types, not parameters: a parameter seen only in
    // skipped fields or `PhantomData` needs no `Overlay` impl.
    let where_clause = input.generics.make_where_clause();
    for ty in bounded {
        where_clause
            .predicates
            .push(parse_quote!(#ty: ::fileconf::Overlay));
    }

    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::fileconf::Overlay for #struct_name #ty_generics #where_clause {
            fn node(&mut self) -> ::fileconf::Node<'_> {
                ::fileconf::Node::Record(::std::vec![#(#entries),*])
            }
        }
    };

    TokenStream::from(expanded)
}
