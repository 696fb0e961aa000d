// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

extern crate proc_macro;

use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DeriveInput, Expr, ExprLit, Fields, Lit, Meta, Variant};

/// Convert a CamelCase variant name to kebab-case, e.g. "DryRun" to
/// "dry-run".
fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Returns the raw string a variant is spelled as on the command line: either
/// the value of its #[raw_value = "..."] attribute, or its kebab-cased name.
fn raw_value(variant: &Variant) -> syn::Result<String> {
    for attr in &variant.attrs {
        if !attr.path().is_ident("raw_value") {
            continue;
        }
        return match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => Ok(s.value()),
                other => Err(syn::Error::new(
                    other.span(),
                    "raw_value must be a string literal",
                )),
            },
            other => Err(syn::Error::new(
                other.span(),
                "expected #[raw_value = \"...\"]",
            )),
        };
    }
    Ok(kebab_case(&variant.ident.to_string()))
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new(
                name.span(),
                "ConvertibleFromString can only be derived for enums",
            ))
        }
    };
    if data.variants.is_empty() {
        return Err(syn::Error::new(
            name.span(),
            "ConvertibleFromString cannot be derived for an enum without variants",
        ));
    }

    let mut idents = Vec::with_capacity(data.variants.len());
    let mut raws: Vec<String> = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "ConvertibleFromString can only be derived for enums with unit variants",
            ));
        }
        let raw = raw_value(variant)?;
        if raws.contains(&raw) {
            return Err(syn::Error::new(
                variant.span(),
                format!("Duplicate raw value '{}'", raw),
            ));
        }
        idents.push(&variant.ident);
        raws.push(raw);
    }

    let type_description = format!("one of: {}", raws.join(", "));
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::bindflags::convert::RawRepresentable for #name #ty_generics #where_clause {
            type RawValue = ::std::string::String;

            fn from_raw_value(raw: ::std::string::String) -> ::std::option::Option<Self> {
                match raw.as_str() {
                    #( #raws => ::std::option::Option::Some(Self::#idents), )*
                    _ => ::std::option::Option::None,
                }
            }

            fn raw_value(&self) -> ::std::string::String {
                match self {
                    #( Self::#idents => ::std::string::String::from(#raws), )*
                }
            }
        }

        impl #impl_generics ::bindflags::convert::ConvertibleFromString for #name #ty_generics #where_clause {
            fn convert(raw: &str) -> ::std::option::Option<Self> {
                ::bindflags::convert::convert_raw_value::<Self>(raw)
            }

            fn type_description() -> &'static str {
                #type_description
            }
        }
    })
}

/// Derive `RawRepresentable` (with `String` raw values) and
/// `ConvertibleFromString` for an enum whose variants carry no data. Each
/// variant is spelled as its `#[raw_value = "..."]`, or by default as its
/// name in kebab-case.
#[proc_macro_derive(ConvertibleFromString, attributes(raw_value))]
pub fn derive_convertible_from_string(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
