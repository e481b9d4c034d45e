//! Derive macros for courier.

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Implements `courier::Message` for a struct or enum.
///
/// The generated impl carries the type's own generics and where clause; the
/// `Send + Sync + 'static` supertraits are checked by the compiler as usual.
#[proc_macro_derive(Message)]
pub fn derive_message(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded: proc_macro2::TokenStream = quote! {
        impl #impl_generics ::courier::Message for #name #ty_generics #where_clause {}
    };

    TokenStream::from(expanded)
}
