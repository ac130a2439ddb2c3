//! Fully qualified paths of `core`/`alloc` items, for use in generated code.
//!
//! Generated code must not depend on what the caller has imported or shadowed,
//! so every prelude item is spelled out with a leading `::`.
//!
//! ```
//! use ns_macro_utils::full_path::OptionFP;
//! use quote::quote;
//!
//! let tokens = quote!(#OptionFP::None).to_string();
//! assert!(tokens.contains("option"));
//! assert!(tokens.ends_with("None"));
//! ```

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($(#[$meta:meta])* $name:ident => $($path:tt)*) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                tokens.extend(quote!($($path)*));
            }
        }
    };
}

define_full_path!(
    /// `::core::option::Option`
    OptionFP => ::core::option::Option
);

define_full_path!(
    /// `::core::marker::Send`
    SendFP => ::core::marker::Send
);

define_full_path!(
    /// `::core::marker::Sync`
    SyncFP => ::core::marker::Sync
);
