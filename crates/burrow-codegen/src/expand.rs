mod fields;
mod mapping;
mod record;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for burrow types
    burrow: TokenStream,
}

pub(super) fn record(record: &Record) -> TokenStream {
    let expand = Expand {
        record,
        burrow: quote!(_burrow::codegen_support),
    };

    let record_impl = expand.expand_record_impl();
    let field_struct = expand.expand_field_struct();

    quote! {
        #field_struct

        const _: () = {
            use burrow as _burrow;
            #record_impl
        };
    }
}
