use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// `{Record}Fields`, with one expression constructor per mapped field,
    /// reachable through `Record::FIELDS`.
    pub(super) fn expand_field_struct(&self) -> TokenStream {
        let vis = &self.record.vis;
        let ident = &self.record.ident;
        let field_struct_ident = &self.record.field_struct_ident;

        let methods = self.record.mapped_fields().map(|field| {
            let field_ident = &field.ident;
            let name = &field.name;

            quote! {
                #vis fn #field_ident(&self) -> ::burrow::codegen_support::Expr {
                    ::burrow::codegen_support::Expr::field(#name)
                }
            }
        });

        quote! {
            #[derive(Debug, Clone, Copy)]
            #vis struct #field_struct_ident {
                _priv: (),
            }

            #[allow(dead_code)]
            impl #field_struct_ident {
                #( #methods )*
            }

            #[allow(dead_code)]
            impl #ident {
                #vis const FIELDS: #field_struct_ident = #field_struct_ident { _priv: () };
            }
        }
    }
}
