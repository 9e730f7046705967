use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let burrow = &self.burrow;
        let ident = &self.record.ident;
        let mapping_body = self.expand_mapping_body();

        let names: Vec<_> = self.record.mapped_fields().map(|field| &field.name).collect();
        let idents: Vec<_> = self.record.mapped_fields().map(|field| &field.ident).collect();
        let tys: Vec<_> = self.record.mapped_fields().map(|field| &field.ty).collect();

        quote! {
            impl #burrow::Record for #ident {
                fn mapping() -> #burrow::Result<#burrow::RecordMapping> {
                    #mapping_body
                }

                fn target(&mut self, field: &str) -> Option<#burrow::Target<'_>> {
                    match field {
                        #( #names => Some(<#tys as #burrow::Primitive>::target(&mut self.#idents)), )*
                        _ => None,
                    }
                }

                fn value(&self, field: &str) -> Option<#burrow::Value> {
                    match field {
                        #( #names => Some(<#tys as #burrow::Primitive>::to_value(&self.#idents)), )*
                        _ => None,
                    }
                }
            }
        }
    }
}
