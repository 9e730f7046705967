use super::Expand;
use crate::schema::{Field, StorageOverride};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Body of `Record::mapping`.
    pub(super) fn expand_mapping_body(&self) -> TokenStream {
        let burrow = &self.burrow;
        let name = self.record.ident.to_string();

        let table = self.record.table.as_ref().map(|table| {
            quote!(.table(#table))
        });

        let columns = self
            .record
            .mapped_fields()
            .map(|field| self.expand_column(field));

        let joins = self.record.joins.iter().map(|join| {
            let target = &join.target;
            let left = join.left_name();
            let right = join.right_name();
            let index = join.index.then(|| quote!(.with_foreign_key_index()));

            quote! {
                .join(
                    #burrow::JoinNavigation::new(
                        #left,
                        #burrow::RecordRef::of::<#target>(),
                        #right,
                    )
                    #index
                )
            }
        });

        quote! {
            #burrow::RecordMapping::builder(#name)
                #table
                #( .column(#columns) )*
                #( #joins )*
                .build()
        }
    }

    fn expand_column(&self, field: &Field) -> TokenStream {
        let burrow = &self.burrow;
        let ty = &field.ty;
        let name = &field.name;

        let storage = match (
            &field.attrs.vector,
            field.attrs.column.as_ref().and_then(|column| column.storage),
        ) {
            (Some(size), _) => quote!(#burrow::StorageClass::FixedVector(#size)),
            (None, Some(StorageOverride::Integer)) => quote!(#burrow::StorageClass::Integer),
            (None, Some(StorageOverride::Real)) => quote!(#burrow::StorageClass::Real),
            (None, Some(StorageOverride::Text)) => quote!(#burrow::StorageClass::Text),
            (None, Some(StorageOverride::Blob)) => quote!(#burrow::StorageClass::Blob),
            (None, None) => quote! {
                #burrow::StorageClass::from_type(<#ty as #burrow::Primitive>::TYPE)
            },
        };

        let column_name = field.column_name().map(|name| quote!(.column_name(#name)));
        let primary_key = field.attrs.key.as_ref().map(|_| quote!(.primary_key()));
        let unique = field.attrs.unique.then(|| quote!(.unique()));

        let index = field.attrs.index.as_ref().map(|name| match name {
            Some(name) => quote!(.indexed_as(#name)),
            None => quote!(.indexed()),
        });

        quote! {
            #burrow::Column::new(#name, #storage)
                #column_name
                .nullable(<#ty as #burrow::Primitive>::NULLABLE)
                #primary_key
                #unique
                #index
        }
    }
}
