use super::{ErrorSet, Field, Join, RecordAttr};

use std::collections::HashSet;

#[derive(Debug)]
pub(crate) struct Record {
    /// Record visibility
    pub(crate) vis: syn::Visibility,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// All struct fields, skipped ones included
    pub(crate) fields: Vec<Field>,

    /// Optional table to map the record to
    pub(crate) table: Option<syn::LitStr>,

    pub(crate) joins: Vec<Join>,

    /// The field accessor struct identifier
    pub(crate) field_struct_ident: syn::Ident,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut attr = RecordAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        errs.check(attr.populate_from_ast(&ast.attrs));

        for node in node.named.iter() {
            if let Some(field) = errs.check(Field::from_ast(node)) {
                fields.push(field);
            }
        }

        let keys: Vec<_> = fields
            .iter()
            .filter_map(|field| field.attrs.key.as_ref())
            .collect();

        if let [_, extra, ..] = &keys[..] {
            errs.push(syn::Error::new_spanned(
                extra,
                "a record has exactly one #[key] field",
            ));
        }

        let mut columns = HashSet::new();
        for field in fields.iter().filter(|field| !field.is_skipped()) {
            let column = field
                .column_name()
                .unwrap_or_else(|| field.name.clone())
                .to_ascii_lowercase();

            if !columns.insert(column) {
                errs.push(syn::Error::new_spanned(
                    &field.ident,
                    "column name is already used by another field",
                ));
            }
        }

        for join in &attr.joins {
            let known = fields
                .iter()
                .any(|field| !field.is_skipped() && field.name == join.left_name());

            if !known {
                errs.push(syn::Error::new_spanned(
                    &join.left,
                    "join refers to an unknown or skipped field",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Record {
            vis: ast.vis.clone(),
            ident: ast.ident.clone(),
            fields,
            table: attr.table,
            joins: attr.joins,
            field_struct_ident: syn::Ident::new(
                &format!("{}Fields", ast.ident),
                ast.ident.span(),
            ),
        })
    }

    /// Fields that map to columns.
    pub(crate) fn mapped_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| !field.is_skipped())
    }
}
