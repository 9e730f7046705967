use super::{Column, ErrorSet};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier on the struct
    pub(crate) ident: syn::Ident,

    /// Native field name, as used in expressions and mappings
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Column name and storage overrides
    pub(crate) column: Option<Column>,

    pub(crate) unique: bool,

    /// `#[index]` or `#[index("name")]`; the inner value is the explicit name
    pub(crate) index: Option<Option<syn::LitStr>>,

    /// Element count declared with `#[vector(N)]`
    pub(crate) vector: Option<syn::LitInt>,

    /// Set if the field is annotated with `#[skip]`
    pub(crate) skip: Option<syn::Attribute>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    attrs.column = errs.check(Column::from_ast(attr));
                }
            } else if attr.path().is_ident("unique") {
                if attrs.unique {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[unique] attribute",
                    ));
                } else {
                    attrs.unique = true;
                }
            } else if attr.path().is_ident("index") {
                if attrs.index.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[index] attribute",
                    ));
                } else {
                    attrs.index = errs.check(index_name(attr));
                }
            } else if attr.path().is_ident("vector") {
                if attrs.vector.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[vector] attribute",
                    ));
                } else {
                    attrs.vector = errs.check(vector_size(attr));
                }
            } else if attr.path().is_ident("skip") {
                if attrs.skip.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[skip] attribute"));
                } else {
                    attrs.skip = Some(attr.clone());
                }
            }
        }

        if let Some(skip) = &attrs.skip {
            if attrs.key.is_some()
                || attrs.column.is_some()
                || attrs.unique
                || attrs.index.is_some()
                || attrs.vector.is_some()
            {
                errs.push(syn::Error::new_spanned(
                    skip,
                    "a skipped field cannot carry other record attributes",
                ));
            }
        }

        if let (Some(vector), Some(storage)) = (
            &attrs.vector,
            attrs.column.as_ref().and_then(|column| column.storage),
        ) {
            errs.push(syn::Error::new_spanned(
                vector,
                format!("#[vector] conflicts with the `{storage:?}` storage override"),
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty: field.ty.clone(),
            attrs,
        })
    }

    pub(crate) fn is_skipped(&self) -> bool {
        self.attrs.skip.is_some()
    }

    /// Explicit column name from `#[column]`.
    pub(crate) fn column_name(&self) -> Option<String> {
        self.attrs
            .column
            .as_ref()
            .and_then(|column| column.name.as_ref())
            .map(syn::LitStr::value)
    }
}

fn index_name(attr: &syn::Attribute) -> syn::Result<Option<syn::LitStr>> {
    match &attr.meta {
        syn::Meta::Path(_) => Ok(None),
        syn::Meta::List(_) => {
            let name: syn::LitStr = attr.parse_args()?;
            if name.value().trim().is_empty() {
                return Err(syn::Error::new_spanned(name, "index name cannot be empty"));
            }
            Ok(Some(name))
        }
        syn::Meta::NameValue(_) => Err(syn::Error::new_spanned(
            attr,
            "expected `#[index]` or `#[index(\"name\")]`",
        )),
    }
}

fn vector_size(attr: &syn::Attribute) -> syn::Result<syn::LitInt> {
    let size: syn::LitInt = attr.parse_args()?;

    if size.base10_parse::<usize>()? == 0 {
        return Err(syn::Error::new_spanned(size, "vector size must be positive"));
    }

    Ok(size)
}
