use super::{ErrorSet, Join};

#[derive(Debug, Default)]
pub(crate) struct RecordAttr {
    /// Optional database table name to map the record to
    pub(crate) table: Option<syn::LitStr>,

    /// Read-side joins, in declaration order
    pub(crate) joins: Vec<Join>,
}

impl RecordAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if attr.path().is_ident("table") {
                if self.table.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate `table` attribute"));
                    continue;
                }

                self.table = errs.check(table_name(attr));
            } else if attr.path().is_ident("join") {
                if let Some(join) = errs.check(Join::from_ast(attr)) {
                    self.joins.push(join);
                }
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// `#[table = "name"]` or `#[table("name")]`
fn table_name(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    let lit = match &attr.meta {
        syn::Meta::List(_) => attr.parse_args()?,
        syn::Meta::NameValue(meta) => match &meta.value {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit),
                ..
            }) => lit.clone(),
            _ => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected `table = \"table_name\"`",
                ))
            }
        },
        syn::Meta::Path(_) => {
            return Err(syn::Error::new_spanned(
                attr,
                "expected `table = \"table_name\"`",
            ))
        }
    };

    if lit.value().trim().is_empty() {
        return Err(syn::Error::new_spanned(lit, "table name cannot be empty"));
    }

    Ok(lit)
}
