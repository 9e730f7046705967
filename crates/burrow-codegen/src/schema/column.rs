/// Arguments of `#[column(..)]`.
#[derive(Debug, Default)]
pub(crate) struct Column {
    pub(crate) name: Option<syn::LitStr>,
    pub(crate) storage: Option<StorageOverride>,
}

/// Explicit storage class, replacing the one derived from the field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StorageOverride {
    Integer,
    Real,
    Text,
    Blob,
}

mod kw {
    syn::custom_keyword!(name);
    syn::custom_keyword!(integer);
    syn::custom_keyword!(real);
    syn::custom_keyword!(text);
    syn::custom_keyword!(blob);
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Column::default();

        // #[column("name")]
        // #[column(name = "name")]
        // #[column(blob)]
        // #[column(name = "name", blob)]
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) || lookahead.peek(kw::name) {
                if result.name.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }

                if input.peek(kw::name) {
                    let _kw: kw::name = input.parse()?;
                    let _eq_token: syn::Token![=] = input.parse()?;
                }

                let name: syn::LitStr = input.parse()?;
                if name.value().trim().is_empty() {
                    return Err(syn::Error::new_spanned(name, "column name cannot be empty"));
                }
                result.name = Some(name);
            } else if let Some(storage) = StorageOverride::peek(&lookahead) {
                if result.storage.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column storage"));
                }
                StorageOverride::skip(input)?;
                result.storage = Some(storage);
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}

impl StorageOverride {
    fn peek(lookahead: &syn::parse::Lookahead1<'_>) -> Option<StorageOverride> {
        if lookahead.peek(kw::integer) {
            Some(StorageOverride::Integer)
        } else if lookahead.peek(kw::real) {
            Some(StorageOverride::Real)
        } else if lookahead.peek(kw::text) {
            Some(StorageOverride::Text)
        } else if lookahead.peek(kw::blob) {
            Some(StorageOverride::Blob)
        } else {
            None
        }
    }

    fn skip(input: syn::parse::ParseStream) -> syn::Result<()> {
        let _storage: syn::Ident = input.parse()?;
        Ok(())
    }
}
