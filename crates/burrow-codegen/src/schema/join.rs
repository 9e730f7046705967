use syn::ext::IdentExt;

/// `#[join(Target, left = field, right = field, index)]`
#[derive(Debug)]
pub(crate) struct Join {
    /// The joined record type
    pub(crate) target: syn::Path,

    /// Field of this record providing the left join column
    pub(crate) left: syn::Ident,

    /// Field of the joined record providing the right join column
    pub(crate) right: syn::Ident,

    /// Index the right-hand column on the joined table
    pub(crate) index: bool,
}

mod kw {
    syn::custom_keyword!(left);
    syn::custom_keyword!(right);
    syn::custom_keyword!(index);
}

impl Join {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Join> {
        attr.parse_args()
    }

    pub(crate) fn left_name(&self) -> String {
        self.left.unraw().to_string()
    }

    pub(crate) fn right_name(&self) -> String {
        self.right.unraw().to_string()
    }
}

impl syn::parse::Parse for Join {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let target: syn::Path = input.parse()?;

        let mut left = None;
        let mut right = None;
        let mut index = false;

        while !input.is_empty() {
            let _comma_token: syn::Token![,] = input.parse()?;
            if input.is_empty() {
                break;
            }

            let lookahead = input.lookahead1();

            if lookahead.peek(kw::left) {
                let kw: kw::left = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                if left.is_some() {
                    return Err(syn::Error::new_spanned(kw, "duplicate `left` field"));
                }
                left = Some(input.parse()?);
            } else if lookahead.peek(kw::right) {
                let kw: kw::right = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                if right.is_some() {
                    return Err(syn::Error::new_spanned(kw, "duplicate `right` field"));
                }
                right = Some(input.parse()?);
            } else if lookahead.peek(kw::index) {
                let kw: kw::index = input.parse()?;
                if index {
                    return Err(syn::Error::new_spanned(kw, "duplicate `index` flag"));
                }
                index = true;
            } else {
                return Err(lookahead.error());
            }
        }

        let Some(left) = left else {
            return Err(syn::Error::new_spanned(&target, "join is missing `left = field`"));
        };

        let Some(right) = right else {
            return Err(syn::Error::new_spanned(&target, "join is missing `right = field`"));
        };

        Ok(Join {
            target,
            left,
            right,
            index,
        })
    }
}
