use super::Expr;

/// A named function or method call, such as `to_upper(name)`.
///
/// Calls have no SQL translation; the compiler rejects them by name.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprFunc {
    pub name: String,
    pub args: Vec<Expr>,
}

impl Expr {
    pub fn func<T>(name: impl Into<String>, args: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Self>,
    {
        ExprFunc {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}
