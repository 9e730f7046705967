use super::Expr;

/// Tests that an optional expression holds a value. Rendered without
/// surrounding parentheses as `expr IS NOT NULL`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprHasValue {
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn has_value(expr: impl Into<Self>) -> Self {
        ExprHasValue {
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl From<ExprHasValue> for Expr {
    fn from(value: ExprHasValue) -> Self {
        Self::HasValue(value)
    }
}
