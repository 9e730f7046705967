use super::{Expr, Type};

/// Converts an expression to another native type.
///
/// Casts are transparent to SQL generation: the inner expression is
/// rendered as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCast {
    /// Expression to cast
    pub expr: Box<Expr>,

    /// Type to cast to
    pub ty: Type,
}

impl Expr {
    pub fn cast(expr: impl Into<Self>, ty: Type) -> Self {
        ExprCast {
            expr: Box::new(expr.into()),
            ty,
        }
        .into()
    }

    pub fn is_cast(&self) -> bool {
        matches!(self, Self::Cast(_))
    }

    /// Strips any number of casts.
    pub fn strip_casts(&self) -> &Expr {
        let mut expr = self;
        while let Expr::Cast(cast) = expr {
            expr = &cast.expr;
        }
        expr
    }
}

impl From<ExprCast> for Expr {
    fn from(value: ExprCast) -> Self {
        Self::Cast(value)
    }
}
