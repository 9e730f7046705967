use super::Expr;

/// Cosine distance between a fixed-size vector column and a literal vector.
///
/// Only valid as an ordering key, where it ranks rows by nearest neighbor.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprVectorDistance {
    /// The vector column.
    pub expr: Box<Expr>,

    /// The literal vector to compare against.
    pub vector: Box<Expr>,
}

impl Expr {
    pub fn vector_distance(expr: impl Into<Self>, vector: impl Into<Self>) -> Self {
        ExprVectorDistance {
            expr: Box::new(expr.into()),
            vector: Box::new(vector.into()),
        }
        .into()
    }
}

impl From<ExprVectorDistance> for Expr {
    fn from(value: ExprVectorDistance) -> Self {
        Self::VectorDistance(value)
    }
}
