use super::Expr;

/// Builds a new record from named expressions. Used by projections, where
/// each entry becomes `column AS name`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprRecord {
    pub fields: Vec<(String, Expr)>,
}

impl Expr {
    pub fn record<N, E>(fields: impl IntoIterator<Item = (N, E)>) -> Self
    where
        N: Into<String>,
        E: Into<Self>,
    {
        ExprRecord {
            fields: fields
                .into_iter()
                .map(|(name, expr)| (name.into(), expr.into()))
                .collect(),
        }
        .into()
    }
}

impl From<ExprRecord> for Expr {
    fn from(value: ExprRecord) -> Self {
        Self::Record(value)
    }
}
