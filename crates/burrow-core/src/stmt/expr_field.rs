use super::Expr;

/// Reference to a field of the query's root record, by native field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprField {
    pub name: String,
}

impl Expr {
    pub fn field(name: impl Into<String>) -> Self {
        ExprField { name: name.into() }.into()
    }

    pub fn as_field(&self) -> Option<&ExprField> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }
}

impl From<ExprField> for Expr {
    fn from(value: ExprField) -> Self {
        Self::Field(value)
    }
}
