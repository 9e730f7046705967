use super::*;

/// A node of a query expression tree.
///
/// The tree is built by the caller against a record type. Field references
/// name the record's native fields; everything else the caller already
/// evaluated arrives as [`Expr::Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND two boolean expressions
    And(ExprAnd),

    /// Comparison or arithmetic between two expressions
    BinaryOp(ExprBinaryOp),

    /// Conversion of an expression to another native type
    Cast(ExprCast),

    /// Reference to a field of the query's root record
    Field(ExprField),

    /// A named function or method call
    Func(ExprFunc),

    /// Tests that an optional expression holds a value
    HasValue(ExprHasValue),

    /// Membership of an expression in a list
    InList(ExprInList),

    /// Tests an expression for null
    IsNull(ExprIsNull),

    /// Negation of a boolean expression
    Not(ExprNot),

    /// OR two boolean expressions
    Or(ExprOr),

    /// String pattern match
    Pattern(ExprPattern),

    /// Record construction, used for multi-field projections
    Record(ExprRecord),

    /// Evaluated constant
    Value(Value),

    /// Cosine distance between a vector column and a literal vector
    VectorDistance(ExprVectorDistance),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    /// Is a value that evaluates to null
    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }

    /// A list constant, used as the right-hand side of [`Expr::in_list`].
    pub fn list<T>(items: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Value>,
    {
        Self::Value(Value::list(items))
    }

    /// Short description of the node, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Expr::And(_) => "AND".to_string(),
            Expr::BinaryOp(e) => format!("operator `{}`", e.op),
            Expr::Cast(e) => format!("cast to {}", e.ty),
            Expr::Field(e) => format!("field `{}`", e.name),
            Expr::Func(e) => format!("method `{}`", e.name),
            Expr::HasValue(_) => "has_value".to_string(),
            Expr::InList(_) => "list membership".to_string(),
            Expr::IsNull(_) => "null test".to_string(),
            Expr::Not(_) => "NOT".to_string(),
            Expr::Or(_) => "OR".to_string(),
            Expr::Pattern(e) => format!("pattern `{}`", e.kind),
            Expr::Record(_) => "record construction".to_string(),
            Expr::Value(_) => "constant".to_string(),
            Expr::VectorDistance(_) => "vector_distance".to_string(),
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

macro_rules! impl_from_constant {
    ( $( $ty:ty ),* ) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

impl_from_constant!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    &String,
    &str,
    F32Vector,
    jiff::Timestamp
);
