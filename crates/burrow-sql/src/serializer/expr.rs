use super::{value::Param, Comma, Formatter, Ident, Params, ToSql};

use burrow_core::{
    stmt::{BinaryOp, Expr, ExprBinaryOp, ExprInList, ExprPattern, Value},
    Error, Result,
};

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            Expr::And(expr) => {
                let (lhs, rhs) = (&*expr.lhs, &*expr.rhs);
                fmt!(f, "(" lhs " AND " rhs ")");
            }
            Expr::Or(expr) => {
                let (lhs, rhs) = (&*expr.lhs, &*expr.rhs);
                fmt!(f, "(" lhs " OR " rhs ")");
            }
            Expr::Not(expr) => {
                let inner = &*expr.expr;
                fmt!(f, "NOT (" inner ")");
            }
            Expr::BinaryOp(expr) => expr.to_sql(f)?,
            // Casts do not change the SQL
            Expr::Cast(expr) => (&*expr.expr).to_sql(f)?,
            Expr::Field(field) => {
                let column = column_name(f, &field.name)?;
                fmt!(f, Ident(column));
            }
            Expr::HasValue(expr) => {
                let inner = &*expr.expr;
                fmt!(f, inner " IS NOT NULL");
            }
            Expr::IsNull(expr) => {
                let inner = &*expr.expr;
                let test = if expr.negate { " IS NOT NULL" } else { " IS NULL" };
                fmt!(f, "(" inner test ")");
            }
            Expr::InList(expr) => expr.to_sql(f)?,
            Expr::Pattern(expr) => expr.to_sql(f)?,
            Expr::Value(value) => value.to_sql(f)?,
            Expr::Func(_) | Expr::Record(_) | Expr::VectorDistance(_) => {
                return Err(Error::unsupported_expression(self.describe()));
            }
        }

        Ok(())
    }
}

impl ToSql for &ExprBinaryOp {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let (lhs, rhs) = (self.lhs.strip_casts(), self.rhs.strip_casts());

        // Comparing against a null constant is a null test
        if self.op.is_eq() || self.op.is_ne() {
            let operand = match (lhs.is_value_null(), rhs.is_value_null()) {
                (false, true) => Some(lhs),
                (true, false) => Some(rhs),
                _ => None,
            };

            if let Some(operand) = operand {
                let test = if self.op.is_eq() {
                    " IS NULL"
                } else {
                    " IS NOT NULL"
                };
                fmt!(f, "(" operand test ")");
                return Ok(());
            }
        }

        if self.op == BinaryOp::Mod {
            return Err(Error::unsupported_expression(format!(
                "operator `{}`",
                self.op
            )));
        }

        let op = self.op.to_string();
        let op = op.as_str();
        fmt!(f, "(" lhs " " op " " rhs ")");
        Ok(())
    }
}

impl ToSql for &ExprInList {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let Expr::Value(Value::List(items)) = self.list.strip_casts() else {
            return Err(Error::unsupported_expression(format!(
                "membership test against {}",
                self.list.describe()
            )));
        };

        if items.is_empty() {
            return Err(Error::invalid_argument(
                "membership test requires a non-empty list",
            ));
        }

        // Every element is bound, nulls included
        let expr = &*self.expr;
        let items = Comma(items.iter().map(Param));
        fmt!(f, expr " IN (" items ")");
        Ok(())
    }
}

impl ToSql for &ExprPattern {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let Expr::Field(field) = self.expr.strip_casts() else {
            return Err(Error::unsupported_expression(format!(
                "{} on {}",
                self.kind,
                self.expr.describe()
            )));
        };

        let text = match self.pattern.strip_casts() {
            Expr::Value(value) => pattern_text(value).ok_or_else(|| {
                Error::invalid_argument(format!(
                    "{} requires a non-null scalar pattern",
                    self.kind
                ))
            })?,
            other => {
                return Err(Error::unsupported_expression(format!(
                    "{} with {} as pattern",
                    self.kind,
                    other.describe()
                )))
            }
        };

        let column = column_name(f, &field.name)?;
        let pattern = Value::String(self.kind.apply(&text));
        let placeholder = f.params.push(&pattern);
        fmt!(f, Ident(column) " LIKE " placeholder);
        Ok(())
    }
}

/// Resolves a field of the query's root record to its column name.
pub(super) fn column_name<'a, P>(f: &Formatter<'a, P>, field: &str) -> Result<&'a str> {
    let Some(mapping) = f.mapping else {
        return Err(Error::schema_resolution(format!(
            "field `{field}` referenced outside of a query"
        )));
    };

    match mapping.column_by_field(field) {
        Some(column) => Ok(&column.name),
        None => Err(Error::schema_resolution(format!(
            "record `{}` has no mapped field `{field}`",
            mapping.name
        ))),
    }
}

/// Invariant textual form of a scalar pattern.
fn pattern_text(value: &Value) -> Option<String> {
    match value {
        Value::String(value) => Some(value.clone()),
        Value::Bool(value) => Some(value.to_string()),
        Value::I64(value) => Some(value.to_string()),
        Value::U64(value) => Some(value.to_string()),
        Value::F32(value) => Some(value.to_string()),
        Value::F64(value) => Some(value.to_string()),
        Value::Timestamp(value) => Some(value.to_string()),
        Value::Bytes(_) | Value::List(_) | Value::Null | Value::Vector(_) => None,
    }
}
