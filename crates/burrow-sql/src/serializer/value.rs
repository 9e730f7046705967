use super::{Params, ToSql};

use burrow_core::{
    stmt::{F32Vector, Value},
    Error, Result,
};

impl ToSql for &Value {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        match self {
            // Null is never parameterized
            Value::Null => fmt!(f, "NULL"),
            Value::List(_) => {
                return Err(Error::unsupported_expression(
                    "list constant outside a membership test",
                ))
            }
            value => {
                let placeholder = f.params.push(value);
                fmt!(f, placeholder);
            }
        }
        Ok(())
    }
}

/// A literal vector: `vector32('[0.1, 0.2]')`.
pub(super) struct VectorLiteral<'a>(pub(super) &'a F32Vector);

impl ToSql for VectorLiteral<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        let mut components = String::new();
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                components.push_str(", ");
            }
            components.push_str(&item.to_string());
        }

        let components = components.as_str();
        fmt!(f, "vector32('[" components "]')");
        Ok(())
    }
}

/// A value that is always bound as a parameter, null included.
pub(super) struct Param<'a>(pub(super) &'a Value);

impl ToSql for Param<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        let placeholder = f.params.push(self.0);
        fmt!(f, placeholder);
        Ok(())
    }
}
