use super::{Formatter, ToSql};

use burrow_core::{stmt::Value, Result};

pub trait Params {
    fn push(&mut self, param: &Value) -> Placeholder;
}

/// A positional parameter, numbered from 1.
pub struct Placeholder(pub usize);

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        f.dst.push('?');
        Ok(())
    }
}
