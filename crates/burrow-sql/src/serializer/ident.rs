use super::{Formatter, Params, ToSql};

use burrow_core::Result;

/// A bare identifier. Table and column names are emitted unquoted.
#[derive(Clone, Copy)]
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        f.dst.push_str(self.0.as_ref());
        Ok(())
    }
}
