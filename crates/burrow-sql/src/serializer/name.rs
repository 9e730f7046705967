use super::{Ident, Params, Period, ToSql};

use crate::stmt;

use burrow_core::Result;

impl ToSql for &stmt::Name {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        let parts = Period(self.0.iter().map(Ident));
        fmt!(f, parts);
        Ok(())
    }
}
