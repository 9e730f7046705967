use super::{Ident, Params, ToSql};

use crate::stmt;

use burrow_core::Result;

impl ToSql for &stmt::ColumnDef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        let name = Ident(&self.name);
        let ty = self.ty.to_string();
        let ty = ty.as_str();

        // SQLite only auto-increments a column declared exactly as
        // `INTEGER PRIMARY KEY`.
        if self.auto_increment {
            fmt!(f, name " INTEGER PRIMARY KEY AUTOINCREMENT");
            return Ok(());
        }

        fmt!(f, name " " ty);

        if self.primary_key {
            fmt!(f, " PRIMARY KEY NOT NULL");
            return Ok(());
        }

        if self.not_null {
            fmt!(f, " NOT NULL");
        }

        if self.unique {
            fmt!(f, " UNIQUE");
        }

        Ok(())
    }
}
