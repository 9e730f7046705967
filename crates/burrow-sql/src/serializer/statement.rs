use super::{value::Param, Comma, Formatter, Params, ToSql};

use crate::stmt::{self, Name, Statement, Value};

use burrow_core::Result;

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            Statement::AddColumn(stmt) => stmt.to_sql(f),
            Statement::AlterTable(stmt) => stmt.to_sql(f),
            Statement::CopyTable(stmt) => stmt.to_sql(f),
            Statement::CreateIndex(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DropColumn(stmt) => stmt.to_sql(f),
            Statement::DropIndex(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Pragma(stmt) => stmt.to_sql(f),
            // Queries need a plan; `Serializer::serialize` builds one.
            Statement::Query(query) => {
                burrow_core::bail!("query on `{}` serialized without a plan", query.source.name())
            }
            Statement::RenameColumn(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::AddColumn {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let (table, column) = (&self.table, &self.column);
        fmt!(f, "ALTER TABLE " table " ADD COLUMN " column);
        Ok(())
    }
}

impl ToSql for &stmt::AlterTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let name = &self.name;

        match &self.action {
            stmt::AlterTableAction::RenameTo(new_name) => {
                fmt!(f, "ALTER TABLE " name " RENAME TO " new_name);
            }
        }

        Ok(())
    }
}

impl ToSql for &stmt::CopyTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let (source, target) = (&self.source, &self.target);
        let target_columns = Comma(self.columns.iter().map(|(target, _)| target));
        let source_columns = Comma(
            self.columns
                .iter()
                .map(|(target, source)| CopySource { target, source: source.as_ref() }),
        );

        fmt!(
            f,
            "INSERT INTO " target " (" target_columns ") SELECT " source_columns " FROM " source
        );
        Ok(())
    }
}

/// One entry of the `SELECT` list feeding a table copy.
struct CopySource<'a> {
    target: &'a Name,
    source: Option<&'a Name>,
}

impl ToSql for CopySource<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let target = self.target;

        match self.source {
            Some(source) if source.base().eq_ignore_ascii_case(target.base()) => {
                fmt!(f, source);
            }
            Some(source) => fmt!(f, source " AS " target),
            None => fmt!(f, "NULL AS " target),
        }

        Ok(())
    }
}

impl ToSql for &stmt::CreateIndex {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let unique = if self.unique { "UNIQUE " } else { "" };
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };
        let (name, on) = (&self.name, &self.on);
        let columns = Comma(&self.columns);

        fmt!(
            f,
            "CREATE " unique "INDEX " if_not_exists name " ON " on "(" columns ")"
        );
        Ok(())
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };
        let name = &self.name;
        let columns = Comma(&self.columns);

        fmt!(f, "CREATE TABLE " if_not_exists name " (" columns ")");
        Ok(())
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let table = &self.table;
        let key = KeyFilter(&self.key);

        fmt!(f, "DELETE FROM " table key);
        Ok(())
    }
}

impl ToSql for &stmt::DropColumn {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let (table, name) = (&self.table, &self.name);
        fmt!(f, "ALTER TABLE " table " DROP COLUMN " name);
        Ok(())
    }
}

impl ToSql for &stmt::DropIndex {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        let name = &self.name;

        fmt!(f, "DROP INDEX " if_exists name);
        Ok(())
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        let name = &self.name;

        fmt!(f, "DROP TABLE " if_exists name);
        Ok(())
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let table = &self.table;
        let columns = Comma(&self.columns);
        let values = Comma(self.values.iter().map(Param));

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
        Ok(())
    }
}

impl ToSql for &stmt::Pragma {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let name = &self.name;
        fmt!(f, "PRAGMA " name);

        if let Some(value) = &self.value {
            fmt!(f, "=" value);
        }

        Ok(())
    }
}

impl ToSql for &stmt::RenameColumn {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let (table, from, to) = (&self.table, &self.from, &self.to);
        fmt!(f, "ALTER TABLE " table " RENAME COLUMN " from " TO " to);
        Ok(())
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let table = &self.table;
        let assignments = Comma(self.assignments.iter().map(Assignment));
        let key = KeyFilter(&self.key);

        fmt!(f, "UPDATE " table " SET " assignments key);
        Ok(())
    }
}

/// `column = ?`
struct Assignment<'a>(&'a (Name, Value));

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let (column, value) = (&self.0 .0, Param(&self.0 .1));
        fmt!(f, column " = " value);
        Ok(())
    }
}

/// ` WHERE key = ?`
struct KeyFilter<'a>(&'a (Name, Value));

impl ToSql for KeyFilter<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let assignment = Assignment(self.0);
        fmt!(f, " WHERE " assignment);
        Ok(())
    }
}
