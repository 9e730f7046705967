use super::{Name, Statement};

/// A statement to drop a column from a table.
#[derive(Debug, Clone)]
pub struct DropColumn {
    /// Name of the table.
    pub table: Name,

    /// Name of the column to drop.
    pub name: Name,
}

impl Statement {
    /// Drops a column.
    pub fn drop_column(table: &str, column: &str) -> Self {
        DropColumn {
            table: Name::from(table),
            name: Name::from(column),
        }
        .into()
    }
}

impl From<DropColumn> for Statement {
    fn from(value: DropColumn) -> Self {
        Self::DropColumn(value)
    }
}
