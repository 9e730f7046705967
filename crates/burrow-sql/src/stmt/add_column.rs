use super::{ColumnDef, Name, Statement};

use burrow_core::schema::Column;

/// A statement to add a column to a table.
#[derive(Debug, Clone)]
pub struct AddColumn {
    /// Name of the table.
    pub table: Name,

    /// The column definition.
    pub column: ColumnDef,
}

impl Statement {
    /// Adds a column to a table.
    pub fn add_column(table: &str, column: &Column) -> Self {
        AddColumn {
            table: Name::from(table),
            column: ColumnDef::from_column(column),
        }
        .into()
    }
}

impl From<AddColumn> for Statement {
    fn from(value: AddColumn) -> Self {
        Self::AddColumn(value)
    }
}
