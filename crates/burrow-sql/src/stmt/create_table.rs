use super::{ColumnDef, Name, Statement};

use burrow_core::schema::RecordMapping;

/// A statement to create a SQL table.
#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table.
    pub name: Name,

    /// Column definitions, in declaration order.
    pub columns: Vec<ColumnDef>,

    /// Whether or not to add an `IF NOT EXISTS` clause.
    pub if_not_exists: bool,
}

impl Statement {
    /// Creates the table described by `mapping` under the name `table`.
    ///
    /// This function _does not_ add an `IF NOT EXISTS` clause.
    pub fn create_table(table: &str, mapping: &RecordMapping) -> Self {
        CreateTable {
            name: Name::from(table),
            columns: mapping.columns.iter().map(ColumnDef::from_column).collect(),
            if_not_exists: false,
        }
        .into()
    }

    /// Creates the table described by `mapping` if it does not exist.
    ///
    /// This function _does_ add an `IF NOT EXISTS` clause.
    pub fn create_table_if_not_exists(mapping: &RecordMapping) -> Self {
        CreateTable {
            name: Name::from(&mapping.table),
            columns: mapping.columns.iter().map(ColumnDef::from_column).collect(),
            if_not_exists: true,
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
