use super::{Name, Statement};

/// A statement to rename a column in place.
#[derive(Debug, Clone)]
pub struct RenameColumn {
    /// Name of the table.
    pub table: Name,

    /// Current column name.
    pub from: Name,

    /// New column name.
    pub to: Name,
}

impl Statement {
    pub fn rename_column(table: &str, from: &str, to: &str) -> Self {
        RenameColumn {
            table: Name::from(table),
            from: Name::from(from),
            to: Name::from(to),
        }
        .into()
    }
}

impl From<RenameColumn> for Statement {
    fn from(value: RenameColumn) -> Self {
        Self::RenameColumn(value)
    }
}
