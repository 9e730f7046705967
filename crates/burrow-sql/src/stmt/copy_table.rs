use super::{Name, Statement};

/// A statement to copy rows from one table to another.
///
/// Generates: `INSERT INTO target (a, b, c) SELECT a, old_b AS b, NULL AS c FROM source`
#[derive(Debug, Clone)]
pub struct CopyTable {
    /// Source table name.
    pub source: Name,

    /// Target table name.
    pub target: Name,

    /// Column mappings: (target column, source column). A missing source
    /// column fills the target with `NULL`.
    pub columns: Vec<(Name, Option<Name>)>,
}

impl Statement {
    /// Creates a statement that copies rows from one table to another.
    pub fn copy_table(source: Name, target: Name, columns: Vec<(Name, Option<Name>)>) -> Self {
        CopyTable {
            source,
            target,
            columns,
        }
        .into()
    }
}

impl From<CopyTable> for Statement {
    fn from(value: CopyTable) -> Self {
        Self::CopyTable(value)
    }
}
