use super::{Name, Statement};

#[derive(Debug, Clone)]
pub struct CreateIndex {
    /// Name of the index
    pub name: Name,

    /// Which table to index
    pub on: Name,

    /// The columns to index
    pub columns: Vec<Name>,

    /// When true, the index is unique
    pub unique: bool,

    /// Whether or not to add an `IF NOT EXISTS` clause.
    pub if_not_exists: bool,
}

impl Statement {
    /// Creates a non-unique single-column index if it does not exist yet.
    pub fn create_index_if_not_exists(name: &str, table: &str, column: &str) -> Self {
        CreateIndex {
            name: Name::from(name),
            on: Name::from(table),
            columns: vec![Name::from(column)],
            unique: false,
            if_not_exists: true,
        }
        .into()
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
