/// A column as reported by `PRAGMA table_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveColumn {
    pub name: String,

    /// Declared type text, exactly as stored in the schema.
    pub declared_type: String,

    pub not_null: bool,

    /// 1-based position within the primary key, or 0 when the column is not
    /// part of it.
    pub primary_key: u32,
}

/// An index as listed in `sqlite_master`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveIndex {
    pub name: String,

    /// Table the index belongs to.
    pub table: String,

    /// Defining SQL. Engine-created indexes have none.
    pub sql: Option<String>,
}

/// The live definition of one table, plus every index in the database.
///
/// Indexes of other tables are needed to avoid recreating a foreign-key index
/// that already exists on the joined table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveTable {
    pub columns: Vec<LiveColumn>,
    pub indexes: Vec<LiveIndex>,
}

impl LiveColumn {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> LiveColumn {
        LiveColumn {
            name: name.into(),
            declared_type: declared_type.into(),
            not_null: false,
            primary_key: 0,
        }
    }

    pub fn not_null(mut self) -> LiveColumn {
        self.not_null = true;
        self
    }

    pub fn primary_key(mut self) -> LiveColumn {
        self.primary_key = 1;
        self
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key > 0
    }
}

impl LiveIndex {
    pub fn new(name: impl Into<String>, table: impl Into<String>, sql: Option<&str>) -> LiveIndex {
        LiveIndex {
            name: name.into(),
            table: table.into(),
            sql: sql.map(str::to_string),
        }
    }

    /// True for indexes backing a `UNIQUE` constraint.
    pub fn is_unique(&self) -> bool {
        self.sql
            .as_deref()
            .is_some_and(|sql| sql.to_ascii_uppercase().contains("CREATE UNIQUE INDEX"))
    }

    /// True for indexes the engine creates for primary keys and inline
    /// `UNIQUE` constraints.
    pub fn is_engine_internal(&self) -> bool {
        self.name.starts_with("sqlite_autoindex")
    }

    pub fn belongs_to(&self, table: &str) -> bool {
        self.table.eq_ignore_ascii_case(table)
    }
}

impl LiveTable {
    pub fn new() -> LiveTable {
        LiveTable::default()
    }

    pub fn column(mut self, column: LiveColumn) -> LiveTable {
        self.columns.push(column);
        self
    }

    pub fn index(mut self, index: LiveIndex) -> LiveTable {
        self.indexes.push(index);
        self
    }

    pub fn find_column(&self, name: &str) -> Option<&LiveColumn> {
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
    }
}
