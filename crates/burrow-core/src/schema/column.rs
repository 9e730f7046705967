use super::StorageClass;

/// Describes how one record field maps to a table column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Name of the field on the native record.
    pub field: String,

    /// Name of the column in the database. Defaults to the field name.
    pub name: String,

    /// How the column's values are stored.
    pub storage: StorageClass,

    /// Whether or not the column accepts null.
    pub nullable: bool,

    /// True if the column carries a `UNIQUE` constraint.
    pub unique: bool,

    /// True if the column is the table's primary key.
    pub primary_key: bool,

    /// A non-unique index over this column, if one is declared.
    pub index: Option<IndexDecl>,
}

/// A declared non-unique single-column index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexDecl {
    /// Explicit index name. When absent the name is `idx_{table}_{column}`.
    pub name: Option<String>,
}

impl Column {
    pub fn new(field: impl Into<String>, storage: StorageClass) -> Column {
        let field = field.into();
        Column {
            name: field.clone(),
            field,
            storage,
            nullable: false,
            unique: false,
            primary_key: false,
            index: None,
        }
    }

    /// Maps the field to a column with a different name.
    pub fn column_name(mut self, name: impl Into<String>) -> Column {
        self.name = name.into();
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Column {
        self.nullable = nullable;
        self
    }

    pub fn unique(mut self) -> Column {
        self.unique = true;
        self
    }

    pub fn primary_key(mut self) -> Column {
        self.primary_key = true;
        self
    }

    pub fn indexed(mut self) -> Column {
        self.index = Some(IndexDecl::default());
        self
    }

    pub fn indexed_as(mut self, name: impl Into<String>) -> Column {
        self.index = Some(IndexDecl {
            name: Some(name.into()),
        });
        self
    }

    /// True when the column name differs from the native field name.
    pub fn is_renamed(&self) -> bool {
        self.name != self.field
    }

    /// Primary key backed by an auto-incrementing integer.
    pub fn is_auto_increment(&self) -> bool {
        self.primary_key && self.storage.is_integer()
    }
}

impl IndexDecl {
    /// Resolves the index name for `column` on `table`.
    pub fn name_for(&self, table: &str, column: &str) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("idx_{table}_{column}"),
        }
    }
}
