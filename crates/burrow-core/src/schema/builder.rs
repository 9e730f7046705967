use super::{Column, JoinNavigation, RecordMapping, Result};

/// Field names treated as the primary key when none is marked explicitly.
const DEFAULT_PRIMARY_KEYS: &[&str] = &["Id", "Key", "ID", "KeyId", "Key_ID", "id"];

/// Incrementally builds a [`RecordMapping`].
///
/// ```text
/// RecordMapping::builder("User")
///     .table("users")
///     .column(Column::new("id", StorageClass::Integer).primary_key())
///     .column(Column::new("name", StorageClass::Text).column_name("user_name"))
///     .build()
/// ```
#[derive(Debug)]
pub struct Builder {
    name: String,
    table: Option<String>,
    columns: Vec<Column>,
    joins: Vec<JoinNavigation>,
}

impl Builder {
    pub(super) fn new(name: impl Into<String>) -> Builder {
        Builder {
            name: name.into(),
            table: None,
            columns: vec![],
            joins: vec![],
        }
    }

    /// Overrides the table name, which defaults to the record name.
    pub fn table(mut self, table: impl Into<String>) -> Builder {
        self.table = Some(table.into());
        self
    }

    pub fn column(mut self, column: Column) -> Builder {
        self.columns.push(column);
        self
    }

    pub fn join(mut self, join: JoinNavigation) -> Builder {
        self.joins.push(join);
        self
    }

    /// Validates and returns the mapping.
    pub fn build(mut self) -> Result<RecordMapping> {
        if !self.columns.iter().any(|column| column.primary_key) {
            let default_key = DEFAULT_PRIMARY_KEYS.iter().find_map(|key| {
                self.columns
                    .iter()
                    .position(|column| column.field == *key)
            });

            if let Some(index) = default_key {
                self.columns[index].primary_key = true;
            }
        }

        let mapping = RecordMapping {
            table: self.table.unwrap_or_else(|| self.name.clone()),
            name: self.name,
            columns: self.columns,
            joins: self.joins,
        };

        mapping.verify()?;
        Ok(mapping)
    }
}
