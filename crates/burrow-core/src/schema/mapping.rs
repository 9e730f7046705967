use super::{Builder, Column, JoinNavigation};

/// The complete schema description of one record type.
#[derive(Debug, Clone)]
pub struct RecordMapping {
    /// Name of the native record type.
    pub name: String,

    /// Name of the table the record is stored in.
    pub table: String,

    /// Mapped columns, in declaration order.
    pub columns: Vec<Column>,

    /// Read-side joins, in declaration order.
    pub joins: Vec<JoinNavigation>,
}

impl RecordMapping {
    pub fn builder(name: impl Into<String>) -> Builder {
        Builder::new(name)
    }

    pub fn primary_key(&self) -> Option<&Column> {
        self.columns.iter().find(|column| column.primary_key)
    }

    /// Finds the column mapped from a native field.
    pub fn column_by_field(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.field == field)
    }

    /// Finds a column by name, ignoring ASCII case.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
    }
}
