use super::{primary_key, Name, Statement, Value};

use burrow_core::{schema, Record, RecordMapping, Result};

/// `DELETE FROM table WHERE key = ?`
#[derive(Debug, Clone)]
pub struct Delete {
    pub table: Name,
    pub key: (Name, Value),
}

impl Statement {
    /// Deletes `record` by primary key.
    pub fn delete<T: Record>(record: &T) -> Result<Self> {
        let mapping = schema::mapping::<T>()?;
        Statement::delete_with(&mapping, record)
    }

    pub fn delete_with<T: Record>(mapping: &RecordMapping, record: &T) -> Result<Self> {
        let (key, key_value) = primary_key(mapping, record)?;

        Ok(Delete {
            table: Name::from(&mapping.table),
            key: (Name::from(&key.name), key_value),
        }
        .into())
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
