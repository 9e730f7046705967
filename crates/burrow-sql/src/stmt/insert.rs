use super::{field_value, Name, Statement, Value};

use burrow_core::{schema, Record, RecordMapping, Result};

/// `INSERT INTO table (columns) VALUES (?, ...)`
#[derive(Debug, Clone)]
pub struct Insert {
    pub table: Name,
    pub columns: Vec<Name>,
    pub values: Vec<Value>,
}

impl Statement {
    /// Inserts `record`. An auto-incrementing primary key is left for the
    /// store to assign.
    pub fn insert<T: Record>(record: &T) -> Result<Self> {
        let mapping = schema::mapping::<T>()?;
        Statement::insert_with(&mapping, record)
    }

    pub fn insert_with<T: Record>(mapping: &RecordMapping, record: &T) -> Result<Self> {
        let mut columns = vec![];
        let mut values = vec![];

        for column in &mapping.columns {
            if column.is_auto_increment() {
                continue;
            }

            columns.push(Name::from(&column.name));
            values.push(field_value(mapping, record, column)?);
        }

        Ok(Insert {
            table: Name::from(&mapping.table),
            columns,
            values,
        }
        .into())
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
