use super::{field_value, primary_key, Name, Statement, Value};

use burrow_core::{schema, Error, Record, RecordMapping, Result};

/// `UPDATE table SET a = ?, ... WHERE key = ?`
#[derive(Debug, Clone)]
pub struct Update {
    pub table: Name,
    pub assignments: Vec<(Name, Value)>,
    pub key: (Name, Value),
}

impl Statement {
    /// Updates `record` by primary key.
    ///
    /// Null fields are left out of the `SET` list, so an update never clears
    /// a stored value.
    pub fn update<T: Record>(record: &T) -> Result<Self> {
        let mapping = schema::mapping::<T>()?;
        Statement::update_with(&mapping, record)
    }

    pub fn update_with<T: Record>(mapping: &RecordMapping, record: &T) -> Result<Self> {
        let (key, key_value) = primary_key(mapping, record)?;

        let mut assignments = vec![];

        for column in &mapping.columns {
            if column.primary_key {
                continue;
            }

            let value = field_value(mapping, record, column)?;
            if value.is_null() {
                continue;
            }

            assignments.push((Name::from(&column.name), value));
        }

        if assignments.is_empty() {
            return Err(Error::invalid_argument(format!(
                "update of `{}` has no non-null fields to assign",
                mapping.name
            )));
        }

        Ok(Update {
            table: Name::from(&mapping.table),
            assignments,
            key: (Name::from(&key.name), key_value),
        }
        .into())
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
