use super::Value;

use burrow_core::{schema::Column, Error, Record, RecordMapping, Result};

/// Reads the value of `column` from `record`.
pub(super) fn field_value<T: Record>(
    mapping: &RecordMapping,
    record: &T,
    column: &Column,
) -> Result<Value> {
    record.value(&column.field).ok_or_else(|| {
        Error::schema_resolution(format!(
            "record `{}` does not expose field `{}`",
            mapping.name, column.field
        ))
    })
}

/// Reads the primary key column and value of `record`.
pub(super) fn primary_key<'a, T: Record>(
    mapping: &'a RecordMapping,
    record: &T,
) -> Result<(&'a Column, Value)> {
    let Some(key) = mapping.primary_key() else {
        return Err(Error::schema_resolution(format!(
            "record `{}` has no primary key",
            mapping.name
        )));
    };

    Ok((key, field_value(mapping, record, key)?))
}
