use crate::{decode, WireValue};

use burrow_core::{
    schema::{self, StorageClass},
    stmt::Value,
    Error, Record, Result,
};

/// Writes the store-assigned row id into the record's primary key.
///
/// A key that already holds a value is left alone: only `0`, an empty
/// string or null count as unassigned. Returns `true` when the key was
/// written.
pub fn assign_last_insert_row_id<T: Record>(record: &mut T, id: i64) -> Result<bool> {
    let mapping = schema::mapping::<T>()?;

    let Some(key) = mapping.primary_key() else {
        return Err(Error::schema_resolution(format!(
            "record `{}` has no primary key",
            mapping.name
        )));
    };

    let missing_field = || {
        Error::schema_resolution(format!(
            "record `{}` does not expose field `{}`",
            mapping.name, key.field
        ))
    };

    let current = record.value(&key.field).ok_or_else(missing_field)?;

    let unassigned = match &current {
        Value::Null | Value::I64(0) | Value::U64(0) => true,
        Value::String(key) => key.is_empty(),
        _ => false,
    };

    if !unassigned {
        tracing::trace!(record = %mapping.name, "primary key already assigned");
        return Ok(false);
    }

    let target = record.target(&key.field).ok_or_else(missing_field)?;

    let (storage, wire) = if key.storage.is_text() {
        (StorageClass::Text, WireValue::Text(id.to_string()))
    } else {
        (StorageClass::Integer, WireValue::Integer(id))
    };

    Ok(decode(storage, target, &wire))
}
