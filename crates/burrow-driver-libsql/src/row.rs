use crate::{decode, WireValue};

use burrow_core::{schema, Error, Record, Result};

/// Decodes one result row into `record`, returning how many columns were
/// assigned.
///
/// Result columns are matched to mapped columns by name, ignoring case, and
/// then by field name, which is how single-field projections alias their
/// column. Unknown columns are skipped. When a name repeats, as happens with
/// joined tables, only the first occurrence is decoded.
pub fn decode_row<T, C>(record: &mut T, columns: &[C], values: &[WireValue]) -> Result<usize>
where
    T: Record,
    C: AsRef<str>,
{
    let mapping = schema::mapping::<T>()?;

    if columns.len() != values.len() {
        return Err(Error::invalid_response(format!(
            "row has {} values for {} columns",
            values.len(),
            columns.len()
        )));
    }

    let mut visited: Vec<&str> = vec![];
    let mut assigned = 0;

    for (name, value) in columns.iter().zip(values) {
        let name = name.as_ref();

        let Some(column) = mapping.column_by_name(name).or_else(|| {
            mapping
                .columns
                .iter()
                .find(|column| column.field.eq_ignore_ascii_case(name))
        }) else {
            tracing::trace!(column = name, "skipping unmapped result column");
            continue;
        };

        if visited.contains(&column.field.as_str()) {
            continue;
        }
        visited.push(&column.field);

        let Some(target) = record.target(&column.field) else {
            return Err(Error::schema_resolution(format!(
                "record `{}` does not expose field `{}`",
                mapping.name, column.field
            )));
        };

        if decode(column.storage, target, value) {
            assigned += 1;
        } else {
            tracing::trace!(
                column = %column.name,
                storage = %column.storage,
                wire = value.kind(),
                "value left unassigned"
            );
        }
    }

    Ok(assigned)
}

/// Builds a record from one result row. Fields without a usable value keep
/// their default.
pub fn load_row<T, C>(columns: &[C], values: &[WireValue]) -> Result<T>
where
    T: Record + Default,
    C: AsRef<str>,
{
    let mut record = T::default();
    decode_row(&mut record, columns, values)?;
    Ok(record)
}
