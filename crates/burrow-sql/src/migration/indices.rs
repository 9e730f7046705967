use super::LiveTable;
use crate::stmt::Statement;

use burrow_core::{schema::RecordMapping, Error, Result};

use indexmap::IndexMap;

/// A non-unique single-column index the record wants to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct DesiredIndex {
    pub(super) name: String,
    pub(super) table: String,
    pub(super) column: String,
}

/// Collects declared column indexes and foreign-key indexes of joins, keyed
/// by lower-cased index name.
pub(super) fn desired_indices(mapping: &RecordMapping) -> Result<IndexMap<String, DesiredIndex>> {
    let mut desired = IndexMap::new();

    for column in &mapping.columns {
        let Some(index) = &column.index else {
            continue;
        };

        let name = index.name_for(&mapping.table, &column.name);
        desired
            .entry(name.to_ascii_lowercase())
            .or_insert(DesiredIndex {
                name,
                table: mapping.table.clone(),
                column: column.name.clone(),
            });
    }

    for join in mapping.joins.iter().filter(|join| join.foreign_key_index) {
        let right = join.right.resolve().map_err(|err| {
            err.context(Error::schema_resolution(format!(
                "cannot resolve join target `{}`",
                join.right.name()
            )))
        })?;

        let Some(column) = right.column_by_field(&join.right_field) else {
            return Err(Error::schema_resolution(format!(
                "join target `{}` has no mapped field `{}`",
                right.name, join.right_field
            )));
        };

        let name = format!("idx_{}_{}", right.table, column.name);
        desired
            .entry(name.to_ascii_lowercase())
            .or_insert(DesiredIndex {
                name,
                table: right.table.clone(),
                column: column.name.clone(),
            });
    }

    Ok(desired)
}

/// Creates missing desired indexes, then drops stale ones of `table`.
///
/// After a rebuild the table's own indexes are gone, so they are neither
/// considered present nor dropped.
pub(super) fn sync_indices(
    table: &str,
    desired: &IndexMap<String, DesiredIndex>,
    live: &LiveTable,
    rebuilt: bool,
    statements: &mut Vec<Statement>,
) {
    let survives = |index: &&super::LiveIndex| !(rebuilt && index.belongs_to(table));

    for index in desired.values() {
        let exists = live
            .indexes
            .iter()
            .filter(survives)
            .any(|live| live.name.eq_ignore_ascii_case(&index.name));

        if !exists {
            statements.push(Statement::create_index_if_not_exists(
                &index.name,
                &index.table,
                &index.column,
            ));
        }
    }

    for index in live.indexes.iter().filter(survives) {
        if !index.belongs_to(table) || index.is_unique() || index.is_engine_internal() {
            continue;
        }

        if !desired.contains_key(&index.name.to_ascii_lowercase()) {
            statements.push(Statement::drop_index_if_exists(&index.name));
        }
    }
}
