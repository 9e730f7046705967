use super::{LiveColumn, LiveTable};

use burrow_core::schema::{Column, RecordMapping};

use regex::Regex;

/// A declared column that takes over a live column under its field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Rename {
    /// Name of the live column.
    pub(super) from: String,

    /// Declared column name.
    pub(super) to: String,
}

/// Finds live columns still named after the native field of a renamed
/// column.
pub(super) fn detect_renames(mapping: &RecordMapping, live: &LiveTable) -> Vec<Rename> {
    mapping
        .columns
        .iter()
        .filter(|column| column.is_renamed())
        .filter(|column| live.find_column(&column.name).is_none())
        .filter_map(|column| {
            let previous = live.find_column(&column.field)?;
            Some(Rename {
                from: previous.name.clone(),
                to: column.name.clone(),
            })
        })
        .collect()
}

/// The live columns with every rename applied.
pub(super) fn apply_renames(live: &LiveTable, renames: &[Rename]) -> LiveTable {
    let mut renamed = live.clone();

    for column in &mut renamed.columns {
        if let Some(rename) = renames
            .iter()
            .find(|rename| rename.from.eq_ignore_ascii_case(&column.name))
        {
            column.name = rename.to.clone();
        }
    }

    renamed
}

/// Why `ALTER TABLE ... ADD COLUMN` cannot add `column` to a populated
/// table, if it cannot. The engine requires a default for `NOT NULL` and
/// refuses `UNIQUE` and `PRIMARY KEY` outright.
pub(super) fn add_column_limitation(column: &Column) -> Option<&'static str> {
    if column.primary_key {
        Some("primary key")
    } else if column.unique {
        Some("unique")
    } else if !column.nullable {
        Some("not null without a default")
    } else {
        None
    }
}

/// Compares a declared column to its live counterpart. Returns a short
/// description of the first difference found.
pub(super) fn column_change(
    mapping: &RecordMapping,
    column: &Column,
    live: &LiveColumn,
    previous_name: Option<&str>,
    snapshot: &LiveTable,
) -> Option<&'static str> {
    if !type_matches(column, live) {
        return Some("type");
    }

    if column.primary_key != live.is_primary_key() {
        return Some("primary key");
    }

    // The engine reports primary keys inconsistently as NOT NULL
    if !column.primary_key && column.nullable == live.not_null {
        return Some("nullability");
    }

    if !column.primary_key
        && column.unique != is_unique(mapping, column, previous_name, snapshot)
    {
        return Some("uniqueness");
    }

    None
}

fn type_matches(column: &Column, live: &LiveColumn) -> bool {
    let declared = live.declared_type.trim();
    let expected = column.storage.to_string();

    if declared.eq_ignore_ascii_case(&expected) {
        return true;
    }

    // `INTEGER PRIMARY KEY AUTOINCREMENT` may be reported with its modifiers
    column.is_auto_increment() && declared.to_ascii_uppercase().starts_with("INTEGER")
}

/// Whether the live table enforces uniqueness on `column`.
///
/// Explicit unique indexes are matched on the exact parenthesized column
/// name. Inline `UNIQUE` constraints are backed by anonymous engine indexes
/// that cannot be attributed to a column by name. Instead they are counted:
/// one goes to a primary key that is not a rowid alias, and the rest must
/// cover every declared unique column lacking an explicit index.
fn is_unique(
    mapping: &RecordMapping,
    column: &Column,
    previous_name: Option<&str>,
    live: &LiveTable,
) -> bool {
    let table = &mapping.table;
    let names = std::iter::once(column.name.as_str()).chain(previous_name);
    let explicit = has_explicit_unique(table, names, live);

    if explicit || !column.unique {
        return explicit;
    }

    let inline = mapping
        .columns
        .iter()
        .filter(|other| other.unique && !other.primary_key)
        .filter(|other| {
            let names = [other.name.as_str(), other.field.as_str()];
            !has_explicit_unique(table, names, live)
        })
        .count();

    let engine = live
        .indexes
        .iter()
        .filter(|index| index.belongs_to(table) && index.is_engine_internal())
        .count();

    engine >= inline + primary_key_autoindexes(live)
}

fn has_explicit_unique<'a>(
    table: &str,
    names: impl IntoIterator<Item = &'a str>,
    live: &LiveTable,
) -> bool {
    names.into_iter().any(|name| {
        let pattern = format!(r"(?i)\(\s*`?{}`?\s*\)", regex::escape(name));
        let Ok(pattern) = Regex::new(&pattern) else {
            return false;
        };

        live.indexes
            .iter()
            .filter(|index| index.belongs_to(table) && index.is_unique())
            .filter_map(|index| index.sql.as_deref())
            .any(|sql| pattern.is_match(sql))
    })
}

/// Engine indexes owed to the live primary key. Only a single `INTEGER`
/// key aliases the rowid and needs none.
fn primary_key_autoindexes(live: &LiveTable) -> usize {
    let mut keys = live.columns.iter().filter(|column| column.is_primary_key());

    match (keys.next(), keys.next()) {
        (None, _) => 0,
        (Some(key), None) if key.declared_type.trim().eq_ignore_ascii_case("INTEGER") => 0,
        _ => 1,
    }
}
