mod columns;
use columns::{add_column_limitation, apply_renames, column_change, detect_renames, Rename};

mod indices;
use indices::{desired_indices, sync_indices};

mod live;
pub use live::{LiveColumn, LiveIndex, LiveTable};

use crate::{
    stmt::{Name, Statement, Value},
    Capability, Serializer,
};

use burrow_core::{RecordMapping, Result};

/// Plans the DDL that brings one live table in line with a record mapping.
///
/// Renames, added and dropped columns are applied in place. Any other
/// column change, or a rename or drop the engine cannot express, rebuilds
/// the whole table through a shadow copy. Indexes are synchronized last.
#[derive(Debug)]
pub struct TableSynchronizer<'a> {
    mapping: &'a RecordMapping,
    capability: &'a Capability,
}

impl<'a> TableSynchronizer<'a> {
    pub fn new(mapping: &'a RecordMapping, capability: &'a Capability) -> Self {
        TableSynchronizer {
            mapping,
            capability,
        }
    }

    /// Returns the statements to run, in order. Empty when the live table
    /// already matches.
    pub fn plan(&self, live: &LiveTable) -> Result<Vec<Statement>> {
        let table = &self.mapping.table;
        let mutations = &self.capability.schema_mutations;

        let renames = detect_renames(self.mapping, live);
        let renamed = apply_renames(live, &renames);

        let added: Vec<_> = self
            .mapping
            .columns
            .iter()
            .filter(|column| renamed.find_column(&column.name).is_none())
            .collect();

        let dropped: Vec<_> = renamed
            .columns
            .iter()
            .filter(|column| self.mapping.column_by_name(&column.name).is_none())
            .collect();

        let changed = self.changed_column(&renamed, &renames);

        let rebuild = changed.is_some()
            || (!renames.is_empty() && !mutations.rename_column)
            || (!dropped.is_empty() && !mutations.drop_column);

        let mut statements = vec![];

        if rebuild {
            self.rebuild(&renamed, &renames, &mut statements);
        } else if live.columns.is_empty() {
            statements.push(Statement::create_table_if_not_exists(self.mapping));
        } else {
            for rename in &renames {
                statements.push(Statement::rename_column(table, &rename.from, &rename.to));
            }

            for column in added {
                // Emitted as declared; the engine rejects these forms
                if let Some(reason) = add_column_limitation(column) {
                    tracing::warn!(
                        table = %table,
                        column = %column.name,
                        reason,
                        "added column will be rejected by the engine"
                    );
                }
                statements.push(Statement::add_column(table, column));
            }

            for column in dropped {
                statements.push(Statement::drop_column(table, &column.name));
            }
        }

        let desired = desired_indices(self.mapping)?;
        sync_indices(table, &desired, live, rebuild, &mut statements);

        tracing::debug!(
            table = %table,
            rebuild,
            changed = changed.unwrap_or("none"),
            renames = renames.len(),
            statements = statements.len(),
            "planned schema sync"
        );

        Ok(statements)
    }

    /// Plans and serializes the migration script.
    pub fn script(&self, live: &LiveTable) -> Result<Vec<String>> {
        let serializer = Serializer::new(self.capability);

        self.plan(live)?
            .iter()
            .map(|stmt| {
                let mut params: Vec<Value> = vec![];
                serializer.serialize(stmt, &mut params)
            })
            .collect()
    }

    /// The first declared column whose live definition differs, described
    /// as `"{kind}"`.
    fn changed_column(&self, renamed: &LiveTable, renames: &[Rename]) -> Option<&'static str> {
        self.mapping.columns.iter().find_map(|column| {
            let live = renamed.find_column(&column.name)?;
            let previous_name = renames
                .iter()
                .find(|rename| rename.to.eq_ignore_ascii_case(&column.name))
                .map(|rename| rename.from.as_str());

            column_change(self.mapping, column, live, previous_name, renamed)
        })
    }

    fn rebuild(&self, renamed: &LiveTable, renames: &[Rename], statements: &mut Vec<Statement>) {
        let table = &self.mapping.table;
        let shadow = format!("{table}{}", self.capability.shadow_table_suffix);

        let columns = self
            .mapping
            .columns
            .iter()
            .map(|column| {
                let source = renamed.find_column(&column.name).map(|live| {
                    // Copy from the live name, which predates any rename
                    let original = renames
                        .iter()
                        .find(|rename| rename.to.eq_ignore_ascii_case(&live.name))
                        .map(|rename| rename.from.as_str())
                        .unwrap_or(&live.name);
                    Name::from(original)
                });

                (Name::from(&column.name), source)
            })
            .collect();

        statements.extend([
            Statement::pragma_disable_foreign_keys(),
            Statement::create_table(&shadow, self.mapping),
            Statement::copy_table(Name::from(table), Name::from(&shadow), columns),
            Statement::drop_table(table),
            Statement::alter_table_rename_to(&shadow, table),
            Statement::pragma_enable_foreign_keys(),
        ]);
    }
}
