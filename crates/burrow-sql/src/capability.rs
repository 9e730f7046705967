/// Dialect features the serializer and the synchronizer rely on.
#[derive(Debug)]
pub struct Capability {
    /// Which schema mutations can be expressed in place.
    pub schema_mutations: SchemaMutations,

    /// SQL: supports `vector_distance_cos` and `vector32` for nearest-neighbor
    /// ordering.
    pub vector_search: bool,

    /// Suffix appended to a table name to build its shadow table during a
    /// rebuild.
    pub shadow_table_suffix: &'static str,
}

#[derive(Debug)]
pub struct SchemaMutations {
    /// Supports `ALTER TABLE .. RENAME COLUMN`.
    pub rename_column: bool,

    /// Supports `ALTER TABLE .. DROP COLUMN`.
    pub drop_column: bool,
}

impl Capability {
    /// libSQL capabilities.
    pub const LIBSQL: Self = Self {
        schema_mutations: SchemaMutations {
            rename_column: true,
            drop_column: true,
        },
        vector_search: true,
        shadow_table_suffix: "_new",
    };

    /// SQLite releases older than 3.25. Renames and drops fall back to a
    /// table rebuild.
    pub const SQLITE_LEGACY: Self = Self {
        schema_mutations: SchemaMutations {
            rename_column: false,
            drop_column: false,
        },
        vector_search: false,
        ..Self::LIBSQL
    };
}
