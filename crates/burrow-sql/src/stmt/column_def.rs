use burrow_core::schema::{Column, StorageClass};

/// A column definition as it appears in `CREATE TABLE` and `ADD COLUMN`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: StorageClass,
    pub not_null: bool,
    pub unique: bool,
    pub primary_key: bool,
    pub auto_increment: bool,
}

impl ColumnDef {
    pub fn from_column(column: &Column) -> ColumnDef {
        ColumnDef {
            name: column.name.clone(),
            ty: column.storage,
            not_null: !column.nullable,
            unique: column.unique,
            primary_key: column.primary_key,
            auto_increment: column.is_auto_increment(),
        }
    }
}
