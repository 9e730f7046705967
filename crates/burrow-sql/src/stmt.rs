mod add_column;
pub use add_column::AddColumn;

mod alter_table;
pub use alter_table::{AlterTable, AlterTableAction};

mod column_def;
pub use column_def::ColumnDef;

mod copy_table;
pub use copy_table::CopyTable;

mod create_index;
pub use create_index::CreateIndex;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod drop_column;
pub use drop_column::DropColumn;

mod drop_index;
pub use drop_index::DropIndex;

mod drop_table;
pub use drop_table::DropTable;

mod fields;
use fields::{field_value, primary_key};

mod insert;
pub use insert::Insert;

mod name;
pub use name::Name;

mod pragma;
pub use pragma::Pragma;

mod rename_column;
pub use rename_column::RenameColumn;

mod update;
pub use update::Update;

pub use burrow_core::stmt::*;

#[derive(Debug, Clone)]
pub enum Statement {
    AddColumn(AddColumn),
    AlterTable(AlterTable),
    CopyTable(CopyTable),
    CreateIndex(CreateIndex),
    CreateTable(CreateTable),
    Delete(Delete),
    DropColumn(DropColumn),
    DropIndex(DropIndex),
    DropTable(DropTable),
    Insert(Insert),
    Pragma(Pragma),
    Query(Query),
    RenameColumn(RenameColumn),
    Update(Update),
}

impl Statement {
    /// Returns `true` for schema statements.
    pub fn is_ddl(&self) -> bool {
        !matches!(
            self,
            Statement::Delete(_) | Statement::Insert(_) | Statement::Query(_) | Statement::Update(_)
        )
    }
}

impl From<Query> for Statement {
    fn from(value: Query) -> Self {
        Self::Query(value)
    }
}
